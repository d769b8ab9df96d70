//! Solar radiation absorption profile.
//!
//! Shortwave radiation is split into a red, strongly absorbed band and a
//! blue, penetrating band, each decaying exponentially with depth:
//!
//! ```text
//! I(z)/I₀ = r·exp(-z/β₁) + (1 - r)·exp(-z/β₂)
//! ```
//!
//! The fraction absorbed in cell `[z, z + dz)` is `I(z)/I₀ - I(z + dz)/I₀`.
//! With the default extinction scales (β₁ = 0.6 m, β₂ = 20 m) roughly 60%
//! of the incoming shortwave is deposited in the top metre.

/// Fraction of incident shortwave in the red (non-penetrating) band.
pub const RED_FRACTION: f64 = 0.6;

/// Compute the fraction of incident shortwave absorbed in each depth cell.
///
/// # Arguments
/// * `beta_red` - Extinction scale of red light (m)
/// * `beta_blue` - Extinction scale of blue light (m)
/// * `n_levels` - Number of depth cells
/// * `dz` - Cell thickness (m)
///
/// # Example
/// ```
/// use pwp_rs::source::absorb;
///
/// let absrb = absorb(0.6, 20.0, 100, 1.0);
/// let total: f64 = absrb.iter().sum();
/// assert!(total < 1.0);
/// assert!(absrb[0] > absrb[1]);
/// ```
pub fn absorb(beta_red: f64, beta_blue: f64, n_levels: usize, dz: f64) -> Vec<f64> {
    let blue_fraction = 1.0 - RED_FRACTION;
    let transmitted = |z: f64| {
        RED_FRACTION * (-z / beta_red).exp() + blue_fraction * (-z / beta_blue).exp()
    };

    (0..n_levels)
        .map(|i| {
            let z_top = i as f64 * dz;
            transmitted(z_top) - transmitted(z_top + dz)
        })
        .collect()
}

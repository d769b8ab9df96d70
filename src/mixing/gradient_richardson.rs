//! Gradient Richardson number relaxation.
//!
//! Shear instability between adjacent levels is relieved by mixing the pair
//! with the smallest gradient Richardson number
//!
//! ```text
//! Rg = g·dz·(Δρ/ρ) / |Δu|²
//! ```
//!
//! just enough to lift it slightly above the critical value. Mixing is
//! partial (see [`stir`]) so the profile relaxes toward marginal stability
//! instead of jumping to a homogeneous state. After each stir only the
//! neighbourhood of the mixed pair is rescanned; once that neighbourhood is
//! stable the whole column is checked again before returning.

use log::trace;

use crate::column::ColumnState;
use crate::equations::SeawaterEos;
use crate::error::PwpError;
use crate::types::DepthIndex;

/// Squared shear below which a pair is treated as unsheared.
pub const SHEAR_EPSILON: f64 = 1e-10;

/// Gradient Richardson number between levels `j` and `j + 1`.
///
/// Returns `+∞` when the squared velocity difference is below
/// [`SHEAR_EPSILON`], so unsheared pairs are never selected for mixing.
pub fn gradient_richardson(column: &ColumnState, j: DepthIndex, g: f64, dz: f64) -> f64 {
    let k = j.next();
    let d = &column.density;
    let dd = (d[k] - d[j]) / d[j];
    let dv = (column.u[k] - column.u[j]).powi(2) + (column.v[k] - column.v[j]).powi(2);

    if dv < SHEAR_EPSILON {
        f64::INFINITY
    } else {
        g * dz * dd / dv
    }
}

/// Partially mix levels `j` and `j + 1` so that their Richardson number
/// moves from `r` to just above the critical value `rc`.
///
/// The target is `rnew = rc + (0.02 + (rc - r)/2)/5`; each property moves
/// by `f/2` of the pair difference with `f = 1 - r/rnew`, which scales the
/// pair differences by `r/rnew`. Density is recomputed at the two levels
/// only.
pub fn stir<E: SeawaterEos>(column: &mut ColumnState, rc: f64, r: f64, j: DepthIndex, eos: &E) {
    let k = j.next();
    let rcon = 0.02 + (rc - r) / 2.0;
    let rnew = rc + rcon / 5.0;
    let f = 1.0 - r / rnew;

    for values in [
        &mut column.temperature,
        &mut column.salinity,
        &mut column.u,
        &mut column.v,
    ] {
        let delta = (values[k] - values[j]) * f / 2.0;
        values[k] -= delta;
        values[j] += delta;
    }

    column.update_density_at(eos, j);
    column.update_density_at(eos, k);
}

/// Relax gradient Richardson instability anywhere in the column.
///
/// Returns the number of stir operations performed.
///
/// # Errors
/// [`PwpError::GradientMixingNotConverged`] if the column is still
/// unstable after `max_iterations` stirs.
pub fn gradient_mix<E: SeawaterEos>(
    column: &mut ColumnState,
    g: f64,
    dz: f64,
    rg: f64,
    eos: &E,
    max_iterations: usize,
) -> Result<usize, PwpError> {
    let n = column.len();
    if n < 2 {
        return Ok(0);
    }

    // Pair indices j (mixing j with j + 1) that still need scanning
    let full = 0..n - 1;
    let mut window = full.clone();
    let mut iterations = 0;

    loop {
        let Some((j_min, r_min)) = DepthIndex::range_iter(
            DepthIndex::new(window.start),
            DepthIndex::new(window.end),
        )
        .map(|j| (j, gradient_richardson(column, j, g, dz)))
        .min_by(|a, b| a.1.total_cmp(&b.1)) else {
            return Ok(iterations);
        };

        if r_min > rg || r_min.is_nan() {
            if window != full {
                // Stable near the last stir; confirm over the whole column.
                window = full.clone();
                continue;
            }
            if iterations > 0 {
                trace!("gradient mixing: {iterations} stirs");
            }
            return Ok(iterations);
        }

        if iterations >= max_iterations {
            return Err(PwpError::GradientMixingNotConverged { iterations, r_min });
        }

        stir(column, rg, r_min, j_min, eos);
        iterations += 1;

        let j = j_min.get();
        window = j.saturating_sub(2)..(j + 2).min(n - 1);
    }
}

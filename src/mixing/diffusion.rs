//! Background diapycnal diffusion.
//!
//! Explicit second-order smoothing of the interior levels:
//!
//! ```text
//! a[i] ← a[i] + dstab·(a[i-1] - 2·a[i] + a[i+1]),   i = 1..n-2
//! ```
//!
//! with `dstab = dt·κ/dz²`. The update uses the values from before the
//! sweep at every level. Both end levels are left untouched, so the scheme
//! neither adds nor removes property through the boundaries. Stable for
//! `dstab ≤ 0.5`.

use crate::column::ColumnState;
use crate::equations::SeawaterEos;

/// Diffuse one profile in place.
///
/// Profiles shorter than three levels have no interior and are unchanged.
pub fn diffuse(dstab: f64, values: &mut [f64]) {
    let n = values.len();
    if n < 3 {
        return;
    }

    // Pre-update value of the level above the one being updated
    let mut left = values[0];
    for i in 1..n - 1 {
        let centre = values[i];
        values[i] = centre + dstab * (left - 2.0 * centre + values[i + 1]);
        left = centre;
    }
}

/// Diffuse temperature, salinity and velocity, recomputing density from
/// the diffused tracers.
pub fn diffuse_column<E: SeawaterEos>(column: &mut ColumnState, dstab: f64, eos: &E) {
    diffuse(dstab, &mut column.temperature);
    diffuse(dstab, &mut column.salinity);
    column.update_density(eos);
    diffuse(dstab, &mut column.u);
    diffuse(dstab, &mut column.v);
}

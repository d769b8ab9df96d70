//! Bulk Richardson number mixing.
//!
//! Wind-driven shear across the base of the mixed layer entrains the water
//! below. The mixed layer is deepened one level at a time while the bulk
//! Richardson number between a level and the surface,
//!
//! ```text
//! Rb = g·h·(Δρ/ρ₀) / |Δu|²
//! ```
//!
//! stays at or below the critical value.

use log::trace;

use super::column_mix::mix;
use crate::column::ColumnState;
use crate::equations::SeawaterEos;
use crate::types::DepthIndex;
use crate::vertical::DepthGrid;

/// Critical bulk Richardson numbers at or below this disable bulk mixing.
pub const BULK_MIXING_THRESHOLD: f64 = 1e-5;

/// Bulk Richardson number between level `j` and the surface.
///
/// Returns `+∞` when there is no shear.
///
/// # Panics
/// If `j` is not a level of the column.
pub fn bulk_richardson(column: &ColumnState, grid: &DepthGrid, j: DepthIndex, g: f64) -> f64 {
    let d = &column.density;
    let dd = (d[j] - d[0]) / d[0];
    let dv = (column.u[j] - column.u[0]).powi(2) + (column.v[j] - column.v[0]).powi(2);

    if dv == 0.0 {
        f64::INFINITY
    } else {
        g * grid.depth(j) * dd / dv
    }
}

/// Deepen the mixed layer from `start` downward until the bulk Richardson
/// number exceeds `rb`.
///
/// Returns the deepest level mixed into the surface layer, or `None` if the
/// layer was already stable at `start`.
pub fn bulk_mix<E: SeawaterEos>(
    column: &mut ColumnState,
    grid: &DepthGrid,
    g: f64,
    rb: f64,
    start: DepthIndex,
    eos: &E,
) -> Option<DepthIndex> {
    let mut deepest = None;

    for j in DepthIndex::range_iter(start, DepthIndex::new(column.len())) {
        let rv = bulk_richardson(column, grid, j, g);
        if rv > rb {
            break;
        }
        mix(column, j, eos);
        deepest = Some(j);
    }

    if let Some(j) = deepest {
        trace!("bulk mixing deepened mixed layer to {j}");
    }
    deepest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::EquationOfState;

    const G: f64 = 9.81;

    /// Mixed layer of `ml` levels moving at `u0` over a weakly stratified
    /// interior at rest.
    fn sheared_column(eos: &EquationOfState, n: usize, ml: usize, u0: f64) -> ColumnState {
        let temperature = (0..n)
            .map(|i| if i < ml { 10.0 } else { 10.0 - 0.1 * (i - ml + 1) as f64 })
            .collect();
        let u = (0..n).map(|i| if i < ml { u0 } else { 0.0 }).collect();
        ColumnState::new(temperature, vec![34.0; n], u, vec![0.0; n], eos).unwrap()
    }

    #[test]
    fn test_no_shear_is_infinitely_stable() {
        let eos = EquationOfState::new();
        let grid = DepthGrid::new(10, 1.0).unwrap();
        let column = sheared_column(&eos, 10, 3, 0.0);

        let rv = bulk_richardson(&column, &grid, DepthIndex::new(3), G);
        assert!(rv.is_infinite() && rv > 0.0);
    }

    #[test]
    fn test_strong_shear_deepens_layer() {
        let eos = EquationOfState::new();
        let grid = DepthGrid::new(20, 1.0).unwrap();
        let mut column = sheared_column(&eos, 20, 3, 0.5);

        let deepest = bulk_mix(&mut column, &grid, G, 0.65, DepthIndex::new(3), &eos);

        let j = deepest.expect("strong shear should entrain");
        assert_eq!(j, DepthIndex::new(11));
        // Everything down to j is homogeneous
        assert!(column.u[..=j.get()].iter().all(|&u| u == column.u[0]));
        // and momentum was shared with the entrained water
        assert!(column.u[0] < 0.5);
        // Final interface is supercritical
        if j.get() + 1 < column.len() {
            assert!(bulk_richardson(&column, &grid, j.next(), G) > 0.65);
        }
    }

    #[test]
    fn test_empty_column_is_not_mixed() {
        let eos = EquationOfState::new();
        let grid = DepthGrid::new(4, 1.0).unwrap();
        let mut column = ColumnState::uniform(0, 5.0, 34.0, &eos);

        let deepest = bulk_mix(&mut column, &grid, G, 0.65, DepthIndex::new(1), &eos);

        assert!(deepest.is_none());
        assert!(column.is_empty());
    }

    #[test]
    fn test_weak_shear_leaves_layer() {
        let eos = EquationOfState::new();
        let grid = DepthGrid::new(20, 1.0).unwrap();
        let mut column = sheared_column(&eos, 20, 3, 1e-4);
        let before = column.clone();

        let deepest = bulk_mix(&mut column, &grid, G, 0.65, DepthIndex::new(3), &eos);

        assert!(deepest.is_none());
        assert_eq!(column, before);
    }
}

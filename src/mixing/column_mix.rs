//! Full homogenization of the upper column.

use crate::column::ColumnState;
use crate::equations::SeawaterEos;
use crate::types::DepthIndex;

#[inline]
fn homogenize(values: &mut [f64]) {
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.fill(mean);
}

/// Mix temperature, salinity and velocity over levels `0..=j` to their
/// arithmetic mean, then recompute density over the same levels.
///
/// `j` past the bottom mixes the whole column.
///
/// # Example
/// ```
/// use pwp_rs::column::ColumnState;
/// use pwp_rs::equations::EquationOfState;
/// use pwp_rs::mixing::mix;
/// use pwp_rs::types::DepthIndex;
///
/// let eos = EquationOfState::new();
/// let mut column =
///     ColumnState::at_rest(vec![10.0, 6.0, 2.0], vec![34.0, 34.0, 34.0], &eos).unwrap();
///
/// mix(&mut column, DepthIndex::new(1), &eos);
/// assert_eq!(column.temperature, vec![8.0, 8.0, 2.0]);
/// ```
pub fn mix<E: SeawaterEos>(column: &mut ColumnState, j: DepthIndex, eos: &E) {
    let end = (j.get() + 1).min(column.len());
    if end == 0 {
        return;
    }

    homogenize(&mut column.temperature[..end]);
    homogenize(&mut column.salinity[..end]);
    homogenize(&mut column.u[..end]);
    homogenize(&mut column.v[..end]);
    column.update_density_range(eos, 0..end);
}

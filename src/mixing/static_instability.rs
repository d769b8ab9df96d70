//! Convective adjustment.
//!
//! Denser water over lighter water overturns. The model relieves each
//! inversion by mixing from the surface down through the lower cell of the
//! shallowest inverted pair, and repeats until density is non-decreasing
//! with depth.
//!
//! After a mix over `0..=j` every level in that range holds identical
//! properties, so the next inversion (if any) must lie strictly deeper. A
//! column of `n` levels therefore needs at most `n - 1` mixes; an inversion
//! that does not move down signals floating-point trouble in the equation
//! of state and is reported instead of looping.

use log::trace;

use super::column_mix::mix;
use crate::column::ColumnState;
use crate::equations::SeawaterEos;
use crate::error::PwpError;
use crate::types::DepthIndex;

/// Remove all density inversions from the column.
///
/// Returns the number of mixing passes performed (0 if the column was
/// already stable).
///
/// # Errors
/// [`PwpError::StaticInstabilityNotConverged`] when `max_iterations` mixes
/// do not suffice, or when a mix fails to push the inversion deeper.
pub fn remove_static_instability<E: SeawaterEos>(
    column: &mut ColumnState,
    eos: &E,
    max_iterations: usize,
) -> Result<usize, PwpError> {
    let mut mixes = 0;
    let mut mixed_to: Option<DepthIndex> = None;

    while let Some(j) = column.first_inversion() {
        let stalled = mixed_to.is_some_and(|prev| j <= prev);
        if stalled || mixes >= max_iterations {
            return Err(PwpError::StaticInstabilityNotConverged {
                iterations: mixes,
                index: j,
            });
        }

        mix(column, j, eos);
        mixed_to = Some(j);
        mixes += 1;
    }

    if mixes > 0 {
        trace!("convective adjustment: {mixes} mixes, mixed to {:?}", mixed_to);
    }
    Ok(mixes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::EquationOfState;

    #[test]
    fn test_stable_column_untouched() {
        let eos = EquationOfState::new();
        let mut column =
            ColumnState::at_rest(vec![10.0, 8.0, 6.0, 4.0], vec![34.0; 4], &eos).unwrap();
        let before = column.clone();

        let mixes = remove_static_instability(&mut column, &eos, 10).unwrap();

        assert_eq!(mixes, 0);
        assert_eq!(column, before);
    }

    #[test]
    fn test_surface_cooling_convects() {
        let eos = EquationOfState::new();
        // Cold, dense surface water over a warmer column
        let mut column = ColumnState::at_rest(
            vec![0.0, 6.0, 5.8, 5.6, 5.4, 2.0, 1.5],
            vec![34.0; 7],
            &eos,
        )
        .unwrap();

        let bound = column.len();
        let mixes = remove_static_instability(&mut column, &eos, bound).unwrap();

        assert!(mixes >= 1);
        assert!(column.is_statically_stable());
        assert!(column.density.windows(2).all(|w| w[1] >= w[0]));
        // Deep, already-stable water is not disturbed
        assert_eq!(column.temperature[6], 1.5);
    }

    #[test]
    fn test_interior_inversion() {
        let eos = EquationOfState::new();
        let mut column = ColumnState::at_rest(
            vec![8.0, 7.0, 9.0, 4.0, 3.0],
            vec![34.0; 5],
            &eos,
        )
        .unwrap();

        remove_static_instability(&mut column, &eos, 5).unwrap();

        assert!(column.is_statically_stable());
        assert_eq!(column.temperature[0], column.temperature[2]);
        assert_eq!(column.temperature[3], 4.0);
    }

    #[test]
    fn test_iteration_bound_reported() {
        let eos = EquationOfState::new();
        let mut column = ColumnState::at_rest(
            vec![0.0, 6.0, 5.9, 5.8, 5.7],
            vec![34.0; 5],
            &eos,
        )
        .unwrap();

        let result = remove_static_instability(&mut column, &eos, 0);

        assert!(matches!(
            result,
            Err(PwpError::StaticInstabilityNotConverged { iterations: 0, .. })
        ));
    }
}

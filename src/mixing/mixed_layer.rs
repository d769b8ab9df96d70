//! Mixed-layer depth detection.

use crate::column::ColumnState;
use crate::error::PwpError;
use crate::types::DepthIndex;
use crate::vertical::DepthGrid;

/// Base of the surface mixed layer.
///
/// `index` is the shallowest level whose density exceeds the surface
/// density by more than the detection threshold; every level above it
/// belongs to the mixed layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MixedLayer {
    /// First level below the mixed layer
    pub index: DepthIndex,
    /// Mixed-layer depth `z[index]` (m)
    pub depth: f64,
}

/// Find the mixed layer base: the shallowest level `i` with
/// `density[i] - density[0] > threshold`.
///
/// # Errors
/// [`PwpError::MixedLayerUndefined`] if no level satisfies the criterion,
/// which means the threshold (or the forcing) is inconsistent with the
/// column. An empty column has no mixed layer either.
///
/// # Example
/// ```
/// use pwp_rs::column::ColumnState;
/// use pwp_rs::equations::EquationOfState;
/// use pwp_rs::mixing::mixed_layer_depth;
/// use pwp_rs::vertical::DepthGrid;
///
/// let eos = EquationOfState::new();
/// let grid = DepthGrid::new(4, 5.0).unwrap();
/// let column =
///     ColumnState::at_rest(vec![10.0, 10.0, 6.0, 4.0], vec![34.0; 4], &eos).unwrap();
///
/// let layer = mixed_layer_depth(&column, &grid, 1e-4).unwrap();
/// assert_eq!(layer.index.get(), 2);
/// assert_eq!(layer.depth, 10.0);
/// ```
pub fn mixed_layer_depth(
    column: &ColumnState,
    grid: &DepthGrid,
    threshold: f64,
) -> Result<MixedLayer, PwpError> {
    let Some(&surface) = column.density.first() else {
        return Err(PwpError::MixedLayerUndefined { threshold });
    };

    column
        .density
        .iter()
        .enumerate()
        .skip(1)
        .find(|&(_, &d)| d - surface > threshold)
        .map(|(i, _)| {
            let index = DepthIndex::new(i);
            MixedLayer {
                index,
                depth: grid.depth(index),
            }
        })
        .ok_or(PwpError::MixedLayerUndefined { threshold })
}

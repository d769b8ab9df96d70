//! Uniform depth grid for the model column.
//!
//! Cell `i` spans `[i·dz, (i+1)·dz)` and is labelled by its top depth
//! `z[i] = i·dz`, so the surface cell has `z[0] = 0`.

use crate::error::PwpError;
use crate::types::DepthIndex;

/// Relative tolerance when checking user-supplied depths for uniform spacing.
const SPACING_TOL: f64 = 1e-6;

/// Uniformly spaced, monotonically increasing depth levels.
///
/// # Example
///
/// ```
/// use pwp_rs::vertical::DepthGrid;
/// use pwp_rs::types::DepthIndex;
///
/// let grid = DepthGrid::from_max_depth(100.0, 1.0).unwrap();
/// assert_eq!(grid.len(), 101);
/// assert_eq!(grid.depth(DepthIndex::new(10)), 10.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DepthGrid {
    z: Vec<f64>,
    dz: f64,
}

impl DepthGrid {
    /// Create a grid of `n_levels` cells of thickness `dz` starting at the surface.
    pub fn new(n_levels: usize, dz: f64) -> Result<Self, PwpError> {
        if !(dz.is_finite() && dz > 0.0) {
            return Err(PwpError::invalid_config(format!(
                "grid spacing dz must be positive, got {dz}"
            )));
        }
        if n_levels < 2 {
            return Err(PwpError::invalid_config(format!(
                "depth grid needs at least 2 levels, got {n_levels}"
            )));
        }

        let z = (0..n_levels).map(|i| i as f64 * dz).collect();
        Ok(Self { z, dz })
    }

    /// Create a grid covering `[0, max_depth]` inclusive.
    pub fn from_max_depth(max_depth: f64, dz: f64) -> Result<Self, PwpError> {
        if !(max_depth.is_finite() && max_depth > 0.0) {
            return Err(PwpError::invalid_config(format!(
                "max_depth must be positive, got {max_depth}"
            )));
        }
        if !(dz.is_finite() && dz > 0.0) {
            return Err(PwpError::invalid_config(format!(
                "grid spacing dz must be positive, got {dz}"
            )));
        }
        let n_levels = (max_depth / dz).round() as usize + 1;
        Self::new(n_levels, dz)
    }

    /// Adopt an explicit list of depths, which must start at the surface and
    /// be uniformly spaced.
    pub fn from_depths(z: Vec<f64>) -> Result<Self, PwpError> {
        if z.len() < 2 {
            return Err(PwpError::invalid_config(format!(
                "depth grid needs at least 2 levels, got {}",
                z.len()
            )));
        }
        if z[0].abs() > SPACING_TOL {
            return Err(PwpError::invalid_config(format!(
                "depth grid must start at the surface (z[0] = {})",
                z[0]
            )));
        }

        let dz = z[1] - z[0];
        if !(dz.is_finite() && dz > 0.0) {
            return Err(PwpError::invalid_config(
                "depths must be strictly increasing",
            ));
        }
        for (i, pair) in z.windows(2).enumerate() {
            let step = pair[1] - pair[0];
            if (step - dz).abs() > SPACING_TOL * dz {
                return Err(PwpError::invalid_config(format!(
                    "depth grid is not uniform at level {}: spacing {step} vs {dz}",
                    i + 1
                )));
            }
        }

        Ok(Self { z, dz })
    }

    /// Number of levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.z.len()
    }

    /// Always false: a grid has at least two levels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// Cell thickness (m).
    #[inline]
    pub fn dz(&self) -> f64 {
        self.dz
    }

    /// Depth of level `idx` (m).
    #[inline]
    pub fn depth(&self, idx: DepthIndex) -> f64 {
        self.z[idx]
    }

    /// All depths.
    pub fn depths(&self) -> &[f64] {
        &self.z
    }

    /// Deepest level.
    pub fn bottom(&self) -> DepthIndex {
        DepthIndex::new(self.z.len() - 1)
    }

    /// Iterate over every level index.
    pub fn levels(&self) -> impl Iterator<Item = DepthIndex> + ExactSizeIterator {
        DepthIndex::iter(self.z.len())
    }
}

//! Vertical mixing kernels.
//!
//! Applied by the driver in a fixed order each time step:
//!
//! 1. **Static instability**: convective overturning of density inversions
//! 2. **Mixed layer**: detection of the mixed-layer base
//! 3. **Bulk Richardson**: wind-driven entrainment at the mixed-layer base
//! 4. **Gradient Richardson**: partial mixing of shear-unstable level pairs
//! 5. **Diffusion**: background diapycnal smoothing
//!
//! Every kernel mutates a [`ColumnState`](crate::column::ColumnState) in
//! place and leaves its density consistent with temperature and salinity.
//!
//! # Example
//!
//! ```
//! use pwp_rs::column::ColumnState;
//! use pwp_rs::equations::EquationOfState;
//! use pwp_rs::mixing::{mixed_layer_depth, remove_static_instability};
//! use pwp_rs::vertical::DepthGrid;
//!
//! let eos = EquationOfState::new();
//! let grid = DepthGrid::new(5, 1.0).unwrap();
//! let mut column =
//!     ColumnState::at_rest(vec![1.0, 6.0, 5.0, 3.0, 2.0], vec![34.0; 5], &eos).unwrap();
//!
//! let bound = column.len();
//! remove_static_instability(&mut column, &eos, bound).unwrap();
//! assert!(column.is_statically_stable());
//!
//! let layer = mixed_layer_depth(&column, &grid, 1e-4).unwrap();
//! assert!(layer.index.get() >= 1);
//! ```

mod bulk_richardson;
mod column_mix;
mod diffusion;
mod gradient_richardson;
mod mixed_layer;
mod static_instability;

pub use bulk_richardson::{BULK_MIXING_THRESHOLD, bulk_mix, bulk_richardson};
pub use column_mix::mix;
pub use diffusion::{diffuse, diffuse_column};
pub use gradient_richardson::{SHEAR_EPSILON, gradient_mix, gradient_richardson, stir};
pub use mixed_layer::{MixedLayer, mixed_layer_depth};
pub use static_instability::remove_static_instability;

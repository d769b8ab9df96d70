//! Seawater thermodynamics.
//!
//! The model treats the equation of state as an external collaborator:
//! kernels call [`SeawaterEos::density`] after every temperature or salinity
//! change and [`SeawaterEos::freezing_point`] when clamping the surface
//! layer, without knowing how either is computed.

mod equation_of_state;

pub use equation_of_state::{EquationOfState, SeawaterEos};

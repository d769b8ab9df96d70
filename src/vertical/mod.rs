//! Vertical discretization of the model column.
//!
//! The mixed-layer model uses fixed, uniformly spaced z-levels measured
//! positive downward from the sea surface.

mod grid;

pub use grid::DepthGrid;

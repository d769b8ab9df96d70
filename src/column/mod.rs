//! Model column state.
//!
//! A [`ColumnState`] holds one time step of the water column. Kernels take
//! it by exclusive reference, mutate it in place, and never keep a reference
//! past the call; the driver copies the result into the output time series.

mod state;

pub use state::ColumnState;

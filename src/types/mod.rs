//! Strongly-typed domain types for safer APIs.
//!
//! Depth and time indices are newtypes so the two axes of the model output
//! cannot be mixed up in index arithmetic.
//!
//! # Example
//!
//! ```
//! use pwp_rs::types::{DepthIndex, TimeIndex};
//!
//! let surface = DepthIndex::ZERO;
//! let first_step = TimeIndex::new(1);
//! assert_eq!(surface.get(), 0);
//! assert_eq!(first_step.prev(), TimeIndex::ZERO);
//! ```

mod indices;

pub use indices::{DepthIndex, TimeIndex};

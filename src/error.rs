//! Error types for the PWP model.

use thiserror::Error;

use crate::io::InputFileError;
#[cfg(feature = "netcdf")]
use crate::io::NetCDFError;
use crate::types::{DepthIndex, TimeIndex};

/// Errors that can occur while preparing or running the model.
///
/// Every variant is fatal: the driver stops at the current time step and
/// leaves the output written so far in place.
#[derive(Error, Debug)]
pub enum PwpError {
    /// Malformed parameter set.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Array lengths disagree between forcing, grid and profile.
    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// No level is denser than the surface by more than the threshold.
    #[error("Mixed layer depth is undefined: no level exceeds surface density by {threshold} kg/m3")]
    MixedLayerUndefined { threshold: f64 },

    /// Convective adjustment did not remove all density inversions.
    #[error("Static instability removal did not converge after {iterations} mixes (inversion at {index})")]
    StaticInstabilityNotConverged { iterations: usize, index: DepthIndex },

    /// Gradient Richardson relaxation hit its iteration bound.
    #[error("Gradient Richardson mixing did not converge after {iterations} iterations (r_min = {r_min})")]
    GradientMixingNotConverged { iterations: usize, r_min: f64 },

    /// A NaN or infinite value appeared in the column.
    #[error("Non-finite {field} at {index}")]
    NonFinite {
        field: &'static str,
        index: DepthIndex,
    },

    /// A time step failed; output up to the previous step is intact.
    #[error("Time step {step} failed: {source}")]
    StepFailed {
        step: TimeIndex,
        #[source]
        source: Box<PwpError>,
    },

    /// Forcing or profile file could not be read.
    #[error(transparent)]
    Input(#[from] InputFileError),

    /// NetCDF output failed.
    #[cfg(feature = "netcdf")]
    #[error(transparent)]
    NetCDF(#[from] NetCDFError),
}

impl PwpError {
    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }

    /// The error at the root of a [`PwpError::StepFailed`] chain.
    pub fn root_cause(&self) -> &PwpError {
        match self {
            Self::StepFailed { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_cause_unwraps_step_failure() {
        let err = PwpError::StepFailed {
            step: TimeIndex::new(3),
            source: Box::new(PwpError::MixedLayerUndefined { threshold: 1e-4 }),
        };
        assert!(matches!(
            err.root_cause(),
            PwpError::MixedLayerUndefined { .. }
        ));
        assert!(err.to_string().contains("t3"));
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = PwpError::dimension_mismatch("absorption profile", 10, 9);
        assert_eq!(
            err.to_string(),
            "Dimension mismatch for absorption profile: expected 10, got 9"
        );
    }
}

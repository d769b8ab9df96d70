//! Reader for initial temperature/salinity profiles.
//!
//! # File Format
//!
//! ```text
//! # CTD cast, 2 Aug
//! # columns: depth(m) temperature(degC) salinity(psu)
//! 0.0   -1.2  28.1
//! 10.0  -1.4  28.9
//! 25.0  -1.5  30.6
//! ```
//!
//! Depth is positive downward and must increase strictly.

use std::path::Path;

use super::text::{InputFileError, interpolate_clamped, parse_rows, read_to_string};

const COLUMNS: [&str; 3] = ["depth", "temperature", "salinity"];

/// Observed temperature and salinity profile.
#[derive(Clone, Debug, PartialEq)]
pub struct InitialProfile {
    /// Observation depths (m)
    pub depth: Vec<f64>,
    /// Temperature (°C)
    pub temperature: Vec<f64>,
    /// Salinity (PSU)
    pub salinity: Vec<f64>,
}

impl InitialProfile {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.depth.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.depth.is_empty()
    }

    /// Temperature and salinity at `depth`, linearly interpolated and held
    /// constant above the first and below the last observation.
    pub fn interpolate(&self, depth: f64) -> (f64, f64) {
        (
            interpolate_clamped(&self.depth, &self.temperature, depth),
            interpolate_clamped(&self.depth, &self.salinity, depth),
        )
    }
}

/// Parse a profile from a string.
pub fn parse_profile(content: &str) -> Result<InitialProfile, InputFileError> {
    let rows = parse_rows(content, COLUMNS)?;
    Ok(InitialProfile {
        depth: rows.iter().map(|r| r[0]).collect(),
        temperature: rows.iter().map(|r| r[1]).collect(),
        salinity: rows.iter().map(|r| r[2]).collect(),
    })
}

/// Read a profile file.
pub fn read_profile_file(path: impl AsRef<Path>) -> Result<InitialProfile, InputFileError> {
    parse_profile(&read_to_string(path.as_ref())?)
}

//! Reader for surface forcing files.
//!
//! # File Format
//!
//! ```text
//! # Surface forcing, Beaufort Sea
//! # columns: time(days) q_in(W/m2) q_out(W/m2) emp(m/s) tx(N/m2) ty(N/m2)
//! 0.000 0.0   210.3 1.2e-8  0.031 -0.012
//! 0.125 12.4  205.1 1.1e-8  0.045 -0.020
//! ```
//!
//! Time values must be strictly increasing. Fluxes are sampled at the given
//! times and linearly interpolated in between.

use std::path::Path;

use super::text::{InputFileError, interpolate_clamped, parse_rows, read_to_string};
use crate::source::FluxSample;

const COLUMNS: [&str; 6] = ["time", "q_in", "q_out", "emp", "tx", "ty"];

/// Surface forcing as read from file, on its own time axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ForcingSeries {
    /// Sample times (days)
    pub time: Vec<f64>,
    /// Incoming shortwave (W/m²)
    pub q_in: Vec<f64>,
    /// Outgoing heat flux (W/m²)
    pub q_out: Vec<f64>,
    /// Evaporation minus precipitation (m/s)
    pub emp: Vec<f64>,
    /// Eastward wind stress (N/m²)
    pub tx: Vec<f64>,
    /// Northward wind stress (N/m²)
    pub ty: Vec<f64>,
}

impl ForcingSeries {
    fn from_rows(rows: Vec<[f64; 6]>) -> Self {
        let column = |c: usize| -> Vec<f64> { rows.iter().map(|row| row[c]).collect() };
        Self {
            time: column(0),
            q_in: column(1),
            q_out: column(2),
            emp: column(3),
            tx: column(4),
            ty: column(5),
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// First and last sample time (days), or `(0, 0)` if empty.
    pub fn time_range(&self) -> (f64, f64) {
        match (self.time.first(), self.time.last()) {
            (Some(&t0), Some(&t1)) => (t0, t1),
            _ => (0.0, 0.0),
        }
    }

    /// Fluxes at time `t` (days), linearly interpolated and clamped to the
    /// first and last samples.
    pub fn interpolate(&self, t: f64) -> FluxSample {
        if self.is_empty() {
            return FluxSample::default();
        }
        FluxSample {
            q_in: interpolate_clamped(&self.time, &self.q_in, t),
            q_out: interpolate_clamped(&self.time, &self.q_out, t),
            emp: interpolate_clamped(&self.time, &self.emp, t),
            tx: interpolate_clamped(&self.time, &self.tx, t),
            ty: interpolate_clamped(&self.time, &self.ty, t),
        }
    }
}

/// Parse surface forcing from a string.
pub fn parse_forcing(content: &str) -> Result<ForcingSeries, InputFileError> {
    parse_rows(content, COLUMNS).map(ForcingSeries::from_rows)
}

/// Read a surface forcing file.
///
/// # Example
///
/// ```ignore
/// use pwp_rs::io::read_forcing_file;
///
/// let forcing = read_forcing_file("beaufort_forcing.txt")?;
/// let (t0, t1) = forcing.time_range();
/// println!("Forcing from day {t0} to day {t1}");
/// ```
pub fn read_forcing_file(path: impl AsRef<Path>) -> Result<ForcingSeries, InputFileError> {
    parse_forcing(&read_to_string(path.as_ref())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
# columns: time(days) q_in q_out emp tx ty
0.0  0.0   200.0 1e-8 0.10 0.00
0.5  400.0 200.0 1e-8 0.00 0.20
";

    #[test]
    fn test_parse_forcing() {
        let forcing = parse_forcing(SAMPLE).unwrap();

        assert_eq!(forcing.len(), 2);
        assert_eq!(forcing.time_range(), (0.0, 0.5));
        assert_eq!(forcing.q_out, vec![200.0, 200.0]);
        assert_eq!(forcing.emp[1], 1e-8);
    }

    #[test]
    fn test_interpolate() {
        let forcing = parse_forcing(SAMPLE).unwrap();

        let mid = forcing.interpolate(0.25);
        assert!((mid.q_in - 200.0).abs() < 1e-12);
        assert!((mid.tx - 0.05).abs() < 1e-12);
        assert!((mid.ty - 0.10).abs() < 1e-12);

        assert_eq!(forcing.interpolate(-1.0).q_in, 0.0);
        assert_eq!(forcing.interpolate(3.0).q_in, 400.0);
    }

    #[test]
    fn test_missing_column() {
        let result = parse_forcing("0.0 1.0 2.0 3.0 4.0\n");
        assert!(matches!(result, Err(InputFileError::ParseError { line: 1, .. })));
    }

    #[test]
    fn test_non_monotonic_time() {
        let result = parse_forcing("0.5 0 0 0 0 0\n0.25 0 0 0 0 0\n");
        assert!(matches!(
            result,
            Err(InputFileError::NonMonotonic { line: 2, column: "time" })
        ));
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();

        let forcing = read_forcing_file(file.path()).unwrap();
        assert_eq!(forcing, parse_forcing(SAMPLE).unwrap());
    }

    #[test]
    fn test_missing_file() {
        let result = read_forcing_file("/nonexistent/forcing.txt");
        assert!(matches!(result, Err(InputFileError::Io { .. })));
    }
}

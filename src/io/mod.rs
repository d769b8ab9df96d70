//! Input files and output serialization.
//!
//! This module provides:
//! - **Forcing files**: surface heat, freshwater and wind stress time series
//! - **Profile files**: observed temperature and salinity at depth
//! - **Run preparation**: interpolation of both onto the model grids
//! - **NetCDF output**: CF-style profile output (requires `netcdf` feature)
//!
//! # File Formats
//!
//! ## Forcing Files
//!
//! ```text
//! # columns: time(days) q_in(W/m2) q_out(W/m2) emp(m/s) tx(N/m2) ty(N/m2)
//! 0.000 0.0  210.3 1.2e-8 0.031 -0.012
//! 0.125 12.4 205.1 1.1e-8 0.045 -0.020
//! ```
//!
//! ## Profile Files
//!
//! ```text
//! # columns: depth(m) temperature(degC) salinity(psu)
//! 0.0  -1.2 28.1
//! 10.0 -1.4 28.9
//! ```
//!
//! # Example
//!
//! ```
//! use pwp_rs::equations::EquationOfState;
//! use pwp_rs::io::{parse_forcing, parse_profile, prepare_run};
//! use pwp_rs::simulation::PwpParams;
//!
//! let forcing = parse_forcing("0.0 0 150 0 0.05 0\n2.0 300 150 0 0.05 0\n").unwrap();
//! let profile = parse_profile("0 4.0 33.0\n50 1.0 34.0\n").unwrap();
//! let params = PwpParams::default().with_max_depth(50.0);
//!
//! let inputs = prepare_run(&forcing, &profile, &params, &EquationOfState::new()).unwrap();
//! assert_eq!(inputs.time.len(), 17);
//! assert_eq!(inputs.grid.len(), 51);
//! ```

mod forcing_reader;
#[cfg(feature = "netcdf")]
mod netcdf_io;
mod prepare;
mod profile_reader;
mod text;

pub use forcing_reader::{ForcingSeries, parse_forcing, read_forcing_file};
#[cfg(feature = "netcdf")]
pub use netcdf_io::{FILL_VALUE_F64, NetCDFError, NetCDFWriterConfig, write_netcdf};
pub use prepare::{SECONDS_PER_DAY, model_time_axis, prepare_run};
pub use profile_reader::{InitialProfile, parse_profile, read_profile_file};
pub use text::{InputFileError, interpolate_clamped};

//! Simulation driver.
//!
//! Ties together the surface forcing and mixing kernels into the PWP time
//! stepping loop:
//! - [`PwpParams`]: run parameters with derived quantities
//! - [`Simulation`]: owns the output and advances the column step by step
//! - [`PwpOutput`]: profile time series and mixed-layer depth
//! - [`StepDiagnostics`]: per-step summary used for logging
//!
//! # Example
//! ```ignore
//! use pwp_rs::io::{prepare_run, read_forcing_file, read_profile_file};
//! use pwp_rs::simulation::{PwpParams, Simulation};
//!
//! let params = PwpParams::default().with_latitude(74.0);
//! let forcing = read_forcing_file("forcing.txt")?;
//! let profile = read_profile_file("profile.txt")?;
//! let inputs = prepare_run(&forcing, &profile, &params, &EquationOfState::new())?;
//!
//! let mut sim = Simulation::new(params, inputs)?;
//! sim.run_with_callback(|out, n| println!("t = {:.2} d, mld = {:.1} m", out.time[n], out.mld[n]))?;
//! ```

mod diagnostics;
mod output;
mod params;
mod runner;

pub use diagnostics::StepDiagnostics;
pub use output::{ProfileSeries, PwpOutput};
pub use params::{MAX_STABLE_DSTAB, PwpParams};
pub use runner::{RunInputs, RunSummary, Simulation, StepOutcome};

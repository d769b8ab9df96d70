//! # pwp-rs
//!
//! The Price-Weller-Pinkel (PWP) one-dimensional ocean mixed-layer model.
//!
//! Given surface forcing (shortwave and outgoing heat flux, evaporation
//! minus precipitation, wind stress) and an initial temperature/salinity
//! profile, the model steps a single water column forward in time:
//! - Surface heat and freshwater fluxes with penetrating shortwave
//! - Convective removal of static instability
//! - Wind-driven slab momentum with Coriolis rotation and linear drag
//! - Bulk Richardson entrainment at the mixed-layer base
//! - Gradient Richardson relaxation of shear instability
//! - Background diapycnal diffusion
//!
//! # Example
//!
//! ```
//! use pwp_rs::{
//!     ColumnState, DepthGrid, EquationOfState, FluxSample, PwpParams, RunInputs, Simulation,
//!     SurfaceForcing, absorb,
//! };
//!
//! let eos = EquationOfState::new();
//! let params = PwpParams::default().with_max_depth(50.0);
//! let grid = DepthGrid::from_max_depth(params.max_depth, params.dz).unwrap();
//!
//! let temperature = grid.depths().iter().map(|z| 6.0 - 0.05 * z).collect();
//! let initial = ColumnState::at_rest(temperature, vec![34.0; grid.len()], &eos).unwrap();
//!
//! let absrb = absorb(params.beta_red, params.beta_blue, grid.len(), params.dz);
//! let flux = FluxSample { q_in: 0.0, q_out: 250.0, tx: 0.1, ..Default::default() };
//! let forcing = SurfaceForcing::constant(9, flux, absrb).unwrap();
//! let time = (0..9).map(|n| n as f64 * params.dt / 86400.0).collect();
//!
//! let mut sim = Simulation::new(params, RunInputs { grid, forcing, time, initial }).unwrap();
//! sim.run().unwrap();
//!
//! let out = sim.output();
//! assert!(out.mld[8] >= out.mld[1]);
//! ```

pub mod column;
pub mod equations;
pub mod error;
pub mod io;
pub mod mixing;
pub mod simulation;
pub mod source;
pub mod types;
pub mod vertical;

// Re-export main types for convenience
pub use column::ColumnState;
pub use equations::{EquationOfState, SeawaterEos};
pub use error::PwpError;
pub use io::{
    ForcingSeries, InitialProfile, InputFileError, parse_forcing, parse_profile, prepare_run,
    read_forcing_file, read_profile_file,
};
#[cfg(feature = "netcdf")]
pub use io::{NetCDFError, NetCDFWriterConfig, write_netcdf};
pub use mixing::{
    MixedLayer, bulk_mix, diffuse, gradient_mix, mix, mixed_layer_depth,
    remove_static_instability, stir,
};
pub use simulation::{
    PwpOutput, PwpParams, RunInputs, RunSummary, Simulation, StepDiagnostics, StepOutcome,
};
pub use source::{FluxSample, SurfaceForcing, absorb, coriolis_parameter, rotate};
pub use types::{DepthIndex, TimeIndex};
pub use vertical::DepthGrid;

//! Surface forcing of the model column.
//!
//! - **Absorption**: depth profile of shortwave heating
//! - **Surface fluxes**: heat and freshwater exchange, freezing-point clamp
//! - **Coriolis**: inertial rotation of the current
//! - **Wind stress**: slab momentum input and linear drag
//!
//! # Example
//!
//! ```
//! use pwp_rs::column::ColumnState;
//! use pwp_rs::equations::EquationOfState;
//! use pwp_rs::source::{FluxSample, absorb, apply_surface_fluxes};
//!
//! let eos = EquationOfState::new();
//! let mut column = ColumnState::uniform(20, 8.0, 34.0, &eos);
//! let absrb = absorb(0.6, 20.0, 20, 1.0);
//!
//! let flux = FluxSample { q_in: 250.0, q_out: 80.0, ..Default::default() };
//! apply_surface_fluxes(&mut column, &flux, &absrb, 3600.0, 1.0, 4183.3, &eos).unwrap();
//! assert!(column.temperature[0] > 8.0);
//! ```

mod absorption;
mod coriolis;
mod surface_flux;
mod wind_stress;

pub use absorption::{RED_FRACTION, absorb};
pub use coriolis::{OMEGA, coriolis_parameter, rotate, rotate_column};
pub use surface_flux::{FREEZING_PRESSURE, FluxSample, SurfaceForcing, apply_surface_fluxes};
pub use wind_stress::{
    DRAG_THRESHOLD, apply_drag, apply_momentum_forcing, apply_wind_stress, drag_active,
};

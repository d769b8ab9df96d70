//! Interpolation of file inputs onto the model grids.

use log::info;

use super::forcing_reader::ForcingSeries;
use super::profile_reader::InitialProfile;
use crate::column::ColumnState;
use crate::equations::SeawaterEos;
use crate::error::PwpError;
use crate::simulation::{PwpParams, RunInputs};
use crate::source::{SurfaceForcing, absorb};
use crate::vertical::DepthGrid;

/// Seconds per day; forcing times are in days, `dt` in seconds.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Model time axis (days) covering the forcing at spacing `dt` (s).
///
/// `time[n] = t0 + n·dt` for every `n` with `time[n] ≤ t_last`.
///
/// # Errors
/// `InvalidConfig` if the forcing spans less than one time step.
pub fn model_time_axis(forcing: &ForcingSeries, dt: f64) -> Result<Vec<f64>, PwpError> {
    let (t0, t1) = forcing.time_range();
    let dt_days = dt / SECONDS_PER_DAY;
    // Tolerate round-off in a span that is an exact multiple of dt
    let steps = ((t1 - t0) / dt_days + 1e-9).floor();

    if forcing.len() < 2 || steps < 1.0 {
        return Err(PwpError::invalid_config(format!(
            "forcing spans {:.4} days, less than one time step of {dt} s",
            t1 - t0
        )));
    }

    let tlen = steps as usize + 1;
    Ok((0..tlen).map(|n| t0 + n as f64 * dt_days).collect())
}

/// Build the run inputs from a forcing series and an observed profile.
///
/// - depth grid `0, dz, ..., max_depth`
/// - forcing interpolated onto the model time axis ([`model_time_axis`])
/// - solar absorption profile from the extinction scales
/// - initial temperature and salinity interpolated onto the grid, held
///   constant beyond the observed range, with the column at rest
pub fn prepare_run<E: SeawaterEos>(
    forcing: &ForcingSeries,
    profile: &InitialProfile,
    params: &PwpParams,
    eos: &E,
) -> Result<RunInputs, PwpError> {
    params.validate()?;
    if profile.is_empty() {
        return Err(PwpError::invalid_config("initial profile is empty"));
    }

    let grid = DepthGrid::from_max_depth(params.max_depth, params.dz)?;
    let time = model_time_axis(forcing, params.dt)?;

    let samples: Vec<_> = time.iter().map(|&t| forcing.interpolate(t)).collect();
    let absrb = absorb(params.beta_red, params.beta_blue, grid.len(), params.dz);
    let surface_forcing = SurfaceForcing::new(
        samples.iter().map(|s| s.q_in).collect(),
        samples.iter().map(|s| s.q_out).collect(),
        samples.iter().map(|s| s.emp).collect(),
        samples.iter().map(|s| s.tx).collect(),
        samples.iter().map(|s| s.ty).collect(),
        absrb,
    )?;

    let (temperature, salinity): (Vec<f64>, Vec<f64>) =
        grid.depths().iter().map(|&z| profile.interpolate(z)).unzip();
    let initial = ColumnState::at_rest(temperature, salinity, eos)?;

    info!(
        "prepared run: {} levels to {} m, {} time steps from day {:.3}",
        grid.len(),
        grid.depth(grid.bottom()),
        time.len(),
        time[0]
    );

    Ok(RunInputs {
        grid,
        forcing: surface_forcing,
        time,
        initial,
    })
}

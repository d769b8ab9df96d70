//! Time-step driver.
//!
//! Each step advances the column from `n - 1` to `n` with the forcing of
//! step `n - 1`, in a fixed order:
//!
//! 1. surface heat and freshwater fluxes (with freezing clamp)
//! 2. convective removal of static instability
//! 3. mixed-layer detection
//! 4. Coriolis rotation, wind stress and drag
//! 5. bulk Richardson mixing (if `rb > 1e-5`)
//! 6. gradient Richardson mixing (if `rg > 0`)
//! 7. diffusion (if `rkz > 0`)
//!
//! and writes the result into the output at `n`.

use std::time::Instant;

use log::{debug, info};

use super::diagnostics::StepDiagnostics;
use super::output::PwpOutput;
use super::params::PwpParams;
use crate::column::ColumnState;
use crate::equations::{EquationOfState, SeawaterEos};
use crate::error::PwpError;
use crate::mixing::{
    BULK_MIXING_THRESHOLD, MixedLayer, bulk_mix, diffuse_column, gradient_mix, mixed_layer_depth,
    remove_static_instability,
};
use crate::source::{SurfaceForcing, apply_momentum_forcing, apply_surface_fluxes, drag_active};
use crate::types::TimeIndex;
use crate::vertical::DepthGrid;

// =============================================================================
// Run inputs
// =============================================================================

/// Everything a run needs besides the parameters: the grid, the forcing on
/// the model time axis, the time axis itself and the initial column.
#[derive(Clone, Debug)]
pub struct RunInputs {
    /// Depth grid
    pub grid: DepthGrid,
    /// Surface forcing, one sample per entry of `time`
    pub forcing: SurfaceForcing,
    /// Model time axis (days)
    pub time: Vec<f64>,
    /// Column at `time[0]`
    pub initial: ColumnState,
}

// =============================================================================
// Step and run results
// =============================================================================

/// Result of advancing the column by one step.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    /// Column at the end of the step
    pub column: ColumnState,
    /// Mixed layer detected after convective adjustment
    pub layer: MixedLayer,
    /// Convective mixes performed
    pub instability_mixes: usize,
    /// Gradient Richardson stirs performed
    pub stirs: usize,
}

/// Statistics of a completed run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    /// Time steps advanced by this call
    pub n_steps: usize,
    /// Total convective mixes
    pub instability_mixes: usize,
    /// Total gradient Richardson stirs
    pub stirs: usize,
    /// Deepest mixed layer seen (m)
    pub max_mld: f64,
    /// Diagnostics of the final column
    pub final_diagnostics: StepDiagnostics,
    /// Wall-clock time in seconds
    pub wall_time: f64,
}

// =============================================================================
// Simulation
// =============================================================================

/// PWP single-column simulation.
///
/// Owns the output time series. On failure the output up to the last
/// completed step stays available through [`Simulation::output`].
///
/// # Example
/// ```
/// use pwp_rs::column::ColumnState;
/// use pwp_rs::equations::EquationOfState;
/// use pwp_rs::simulation::{PwpParams, RunInputs, Simulation};
/// use pwp_rs::source::{FluxSample, SurfaceForcing, absorb};
/// use pwp_rs::vertical::DepthGrid;
///
/// let eos = EquationOfState::new();
/// let params = PwpParams::default().with_dt(3600.0).with_max_depth(20.0);
/// let grid = DepthGrid::from_max_depth(params.max_depth, params.dz).unwrap();
/// let temperature = grid.depths().iter().map(|z| 8.0 - 0.1 * z).collect();
/// let initial = ColumnState::at_rest(temperature, vec![34.0; grid.len()], &eos).unwrap();
///
/// let absrb = absorb(params.beta_red, params.beta_blue, grid.len(), params.dz);
/// let flux = FluxSample { q_in: 200.0, q_out: 150.0, tx: 0.05, ..Default::default() };
/// let forcing = SurfaceForcing::constant(5, flux, absrb).unwrap();
/// let time = (0..5).map(|n| n as f64 / 24.0).collect();
///
/// let mut sim = Simulation::new(params, RunInputs { grid, forcing, time, initial }).unwrap();
/// let summary = sim.run().unwrap();
/// assert_eq!(summary.n_steps, 4);
/// assert_eq!(sim.completed_steps(), 5);
/// ```
pub struct Simulation<E: SeawaterEos = EquationOfState> {
    params: PwpParams,
    eos: E,
    grid: DepthGrid,
    forcing: SurfaceForcing,
    output: PwpOutput,
    column: ColumnState,
    completed: usize,
    drag_notice_logged: bool,
}

impl Simulation<EquationOfState> {
    /// Create a simulation with the UNESCO equation of state.
    pub fn new(params: PwpParams, inputs: RunInputs) -> Result<Self, PwpError> {
        Self::with_eos(params, inputs, EquationOfState::new())
    }
}

impl<E: SeawaterEos> Simulation<E> {
    /// Create a simulation with a custom equation of state.
    ///
    /// Validates the parameters and the input dimensions, then stores the
    /// initial column at time step 0. Its mixed-layer depth is NaN if the
    /// initial profile has none.
    pub fn with_eos(params: PwpParams, inputs: RunInputs, eos: E) -> Result<Self, PwpError> {
        params.validate()?;

        let RunInputs {
            grid,
            forcing,
            time,
            mut initial,
        } = inputs;

        let n_levels = grid.len();
        if initial.len() != n_levels {
            return Err(PwpError::dimension_mismatch("initial column", n_levels, initial.len()));
        }
        if forcing.absorption().len() != n_levels {
            return Err(PwpError::dimension_mismatch(
                "absorption profile",
                n_levels,
                forcing.absorption().len(),
            ));
        }
        if forcing.len() != time.len() {
            return Err(PwpError::dimension_mismatch("forcing series", time.len(), forcing.len()));
        }
        if time.is_empty() {
            return Err(PwpError::invalid_config("time axis is empty"));
        }
        if (grid.dz() - params.dz).abs() > 1e-9 * params.dz {
            return Err(PwpError::invalid_config(format!(
                "grid spacing {} does not match dz = {}",
                grid.dz(),
                params.dz
            )));
        }
        if let Some((field, index)) = initial.first_non_finite() {
            return Err(PwpError::NonFinite { field, index });
        }

        // Density must come from this equation of state
        initial.update_density(&eos);

        let mld0 = mixed_layer_depth(&initial, &grid, params.mld_thresh)
            .map(|layer| layer.depth)
            .unwrap_or(f64::NAN);

        let mut output = PwpOutput::new(grid.depths().to_vec(), time);
        output.store(TimeIndex::ZERO, &initial, mld0)?;

        Ok(Self {
            params,
            eos,
            grid,
            forcing,
            output,
            column: initial,
            completed: 1,
            drag_notice_logged: false,
        })
    }

    /// Run parameters.
    pub fn params(&self) -> &PwpParams {
        &self.params
    }

    /// Depth grid.
    pub fn grid(&self) -> &DepthGrid {
        &self.grid
    }

    /// Output written so far.
    pub fn output(&self) -> &PwpOutput {
        &self.output
    }

    /// Consume the simulation, returning its output.
    pub fn into_output(self) -> PwpOutput {
        self.output
    }

    /// Number of time steps stored in the output, including the initial
    /// state.
    pub fn completed_steps(&self) -> usize {
        self.completed
    }

    /// Most recent column.
    pub fn current_column(&self) -> &ColumnState {
        &self.column
    }

    /// Advance `prev` by one step to time index `n`, using the forcing of
    /// step `n - 1`.
    ///
    /// The simulation itself is not modified.
    pub fn advance_column(&self, prev: &ColumnState, n: TimeIndex) -> Result<StepOutcome, PwpError> {
        let p = &self.params;
        let eos = &self.eos;
        let flux = self.forcing.sample(n.prev());
        let mut column = prev.clone();

        apply_surface_fluxes(
            &mut column,
            &flux,
            self.forcing.absorption(),
            p.dt,
            p.dz,
            p.cpw,
            eos,
        )?;

        let bound = p.instability_bound(column.len());
        let instability_mixes = remove_static_instability(&mut column, eos, bound)?;

        let layer = mixed_layer_depth(&column, &self.grid, p.mld_thresh)?;

        let drag = drag_active(p.drag_enabled, p.ucon).then_some(p.ucon);
        apply_momentum_forcing(&mut column, flux.tx, flux.ty, &layer, p.f, p.dt, drag);

        if p.rb > BULK_MIXING_THRESHOLD {
            bulk_mix(&mut column, &self.grid, p.g, p.rb, layer.index, eos);
        }

        let stirs = if p.rg > 0.0 {
            gradient_mix(&mut column, p.g, p.dz, p.rg, eos, p.max_gradient_iterations)?
        } else {
            0
        };

        if p.diffusion_enabled() {
            diffuse_column(&mut column, p.dstab, eos);
        }

        if let Some((field, index)) = column.first_non_finite() {
            return Err(PwpError::NonFinite { field, index });
        }

        Ok(StepOutcome {
            column,
            layer,
            instability_mixes,
            stirs,
        })
    }

    /// Run all remaining time steps.
    pub fn run(&mut self) -> Result<RunSummary, PwpError> {
        self.run_with_callback(|_, _| {})
    }

    /// Run all remaining time steps, calling `callback` with the output and
    /// the step index after each step is stored.
    ///
    /// # Errors
    /// The first failing step is reported as [`PwpError::StepFailed`];
    /// output before that step stays in place.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<RunSummary, PwpError>
    where
        F: FnMut(&PwpOutput, TimeIndex),
    {
        let start_wall = Instant::now();
        let n_times = self.output.n_times();
        let first = self.completed;

        info!(
            "PWP run: {} levels (dz = {} m), steps {}..{} (dt = {} s)",
            self.grid.len(),
            self.params.dz,
            first,
            n_times,
            self.params.dt
        );
        if first < n_times
            && !self.drag_notice_logged
            && !drag_active(self.params.drag_enabled, self.params.ucon)
        {
            info!("drag disabled for this run");
            self.drag_notice_logged = true;
        }

        let mut instability_mixes = 0;
        let mut stirs = 0;
        let mut max_mld = self
            .output
            .mld
            .iter()
            .take(first)
            .copied()
            .filter(|m| !m.is_nan())
            .fold(0.0, f64::max);
        let mut final_diagnostics = StepDiagnostics::compute(
            &self.column,
            &self.grid,
            self.params.cpw,
            self.output.mld[first - 1],
        );

        for n in TimeIndex::range_iter(TimeIndex::new(first), TimeIndex::new(n_times)) {
            let outcome = self
                .advance_column(&self.column, n)
                .map_err(|source| PwpError::StepFailed {
                    step: n,
                    source: Box::new(source),
                })?;

            self.output.store(n, &outcome.column, outcome.layer.depth)?;
            self.column = outcome.column;
            self.completed = n.get() + 1;

            instability_mixes += outcome.instability_mixes;
            stirs += outcome.stirs;
            max_mld = max_mld.max(outcome.layer.depth);

            final_diagnostics = StepDiagnostics::compute(
                &self.column,
                &self.grid,
                self.params.cpw,
                outcome.layer.depth,
            );
            debug!("{n}: {}", final_diagnostics.summary_line());

            callback(&self.output, n);
        }

        let n_steps = n_times - first;
        let wall_time = start_wall.elapsed().as_secs_f64();
        info!(
            "PWP run complete: {n_steps} steps in {wall_time:.2}s, {instability_mixes} convective mixes, {stirs} stirs, max MLD {max_mld:.1} m"
        );

        Ok(RunSummary {
            n_steps,
            instability_mixes,
            stirs,
            max_mld,
            final_diagnostics,
            wall_time,
        })
    }
}

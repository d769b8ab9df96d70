//! Model parameters.

use log::warn;

use crate::error::PwpError;
use crate::source::coriolis_parameter;

/// Largest diffusion stability number for which explicit diffusion is stable.
pub const MAX_STABLE_DSTAB: f64 = 0.5;

/// Parameters of a PWP run.
///
/// Fields are public; the `with_*` methods keep derived quantities (`f`,
/// `ucon`, `dstab`) consistent with the values they are derived from.
/// Parameters are fixed for the whole run.
#[derive(Clone, Debug, PartialEq)]
pub struct PwpParams {
    /// Time step (s)
    pub dt: f64,
    /// Vertical grid spacing (m)
    pub dz: f64,
    /// Depth of the model column (m)
    pub max_depth: f64,
    /// Mixed-layer density threshold (kg/m³)
    pub mld_thresh: f64,
    /// Latitude (degrees north)
    pub latitude: f64,
    /// Coriolis parameter (1/s)
    pub f: f64,
    /// Critical bulk Richardson number
    pub rb: f64,
    /// Critical gradient Richardson number
    pub rg: f64,
    /// Background diapycnal diffusivity (m²/s)
    pub rkz: f64,
    /// Diffusion stability number `dt·rkz/dz²`
    pub dstab: f64,
    /// Extinction scale of the red band (m)
    pub beta_red: f64,
    /// Extinction scale of the blue band (m)
    pub beta_blue: f64,
    /// Specific heat of seawater (J/(kg·K))
    pub cpw: f64,
    /// Gravitational acceleration (m/s²)
    pub g: f64,
    /// Linear drag coefficient (1/s)
    pub ucon: f64,
    /// Apply linear drag to the current
    pub drag_enabled: bool,
    /// Safety bound on convective mixes per step (`None`: column length + 1)
    pub max_instability_iterations: Option<usize>,
    /// Safety bound on gradient Richardson stirs per step
    pub max_gradient_iterations: usize,
}

impl Default for PwpParams {
    fn default() -> Self {
        let latitude = 74.0;
        let f = coriolis_parameter(latitude);
        let dt = 3.0 * 3600.0;
        let dz = 1.0;
        let rkz = 0.0;

        Self {
            dt,
            dz,
            max_depth: 100.0,
            mld_thresh: 1e-4,
            latitude,
            f,
            rb: 0.65,
            rg: 0.25,
            rkz,
            dstab: dt * rkz / (dz * dz),
            beta_red: 0.6,
            beta_blue: 20.0,
            cpw: 4183.3,
            g: 9.81,
            ucon: 0.1 * f.abs(),
            drag_enabled: true,
            max_instability_iterations: None,
            max_gradient_iterations: 100_000,
        }
    }
}

impl PwpParams {
    /// Default parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    fn refresh_dstab(&mut self) {
        self.dstab = self.dt * self.rkz / (self.dz * self.dz);
    }

    /// Set the time step (s).
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self.refresh_dstab();
        self
    }

    /// Set the vertical grid spacing (m).
    pub fn with_dz(mut self, dz: f64) -> Self {
        self.dz = dz;
        self.refresh_dstab();
        self
    }

    /// Set the column depth (m).
    pub fn with_max_depth(mut self, max_depth: f64) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the mixed-layer density threshold (kg/m³).
    pub fn with_mld_thresh(mut self, mld_thresh: f64) -> Self {
        self.mld_thresh = mld_thresh;
        self
    }

    /// Set the latitude, recomputing the Coriolis parameter and the drag
    /// coefficient `0.1·|f|`.
    pub fn with_latitude(mut self, latitude: f64) -> Self {
        self.latitude = latitude;
        self.f = coriolis_parameter(latitude);
        self.ucon = 0.1 * self.f.abs();
        self
    }

    /// Set the critical bulk Richardson number (0 disables bulk mixing).
    pub fn with_rb(mut self, rb: f64) -> Self {
        self.rb = rb;
        self
    }

    /// Set the critical gradient Richardson number (0 disables gradient mixing).
    pub fn with_rg(mut self, rg: f64) -> Self {
        self.rg = rg;
        self
    }

    /// Set the background diffusivity (m²/s, 0 disables diffusion).
    pub fn with_rkz(mut self, rkz: f64) -> Self {
        self.rkz = rkz;
        self.refresh_dstab();
        self
    }

    /// Set the red and blue extinction scales (m).
    pub fn with_extinction(mut self, beta_red: f64, beta_blue: f64) -> Self {
        self.beta_red = beta_red;
        self.beta_blue = beta_blue;
        self
    }

    /// Override the drag coefficient (1/s).
    pub fn with_ucon(mut self, ucon: f64) -> Self {
        self.ucon = ucon;
        self
    }

    /// Enable or disable linear drag.
    pub fn with_drag(mut self, enabled: bool) -> Self {
        self.drag_enabled = enabled;
        self
    }

    /// Set the safety bound on convective mixes per step.
    pub fn with_max_instability_iterations(mut self, max: usize) -> Self {
        self.max_instability_iterations = Some(max);
        self
    }

    /// Set the safety bound on gradient Richardson stirs per step.
    pub fn with_max_gradient_iterations(mut self, max: usize) -> Self {
        self.max_gradient_iterations = max;
        self
    }

    /// Whether diffusion runs this simulation.
    #[inline]
    pub fn diffusion_enabled(&self) -> bool {
        self.rkz > 0.0
    }

    /// Convective mixing bound for a column of `n_levels`.
    pub fn instability_bound(&self, n_levels: usize) -> usize {
        self.max_instability_iterations.unwrap_or(n_levels + 1)
    }

    /// Check the parameter set.
    ///
    /// An explicit diffusion number above 0.5 is accepted but logged as a
    /// warning.
    ///
    /// # Errors
    /// [`PwpError::InvalidConfig`] for non-finite values, non-positive
    /// `dt`, `dz`, `max_depth`, `cpw` or `g`, negative thresholds or
    /// diffusivity, or zero iteration bounds.
    pub fn validate(&self) -> Result<(), PwpError> {
        let values = [
            ("dt", self.dt),
            ("dz", self.dz),
            ("max_depth", self.max_depth),
            ("mld_thresh", self.mld_thresh),
            ("latitude", self.latitude),
            ("f", self.f),
            ("rb", self.rb),
            ("rg", self.rg),
            ("rkz", self.rkz),
            ("dstab", self.dstab),
            ("beta_red", self.beta_red),
            ("beta_blue", self.beta_blue),
            ("cpw", self.cpw),
            ("g", self.g),
            ("ucon", self.ucon),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PwpError::invalid_config(format!("{name} must be finite, got {value}")));
        }

        for (name, value) in [
            ("dt", self.dt),
            ("dz", self.dz),
            ("max_depth", self.max_depth),
            ("beta_red", self.beta_red),
            ("beta_blue", self.beta_blue),
            ("cpw", self.cpw),
            ("g", self.g),
        ] {
            if value <= 0.0 {
                return Err(PwpError::invalid_config(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("mld_thresh", self.mld_thresh),
            ("rb", self.rb),
            ("rg", self.rg),
            ("rkz", self.rkz),
            ("ucon", self.ucon),
        ] {
            if value < 0.0 {
                return Err(PwpError::invalid_config(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(PwpError::invalid_config(format!(
                "latitude must lie in [-90, 90], got {}",
                self.latitude
            )));
        }
        if self.max_depth < self.dz {
            return Err(PwpError::invalid_config(format!(
                "max_depth ({}) must be at least one grid spacing ({})",
                self.max_depth, self.dz
            )));
        }
        if self.max_instability_iterations == Some(0) || self.max_gradient_iterations == 0 {
            return Err(PwpError::invalid_config("iteration bounds must be positive"));
        }

        if self.dstab > MAX_STABLE_DSTAB {
            warn!(
                "diffusion stability number dstab = {:.3} exceeds {MAX_STABLE_DSTAB}; explicit diffusion will be unstable",
                self.dstab
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let params = PwpParams::default();

        assert_eq!(params.dt, 10800.0);
        assert_eq!(params.dz, 1.0);
        assert_eq!(params.rb, 0.65);
        assert_eq!(params.rg, 0.25);
        assert_eq!(params.dstab, 0.0);
        assert!(!params.diffusion_enabled());
        assert!(params.drag_enabled);
        // f at 74N
        assert_relative_eq!(params.f, 1.40191e-4, max_relative = 1e-4);
        assert_relative_eq!(params.ucon, 0.1 * params.f, max_relative = 1e-12);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_latitude_updates_derived() {
        let params = PwpParams::default().with_latitude(-30.0);

        assert!(params.f < 0.0);
        assert_relative_eq!(params.f, -7.292115e-5, max_relative = 1e-10);
        assert_relative_eq!(params.ucon, 7.292115e-6, max_relative = 1e-10);
    }

    #[test]
    fn test_dstab_tracks_inputs() {
        let params = PwpParams::default().with_rkz(1e-5).with_dt(3600.0).with_dz(2.0);

        assert_relative_eq!(params.dstab, 3600.0 * 1e-5 / 4.0, max_relative = 1e-12);
        assert!(params.diffusion_enabled());
    }

    #[test]
    fn test_unstable_dstab_is_accepted() {
        let params = PwpParams::default().with_rkz(1e-3).with_dz(1.0);
        assert!(params.dstab > MAX_STABLE_DSTAB);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let cases = [
            PwpParams::default().with_dt(0.0),
            PwpParams::default().with_dz(-1.0),
            PwpParams::default().with_mld_thresh(-1e-4),
            PwpParams::default().with_rg(f64::NAN),
            PwpParams::default().with_max_depth(0.5),
            PwpParams::default().with_max_gradient_iterations(0),
            PwpParams::default().with_latitude(95.0),
        ];
        for params in cases {
            assert!(
                matches!(params.validate(), Err(PwpError::InvalidConfig(_))),
                "{params:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_instability_bound() {
        let params = PwpParams::default();
        assert_eq!(params.instability_bound(101), 102);
        assert_eq!(params.with_max_instability_iterations(7).instability_bound(101), 7);
    }
}

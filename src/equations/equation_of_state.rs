//! Equation of state and freezing point of seawater.
//!
//! The mixing kernels only ever see seawater through the [`SeawaterEos`]
//! trait, so any equation of state can be plugged into the model. The
//! default, [`EquationOfState`], is the UNESCO EOS-80 one-atmosphere
//! formulation (`dens0`) together with the UNESCO freezing point (`fp`).
//!
//! # References
//!
//! - UNESCO (1981): Tenth report of the joint panel on oceanographic tables and standards.
//! - Millero & Poisson (1981): International one-atmosphere equation of state of seawater.
//! - Fofonoff & Millard (1983): Algorithms for computation of fundamental properties of seawater.
//!
//! # Units
//!
//! - Temperature: °C
//! - Salinity: PSU (practical salinity units)
//! - Pressure: dbar (decibars), where 1 dbar ≈ 1 m depth
//! - Density: kg/m³

/// Seawater thermodynamics needed by the mixed-layer model.
///
/// Implementations must be pure: the same inputs always give the same output.
pub trait SeawaterEos {
    /// Density at surface pressure (kg/m³).
    fn density(&self, salinity: f64, temperature: f64) -> f64;

    /// Freezing temperature (°C) at the given pressure (dbar).
    fn freezing_point(&self, salinity: f64, pressure: f64) -> f64;

    /// Fill `density` from `salinity` and `temperature`, element by element.
    fn density_into(&self, salinity: &[f64], temperature: &[f64], density: &mut [f64]) {
        for ((d, &s), &t) in density.iter_mut().zip(salinity).zip(temperature) {
            *d = self.density(s, t);
        }
    }
}

/// UNESCO EOS-80 seawater equation of state.
#[derive(Clone, Copy, Debug, Default)]
pub struct EquationOfState;

impl EquationOfState {
    /// Create a new equation of state calculator.
    pub fn new() -> Self {
        Self
    }

    /// Density of pure water (Bigg formula), kg/m³.
    fn pure_water_density(temperature: f64) -> f64 {
        let t = temperature;
        999.842594 + 6.793952e-2 * t - 9.095290e-3 * t.powi(2) + 1.001685e-4 * t.powi(3)
            - 1.120083e-6 * t.powi(4)
            + 6.536336e-9 * t.powi(5)
    }

    /// Compute seawater density at surface pressure (p = 0).
    ///
    /// # Example
    /// ```
    /// use pwp_rs::equations::EquationOfState;
    ///
    /// let eos = EquationOfState::new();
    ///
    /// // Standard seawater
    /// let rho = eos.density_surface(35.0, 10.0);
    /// assert!((rho - 1026.97).abs() < 0.1);
    ///
    /// // Fresh water at 4°C (maximum density)
    /// let rho_fresh = eos.density_surface(0.0, 4.0);
    /// assert!((rho_fresh - 1000.0).abs() < 0.1);
    /// ```
    pub fn density_surface(&self, salinity: f64, temperature: f64) -> f64 {
        let t = temperature;
        let s = salinity;

        let a = 8.24493e-1 - 4.0899e-3 * t + 7.6438e-5 * t.powi(2) - 8.2467e-7 * t.powi(3)
            + 5.3875e-9 * t.powi(4);
        let b = -5.72466e-3 + 1.0227e-4 * t - 1.6546e-6 * t.powi(2);
        let c = 4.8314e-4;

        Self::pure_water_density(t) + a * s + b * s.powf(1.5) + c * s.powi(2)
    }

    /// Density anomaly σ = ρ - 1000 kg/m³.
    pub fn sigma(&self, salinity: f64, temperature: f64) -> f64 {
        self.density_surface(salinity, temperature) - 1000.0
    }

    /// Freezing point of seawater (°C).
    ///
    /// # Arguments
    /// * `salinity` - Salinity in PSU
    /// * `pressure` - Pressure in dbar (≈ depth in m)
    pub fn freezing_point(&self, salinity: f64, pressure: f64) -> f64 {
        let s = salinity;
        let p = pressure;

        -0.0575 * s + 1.710523e-3 * s.powf(1.5) - 2.154996e-4 * s.powi(2) - 7.53e-4 * p
    }
}

impl SeawaterEos for EquationOfState {
    #[inline]
    fn density(&self, salinity: f64, temperature: f64) -> f64 {
        self.density_surface(salinity, temperature)
    }

    #[inline]
    fn freezing_point(&self, salinity: f64, pressure: f64) -> f64 {
        EquationOfState::freezing_point(self, salinity, pressure)
    }
}

//! Surface heat and freshwater fluxes.
//!
//! Each time step deposits heat and freshwater into the column:
//!
//! - Outgoing heat (longwave, latent, sensible) leaves through the surface
//!   cell only.
//! - Incoming shortwave is distributed over depth with the absorption
//!   profile from [`absorb`](super::absorb).
//! - Evaporation minus precipitation concentrates (or dilutes) the surface
//!   cell's salt: `S' = S / (1 - emp·dt/dz)`, which conserves the salt
//!   content `S·dz` of a cell whose thickness changes by `-emp·dt`.
//!
//! The surface cell is never cooled below the freezing point.
//!
//! # Units
//!
//! - Heat flux: W/m² (`q_in` positive downward, `q_out` positive upward)
//! - Freshwater flux: m/s (positive = net evaporation)
//! - Wind stress: N/m²

use crate::column::ColumnState;
use crate::equations::SeawaterEos;
use crate::error::PwpError;
use crate::types::{DepthIndex, TimeIndex};

/// Pressure (dbar) at which the surface freezing point is evaluated.
pub const FREEZING_PRESSURE: f64 = 1.0;

/// Forcing for a single time step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FluxSample {
    /// Incoming shortwave radiation (W/m²)
    pub q_in: f64,
    /// Outgoing heat flux (W/m²)
    pub q_out: f64,
    /// Evaporation minus precipitation (m/s)
    pub emp: f64,
    /// Eastward wind stress (N/m²)
    pub tx: f64,
    /// Northward wind stress (N/m²)
    pub ty: f64,
}

impl FluxSample {
    /// Net surface heat flux into the ocean, ignoring penetration.
    pub fn net_heat(&self) -> f64 {
        self.q_in - self.q_out
    }
}

/// Surface forcing series on the model time axis, plus the static solar
/// absorption profile.
#[derive(Clone, Debug)]
pub struct SurfaceForcing {
    q_in: Vec<f64>,
    q_out: Vec<f64>,
    emp: Vec<f64>,
    tx: Vec<f64>,
    ty: Vec<f64>,
    absrb: Vec<f64>,
}

impl SurfaceForcing {
    /// Create a forcing series with validation.
    ///
    /// Validates:
    /// - all five series are non-empty and of equal length
    /// - no NaN or infinite values
    pub fn new(
        q_in: Vec<f64>,
        q_out: Vec<f64>,
        emp: Vec<f64>,
        tx: Vec<f64>,
        ty: Vec<f64>,
        absrb: Vec<f64>,
    ) -> Result<Self, PwpError> {
        let n = q_in.len();
        if n == 0 {
            return Err(PwpError::invalid_config("forcing series is empty"));
        }
        for (name, series) in [("q_out", &q_out), ("emp", &emp), ("tx", &tx), ("ty", &ty)] {
            if series.len() != n {
                return Err(PwpError::dimension_mismatch(name, n, series.len()));
            }
        }
        for (name, series) in [
            ("q_in", &q_in),
            ("q_out", &q_out),
            ("emp", &emp),
            ("tx", &tx),
            ("ty", &ty),
            ("absrb", &absrb),
        ] {
            if series.iter().any(|x| !x.is_finite()) {
                return Err(PwpError::invalid_config(format!(
                    "forcing series {name} contains non-finite values"
                )));
            }
        }

        Ok(Self {
            q_in,
            q_out,
            emp,
            tx,
            ty,
            absrb,
        })
    }

    /// Same forcing at every one of `n_steps` time steps.
    pub fn constant(n_steps: usize, sample: FluxSample, absrb: Vec<f64>) -> Result<Self, PwpError> {
        Self::new(
            vec![sample.q_in; n_steps],
            vec![sample.q_out; n_steps],
            vec![sample.emp; n_steps],
            vec![sample.tx; n_steps],
            vec![sample.ty; n_steps],
            absrb,
        )
    }

    /// Number of time steps.
    pub fn len(&self) -> usize {
        self.q_in.len()
    }

    /// Returns `true` if there are no time steps.
    pub fn is_empty(&self) -> bool {
        self.q_in.is_empty()
    }

    /// Forcing at time step `n`.
    pub fn sample(&self, n: TimeIndex) -> FluxSample {
        FluxSample {
            q_in: self.q_in[n],
            q_out: self.q_out[n],
            emp: self.emp[n],
            tx: self.tx[n],
            ty: self.ty[n],
        }
    }

    /// Fraction of shortwave absorbed in each depth cell.
    pub fn absorption(&self) -> &[f64] {
        &self.absrb
    }

    /// Incoming shortwave series.
    pub fn q_in(&self) -> &[f64] {
        &self.q_in
    }

    /// Outgoing heat flux series.
    pub fn q_out(&self) -> &[f64] {
        &self.q_out
    }

    /// Evaporation minus precipitation series.
    pub fn emp(&self) -> &[f64] {
        &self.emp
    }

    /// Eastward wind stress series.
    pub fn tx(&self) -> &[f64] {
        &self.tx
    }

    /// Northward wind stress series.
    pub fn ty(&self) -> &[f64] {
        &self.ty
    }
}

/// Apply one step of heat and freshwater forcing, then refresh density.
///
/// Heating uses the density from the start of the step. The freezing-point
/// clamp on the surface cell is evaluated from the surface salinity before
/// the freshwater update.
///
/// # Errors
/// `InvalidConfig` if the freshwater flux would evaporate the entire
/// surface cell within one step (`emp·dt ≥ dz`).
pub fn apply_surface_fluxes<E: SeawaterEos>(
    column: &mut ColumnState,
    flux: &FluxSample,
    absrb: &[f64],
    dt: f64,
    dz: f64,
    cpw: f64,
    eos: &E,
) -> Result<(), PwpError> {
    let n = column.len();
    if absrb.len() != n {
        return Err(PwpError::dimension_mismatch("absorption profile", n, absrb.len()));
    }

    let dilution = 1.0 - flux.emp * dt / dz;
    if dilution <= 0.0 {
        return Err(PwpError::invalid_config(format!(
            "freshwater flux emp = {} m/s removes the surface cell within one step",
            flux.emp
        )));
    }

    let surface = DepthIndex::ZERO;
    let sal_old = column.salinity[surface];

    column.temperature[surface] += (flux.q_in * absrb[0] - flux.q_out) * dt
        / (dz * column.density[surface] * cpw);
    column.salinity[surface] /= dilution;

    let t_freeze = eos.freezing_point(sal_old, FREEZING_PRESSURE);
    if column.temperature[surface] < t_freeze {
        column.temperature[surface] = t_freeze;
    }

    // Shortwave absorbed below the surface cell
    for i in 1..n {
        column.temperature[i] += flux.q_in * absrb[i] * dt / (dz * column.density[i] * cpw);
    }

    column.update_density(eos);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::EquationOfState;
    use crate::source::absorb;

    const TOL: f64 = 1e-12;
    const CPW: f64 = 4183.3;
    const DT: f64 = 3.0 * 3600.0;

    fn column(n: usize) -> (ColumnState, Vec<f64>, EquationOfState) {
        let eos = EquationOfState::new();
        (ColumnState::uniform(n, 5.0, 34.0, &eos), absorb(0.6, 20.0, n, 1.0), eos)
    }

    #[test]
    fn test_heating_warms_surface_most() {
        let (mut col, absrb, eos) = column(10);
        let flux = FluxSample {
            q_in: 300.0,
            q_out: 50.0,
            ..Default::default()
        };

        apply_surface_fluxes(&mut col, &flux, &absrb, DT, 1.0, CPW, &eos).unwrap();

        assert!(col.temperature[0] > 5.0);
        assert!(col.temperature[0] > col.temperature[1]);
        assert!(col.temperature[9] > 5.0);
        // Density kept in sync
        for i in 0..10 {
            assert_eq!(col.density[i], eos.density(col.salinity[i], col.temperature[i]));
        }
    }

    #[test]
    fn test_surface_heat_budget() {
        let (mut col, absrb, eos) = column(5);
        let rho0 = col.density[0];
        let flux = FluxSample {
            q_in: 200.0,
            q_out: 100.0,
            ..Default::default()
        };

        apply_surface_fluxes(&mut col, &flux, &absrb, DT, 1.0, CPW, &eos).unwrap();

        let expected = 5.0 + (200.0 * absrb[0] - 100.0) * DT / (rho0 * CPW);
        assert!((col.temperature[0] - expected).abs() < TOL);
    }

    #[test]
    fn test_evaporation_concentrates_salt() {
        let (mut col, absrb, eos) = column(5);
        let emp = 1e-6;
        let flux = FluxSample {
            emp,
            ..Default::default()
        };

        apply_surface_fluxes(&mut col, &flux, &absrb, DT, 1.0, CPW, &eos).unwrap();

        let expected = 34.0 / (1.0 - emp * DT);
        assert!((col.salinity[0] - expected).abs() < TOL);
        assert_eq!(col.salinity[1], 34.0);
    }

    #[test]
    fn test_freezing_point_clamp() {
        let (mut col, absrb, eos) = column(5);
        let flux = FluxSample {
            q_out: 5000.0,
            ..Default::default()
        };

        apply_surface_fluxes(&mut col, &flux, &absrb, DT, 1.0, CPW, &eos).unwrap();

        let t_freeze = eos.freezing_point(34.0, FREEZING_PRESSURE);
        assert_eq!(col.temperature[0], t_freeze);
    }

    #[test]
    fn test_excessive_evaporation_rejected() {
        let (mut col, absrb, eos) = column(5);
        let flux = FluxSample {
            emp: 1.0,
            ..Default::default()
        };
        let result = apply_surface_fluxes(&mut col, &flux, &absrb, DT, 1.0, CPW, &eos);
        assert!(matches!(result, Err(PwpError::InvalidConfig(_))));
    }

    #[test]
    fn test_forcing_validation() {
        let absrb = absorb(0.6, 20.0, 3, 1.0);
        let bad = SurfaceForcing::new(
            vec![1.0, 2.0],
            vec![0.0],
            vec![0.0, 0.0],
            vec![0.0, 0.0],
            vec![0.0, 0.0],
            absrb.clone(),
        );
        assert!(matches!(bad, Err(PwpError::DimensionMismatch { what: "q_out", .. })));

        let nan = SurfaceForcing::new(
            vec![f64::NAN],
            vec![0.0],
            vec![0.0],
            vec![0.0],
            vec![0.0],
            absrb,
        );
        assert!(matches!(nan, Err(PwpError::InvalidConfig(_))));
    }

    #[test]
    fn test_sample() {
        let forcing = SurfaceForcing::constant(
            4,
            FluxSample {
                q_in: 100.0,
                q_out: 40.0,
                emp: 0.0,
                tx: 0.1,
                ty: -0.1,
            },
            vec![1.0],
        )
        .unwrap();

        let s = forcing.sample(TimeIndex::new(2));
        assert_eq!(forcing.len(), 4);
        assert_eq!(s.tx, 0.1);
        assert!((s.net_heat() - 60.0).abs() < TOL);
    }
}

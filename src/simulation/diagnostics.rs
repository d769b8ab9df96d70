//! Per-step column diagnostics.

use crate::column::ColumnState;
use crate::types::DepthIndex;
use crate::vertical::DepthGrid;

/// Summary of the column after a time step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepDiagnostics {
    /// Surface temperature (°C)
    pub sst: f64,
    /// Surface salinity (PSU)
    pub sss: f64,
    /// Surface density (kg/m³)
    pub surface_density: f64,
    /// Mixed-layer depth (m)
    pub mld: f64,
    /// Column heat content `Σ ρ·cpw·T·dz` (J/m²)
    pub heat_content: f64,
    /// Largest current speed in the column (m/s)
    pub max_speed: f64,
}

impl StepDiagnostics {
    /// Compute diagnostics for a column.
    pub fn compute(column: &ColumnState, grid: &DepthGrid, cpw: f64, mld: f64) -> Self {
        let dz = grid.dz();
        let heat_content = column
            .density
            .iter()
            .zip(&column.temperature)
            .map(|(rho, t)| rho * cpw * t * dz)
            .sum();
        let max_speed = DepthIndex::iter(column.len())
            .map(|k| column.speed(k))
            .fold(0.0, f64::max);

        Self {
            sst: column.temperature.first().copied().unwrap_or(f64::NAN),
            sss: column.salinity.first().copied().unwrap_or(f64::NAN),
            surface_density: column.density.first().copied().unwrap_or(f64::NAN),
            mld,
            heat_content,
            max_speed,
        }
    }

    /// One-line human-readable summary.
    pub fn summary_line(&self) -> String {
        format!(
            "SST={:.3}°C SSS={:.3} ρ0={:.3} MLD={:.1}m HC={:.4e}J/m² |u|max={:.3}m/s",
            self.sst, self.sss, self.surface_density, self.mld, self.heat_content, self.max_speed
        )
    }
}

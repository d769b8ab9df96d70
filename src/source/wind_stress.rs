//! Wind stress input and linear drag.
//!
//! Wind stress is deposited as a uniform momentum increment over the mixed
//! layer (slab model):
//!
//! ```text
//! Δu = τx·dt / (h·ρ₀),  Δv = τy·dt / (h·ρ₀)
//! ```
//!
//! where `h` is the mixed-layer depth and `ρ₀` the surface density. The
//! increment is bracketed by two half-step Coriolis rotations so that the
//! explicit forcing is centred in the inertial rotation.
//!
//! Linear drag `u ← u·(1 - dt·ucon)` crudely represents momentum loss to
//! inertial-internal waves.

use super::coriolis::rotate_column;
use crate::column::ColumnState;
use crate::mixing::MixedLayer;

/// Drag coefficients at or below this value are treated as "no drag".
pub const DRAG_THRESHOLD: f64 = 1e-10;

/// Whether drag applies for the given switch and coefficient.
#[inline]
pub fn drag_active(enabled: bool, ucon: f64) -> bool {
    enabled && ucon > DRAG_THRESHOLD
}

/// Add the wind-driven velocity increment to every level above the
/// mixed-layer base. An empty column is left as is.
pub fn apply_wind_stress(column: &mut ColumnState, tx: f64, ty: f64, dt: f64, layer: &MixedLayer) {
    let Some(&rho0) = column.density.first() else {
        return;
    };
    let du = tx * dt / (layer.depth * rho0);
    let dv = ty * dt / (layer.depth * rho0);

    let top = layer.index.get().min(column.len());
    for u in &mut column.u[..top] {
        *u += du;
    }
    for v in &mut column.v[..top] {
        *v += dv;
    }
}

/// Damp the whole velocity profile by `1 - dt·ucon`.
pub fn apply_drag(column: &mut ColumnState, dt: f64, ucon: f64) {
    let factor = 1.0 - dt * ucon;
    column.u.iter_mut().for_each(|u| *u *= factor);
    column.v.iter_mut().for_each(|v| *v *= factor);
}

/// Rotate half a step, add wind stress, optionally apply drag, rotate the
/// remaining half step.
///
/// # Arguments
/// * `tx`, `ty` - Wind stress (N/m²)
/// * `layer` - Mixed layer detected for this step
/// * `f` - Coriolis parameter (1/s)
/// * `dt` - Time step (s)
/// * `drag` - Drag coefficient `ucon` (1/s), or `None` to skip drag
pub fn apply_momentum_forcing(
    column: &mut ColumnState,
    tx: f64,
    ty: f64,
    layer: &MixedLayer,
    f: f64,
    dt: f64,
    drag: Option<f64>,
) {
    let half_angle = -f * dt / 2.0;

    rotate_column(column, half_angle);
    apply_wind_stress(column, tx, ty, dt, layer);
    if let Some(ucon) = drag {
        apply_drag(column, dt, ucon);
    }
    rotate_column(column, half_angle);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::EquationOfState;
    use crate::types::DepthIndex;

    const TOL: f64 = 1e-12;

    fn layer(index: usize, depth: f64) -> MixedLayer {
        MixedLayer {
            index: DepthIndex::new(index),
            depth,
        }
    }

    #[test]
    fn test_wind_stress_confined_to_mixed_layer() {
        let eos = EquationOfState::new();
        let mut col = ColumnState::uniform(10, 5.0, 34.0, &eos);
        let rho0 = col.density[0];

        apply_wind_stress(&mut col, 0.1, -0.05, 3600.0, &layer(4, 4.0));

        let du = 0.1 * 3600.0 / (4.0 * rho0);
        for i in 0..4 {
            assert!((col.u[i] - du).abs() < TOL);
            assert!(col.v[i] < 0.0);
        }
        for i in 4..10 {
            assert_eq!(col.u[i], 0.0);
            assert_eq!(col.v[i], 0.0);
        }
    }

    #[test]
    fn test_wind_stress_on_empty_column() {
        let eos = EquationOfState::new();
        let mut col = ColumnState::uniform(0, 5.0, 34.0, &eos);

        apply_momentum_forcing(&mut col, 0.1, 0.1, &layer(1, 1.0), 1.4e-4, 3600.0, Some(1e-5));

        assert!(col.is_empty());
    }

    #[test]
    fn test_momentum_input_matches_stress() {
        // Depth-integrated momentum added equals tau*dt/rho0 (before rotation)
        let eos = EquationOfState::new();
        let mut col = ColumnState::uniform(20, 5.0, 34.0, &eos);
        let rho0 = col.density[0];
        let dz = 1.0;

        apply_momentum_forcing(&mut col, 0.2, 0.0, &layer(8, 8.0), 0.0, 600.0, None);

        let transport: f64 = col.u.iter().map(|u| u * dz).sum();
        assert!((transport - 0.2 * 600.0 / rho0).abs() < TOL);
    }

    #[test]
    fn test_drag_damps_velocity() {
        let eos = EquationOfState::new();
        let mut col = ColumnState::uniform(3, 5.0, 34.0, &eos);
        col.u = vec![1.0, 0.5, 0.0];
        col.v = vec![0.0, -0.5, 2.0];

        apply_drag(&mut col, 100.0, 1e-4);

        assert!((col.u[0] - 0.99).abs() < TOL);
        assert!((col.v[2] - 1.98).abs() < TOL);
    }

    #[test]
    fn test_drag_active() {
        assert!(drag_active(true, 1e-5));
        assert!(!drag_active(false, 1e-5));
        assert!(!drag_active(true, 1e-12));
    }

    #[test]
    fn test_rotation_turns_wind_driven_current() {
        let eos = EquationOfState::new();
        let mut col = ColumnState::uniform(5, 5.0, 34.0, &eos);
        let f = 1.4e-4;

        apply_momentum_forcing(&mut col, 0.1, 0.0, &layer(2, 2.0), f, 3600.0, None);

        // Northern hemisphere: eastward stress turns the current to the right (south)
        assert!(col.u[0] > 0.0);
        assert!(col.v[0] < 0.0);
    }
}

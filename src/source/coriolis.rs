//! Coriolis rotation of the horizontal velocity.
//!
//! Over a time step the inertial oscillation turns the current vector
//! clockwise (in the Northern Hemisphere) by the angle `f·dt`. The model
//! applies this exactly by rotating each `(u, v)` pair as a complex number:
//!
//! ```text
//! u' + i·v' = (u + i·v)·exp(i·θ)
//! ```
//!
//! with `θ = -f·dt/2` applied once before and once after the wind forcing.

use crate::column::ColumnState;

/// Earth's rotation rate (rad/s).
pub const OMEGA: f64 = 7.292115e-5;

/// Coriolis parameter `f = 2Ω·sin(φ)` for latitude φ in degrees.
///
/// # Example
/// ```
/// use pwp_rs::source::coriolis_parameter;
///
/// let f = coriolis_parameter(30.0);
/// assert!((f - 7.292115e-5).abs() < 1e-12);
/// ```
pub fn coriolis_parameter(latitude_deg: f64) -> f64 {
    2.0 * OMEGA * latitude_deg.to_radians().sin()
}

/// Rotate every `(u[i], v[i])` pair through `angle` radians
/// (counter-clockwise for positive angles).
pub fn rotate(u: &mut [f64], v: &mut [f64], angle: f64) {
    let (sin, cos) = angle.sin_cos();
    for (ui, vi) in u.iter_mut().zip(v.iter_mut()) {
        let (u0, v0) = (*ui, *vi);
        *ui = u0 * cos - v0 * sin;
        *vi = u0 * sin + v0 * cos;
    }
}

/// Rotate the column's velocity profile through `angle` radians.
pub fn rotate_column(column: &mut ColumnState, angle: f64) {
    rotate(&mut column.u, &mut column.v, angle);
}

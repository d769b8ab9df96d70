//! Column state for a single time step.

use std::ops::Range;

use crate::equations::SeawaterEos;
use crate::error::PwpError;
use crate::types::DepthIndex;

/// Temperature, salinity, density and horizontal velocity on every level
/// of the model column.
///
/// `density` is always the equation-of-state output of `(salinity,
/// temperature)` at the same level. Code that changes `temperature` or
/// `salinity` must call [`ColumnState::update_density`] (or
/// [`ColumnState::update_density_range`]) for the levels it touched before
/// handing the column on.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnState {
    /// Temperature (°C)
    pub temperature: Vec<f64>,
    /// Salinity (PSU)
    pub salinity: Vec<f64>,
    /// Density (kg/m³)
    pub density: Vec<f64>,
    /// Eastward velocity (m/s)
    pub u: Vec<f64>,
    /// Northward velocity (m/s)
    pub v: Vec<f64>,
}

impl ColumnState {
    /// Build a column from temperature, salinity and velocity profiles,
    /// computing density with `eos`.
    pub fn new<E: SeawaterEos>(
        temperature: Vec<f64>,
        salinity: Vec<f64>,
        u: Vec<f64>,
        v: Vec<f64>,
        eos: &E,
    ) -> Result<Self, PwpError> {
        let n = temperature.len();
        if salinity.len() != n {
            return Err(PwpError::dimension_mismatch("salinity", n, salinity.len()));
        }
        if u.len() != n {
            return Err(PwpError::dimension_mismatch("u velocity", n, u.len()));
        }
        if v.len() != n {
            return Err(PwpError::dimension_mismatch("v velocity", n, v.len()));
        }

        let mut column = Self {
            temperature,
            salinity,
            density: vec![0.0; n],
            u,
            v,
        };
        column.update_density(eos);
        Ok(column)
    }

    /// Column at rest with the given temperature and salinity profiles.
    pub fn at_rest<E: SeawaterEos>(
        temperature: Vec<f64>,
        salinity: Vec<f64>,
        eos: &E,
    ) -> Result<Self, PwpError> {
        let n = temperature.len();
        Self::new(temperature, salinity, vec![0.0; n], vec![0.0; n], eos)
    }

    /// Homogeneous column at rest.
    pub fn uniform<E: SeawaterEos>(n_levels: usize, temperature: f64, salinity: f64, eos: &E) -> Self {
        let density = eos.density(salinity, temperature);
        Self {
            temperature: vec![temperature; n_levels],
            salinity: vec![salinity; n_levels],
            density: vec![density; n_levels],
            u: vec![0.0; n_levels],
            v: vec![0.0; n_levels],
        }
    }

    /// Number of levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    /// Whether the column has no levels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }

    /// Recompute density on every level.
    pub fn update_density<E: SeawaterEos>(&mut self, eos: &E) {
        eos.density_into(&self.salinity, &self.temperature, &mut self.density);
    }

    /// Recompute density on `range` only.
    pub fn update_density_range<E: SeawaterEos>(&mut self, eos: &E, range: Range<usize>) {
        eos.density_into(
            &self.salinity[range.clone()],
            &self.temperature[range.clone()],
            &mut self.density[range],
        );
    }

    /// Recompute density at a single level.
    #[inline]
    pub fn update_density_at<E: SeawaterEos>(&mut self, eos: &E, idx: DepthIndex) {
        self.density[idx] = eos.density(self.salinity[idx], self.temperature[idx]);
    }

    /// Shallowest level `j` whose density is lower than the level above it,
    /// i.e. the lower member of the first inverted pair.
    pub fn first_inversion(&self) -> Option<DepthIndex> {
        self.density
            .windows(2)
            .position(|pair| pair[1] - pair[0] < 0.0)
            .map(|i| DepthIndex::new(i + 1))
    }

    /// Whether density is non-decreasing with depth.
    pub fn is_statically_stable(&self) -> bool {
        self.first_inversion().is_none()
    }

    /// Current speed `sqrt(u² + v²)` at a level.
    #[inline]
    pub fn speed(&self, idx: DepthIndex) -> f64 {
        self.u[idx].hypot(self.v[idx])
    }

    /// First NaN or infinite value, reported as (field name, level).
    pub fn first_non_finite(&self) -> Option<(&'static str, DepthIndex)> {
        let fields: [(&'static str, &[f64]); 5] = [
            ("temperature", &self.temperature),
            ("salinity", &self.salinity),
            ("density", &self.density),
            ("u velocity", &self.u),
            ("v velocity", &self.v),
        ];
        fields.into_iter().find_map(|(name, values)| {
            values
                .iter()
                .position(|x| !x.is_finite())
                .map(|i| (name, DepthIndex::new(i)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::EquationOfState;

    #[test]
    fn test_new_computes_density() {
        let eos = EquationOfState::new();
        let column = ColumnState::at_rest(vec![10.0, 5.0], vec![34.0, 35.0], &eos).unwrap();

        assert_eq!(column.density[0], eos.density(34.0, 10.0));
        assert_eq!(column.density[1], eos.density(35.0, 5.0));
        assert!(column.u.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_new_rejects_length_mismatch() {
        let eos = EquationOfState::new();
        let result = ColumnState::at_rest(vec![10.0, 5.0], vec![34.0], &eos);
        assert!(matches!(
            result,
            Err(PwpError::DimensionMismatch { expected: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn test_first_inversion() {
        let eos = EquationOfState::new();
        // Warm water under cold water at level 2
        let column =
            ColumnState::at_rest(vec![5.0, 4.0, 8.0, 3.0], vec![34.0; 4], &eos).unwrap();

        assert_eq!(column.first_inversion(), Some(DepthIndex::new(2)));
        assert!(!column.is_statically_stable());

        let stable = ColumnState::uniform(4, 5.0, 34.0, &eos);
        assert!(stable.is_statically_stable());
    }

    #[test]
    fn test_update_density_range_leaves_rest() {
        let eos = EquationOfState::new();
        let mut column = ColumnState::uniform(4, 5.0, 34.0, &eos);
        let before = column.density.clone();

        column.temperature[1] = 10.0;
        column.temperature[3] = 10.0;
        column.update_density_range(&eos, 0..2);

        assert!(column.density[1] < before[1]);
        assert_eq!(column.density[3], before[3]);
    }

    #[test]
    fn test_first_non_finite() {
        let eos = EquationOfState::new();
        let mut column = ColumnState::uniform(3, 5.0, 34.0, &eos);
        assert!(column.first_non_finite().is_none());

        column.v[2] = f64::NAN;
        assert_eq!(
            column.first_non_finite(),
            Some(("v velocity", DepthIndex::new(2)))
        );
    }
}

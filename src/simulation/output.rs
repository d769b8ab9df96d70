//! Output time series.

use crate::column::ColumnState;
use crate::error::PwpError;
use crate::types::{DepthIndex, TimeIndex};

/// One profile variable over the run: `n_levels` values per time step.
///
/// Stored time-major so that each step's profile is a contiguous slice.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileSeries {
    n_levels: usize,
    data: Vec<f64>,
}

impl ProfileSeries {
    /// Series of `n_times` profiles filled with NaN.
    pub fn new(n_levels: usize, n_times: usize) -> Self {
        Self {
            n_levels,
            data: vec![f64::NAN; n_levels * n_times],
        }
    }

    /// Number of depth levels.
    pub fn n_levels(&self) -> usize {
        self.n_levels
    }

    /// Number of time steps.
    pub fn n_times(&self) -> usize {
        if self.n_levels == 0 {
            0
        } else {
            self.data.len() / self.n_levels
        }
    }

    /// Profile at time step `n`.
    pub fn profile(&self, n: TimeIndex) -> &[f64] {
        let start = n.get() * self.n_levels;
        &self.data[start..start + self.n_levels]
    }

    fn profile_mut(&mut self, n: TimeIndex) -> &mut [f64] {
        let start = n.get() * self.n_levels;
        &mut self.data[start..start + self.n_levels]
    }

    /// Value at level `k`, time step `n`.
    #[inline]
    pub fn get(&self, k: DepthIndex, n: TimeIndex) -> f64 {
        self.data[n.get() * self.n_levels + k.get()]
    }

    /// Time series at a single level.
    pub fn at_level(&self, k: DepthIndex) -> Vec<f64> {
        self.data
            .chunks_exact(self.n_levels)
            .map(|profile| profile[k])
            .collect()
    }

    /// Values laid out `[depth][time]`, depth slowest.
    pub fn to_depth_major(&self) -> Vec<f64> {
        let n_times = self.n_times();
        let mut out = Vec::with_capacity(self.data.len());
        for k in 0..self.n_levels {
            out.extend((0..n_times).map(|n| self.data[n * self.n_levels + k]));
        }
        out
    }
}

/// Model output: profiles of every variable at every time step, the
/// mixed-layer depth series, and the coordinates.
///
/// Steps the run has not reached yet hold NaN.
#[derive(Clone, Debug, PartialEq)]
pub struct PwpOutput {
    /// Level depths (m)
    pub z: Vec<f64>,
    /// Model time axis (days)
    pub time: Vec<f64>,
    /// Temperature (°C)
    pub temperature: ProfileSeries,
    /// Salinity (PSU)
    pub salinity: ProfileSeries,
    /// Density (kg/m³)
    pub density: ProfileSeries,
    /// Eastward velocity (m/s)
    pub u: ProfileSeries,
    /// Northward velocity (m/s)
    pub v: ProfileSeries,
    /// Mixed-layer depth (m)
    pub mld: Vec<f64>,
}

impl PwpOutput {
    /// Empty output for the given coordinates.
    pub fn new(z: Vec<f64>, time: Vec<f64>) -> Self {
        let (n_levels, n_times) = (z.len(), time.len());
        Self {
            z,
            time,
            temperature: ProfileSeries::new(n_levels, n_times),
            salinity: ProfileSeries::new(n_levels, n_times),
            density: ProfileSeries::new(n_levels, n_times),
            u: ProfileSeries::new(n_levels, n_times),
            v: ProfileSeries::new(n_levels, n_times),
            mld: vec![f64::NAN; n_times],
        }
    }

    /// Number of depth levels.
    pub fn n_levels(&self) -> usize {
        self.z.len()
    }

    /// Number of time steps.
    pub fn n_times(&self) -> usize {
        self.time.len()
    }

    /// Write the column and mixed-layer depth for time step `n`.
    ///
    /// # Errors
    /// `DimensionMismatch` if the column length differs from the grid.
    pub fn store(&mut self, n: TimeIndex, column: &ColumnState, mld: f64) -> Result<(), PwpError> {
        if column.len() != self.n_levels() {
            return Err(PwpError::dimension_mismatch(
                "stored column",
                self.n_levels(),
                column.len(),
            ));
        }
        if n.get() >= self.n_times() {
            return Err(PwpError::dimension_mismatch(
                "time index",
                self.n_times(),
                n.get() + 1,
            ));
        }

        self.temperature.profile_mut(n).copy_from_slice(&column.temperature);
        self.salinity.profile_mut(n).copy_from_slice(&column.salinity);
        self.density.profile_mut(n).copy_from_slice(&column.density);
        self.u.profile_mut(n).copy_from_slice(&column.u);
        self.v.profile_mut(n).copy_from_slice(&column.v);
        self.mld[n] = mld;
        Ok(())
    }

    /// Column state stored at time step `n`.
    pub fn column(&self, n: TimeIndex) -> ColumnState {
        ColumnState {
            temperature: self.temperature.profile(n).to_vec(),
            salinity: self.salinity.profile(n).to_vec(),
            density: self.density.profile(n).to_vec(),
            u: self.u.profile(n).to_vec(),
            v: self.v.profile(n).to_vec(),
        }
    }
}

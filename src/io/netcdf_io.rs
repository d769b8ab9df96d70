//! NetCDF output of PWP runs.
//!
//! Writes the whole output in one pass with CF-1.8 style metadata:
//!
//! - dimensions `z` (levels) and `time` (model steps)
//! - coordinates `z` (m, positive down) and `time` (days)
//! - `temp`, `sal`, `dens`, `uvel`, `vvel` on `(z, time)`
//! - `mld` on `(time)`
//!
//! Steps the run did not reach (NaN in [`PwpOutput`]) are written as the
//! fill value.
//!
//! # Example
//!
//! ```rust,ignore
//! use pwp_rs::io::{NetCDFWriterConfig, write_netcdf};
//!
//! let config = NetCDFWriterConfig::new("pwp_output.nc").with_title("Beaufort Sea, summer");
//! write_netcdf(sim.output(), &config)?;
//! ```

use chrono::Utc;
use netcdf::create;
use thiserror::Error;

use crate::simulation::PwpOutput;

/// Error type for NetCDF operations.
#[derive(Debug, Error)]
pub enum NetCDFError {
    /// NetCDF library error
    #[error("NetCDF error: {0}")]
    NetCDF(#[from] netcdf::Error),

    /// Invalid data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Fill value for missing data (CF-conventions standard).
pub const FILL_VALUE_F64: f64 = 9.96920996838687e+36;

/// Replace non-finite values with [`FILL_VALUE_F64`].
fn with_fill(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    values
        .into_iter()
        .map(|v| if v.is_finite() { v } else { FILL_VALUE_F64 })
        .collect()
}

/// Configuration for NetCDF output.
#[derive(Debug, Clone)]
pub struct NetCDFWriterConfig {
    /// Output file path
    pub path: String,
    /// Title attribute (CF-conventions)
    pub title: Option<String>,
    /// Institution attribute
    pub institution: Option<String>,
    /// Source attribute (model name/version)
    pub source: Option<String>,
    /// Comment attribute
    pub comment: Option<String>,
    /// Whether to include velocity components (u, v)
    pub include_velocity: bool,
}

impl NetCDFWriterConfig {
    /// Create a new configuration with the given output path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: None,
            institution: None,
            source: Some(format!("pwp-rs {}", env!("CARGO_PKG_VERSION"))),
            comment: None,
            include_velocity: true,
        }
    }

    /// Set the title attribute.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the institution attribute.
    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = Some(institution.into());
        self
    }

    /// Set the comment attribute.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Enable/disable velocity output.
    pub fn with_velocity(mut self, include: bool) -> Self {
        self.include_velocity = include;
        self
    }
}

/// Write a run's output to a new NetCDF file.
pub fn write_netcdf(output: &PwpOutput, config: &NetCDFWriterConfig) -> Result<(), NetCDFError> {
    let n_levels = output.n_levels();
    let n_times = output.n_times();
    if output.mld.len() != n_times {
        return Err(NetCDFError::InvalidData(format!(
            "mld has {} entries for {n_times} time steps",
            output.mld.len()
        )));
    }

    let mut file = create(&config.path)?;

    file.add_dimension("z", n_levels)?;
    file.add_dimension("time", n_times)?;

    {
        let mut z_var = file.add_variable::<f64>("z", &["z"])?;
        z_var.put_attribute("standard_name", "depth")?;
        z_var.put_attribute("long_name", "depth of level")?;
        z_var.put_attribute("units", "m")?;
        z_var.put_attribute("positive", "down")?;
        z_var.put_values(&output.z, ..)?;
    }

    {
        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("standard_name", "time")?;
        time_var.put_attribute("long_name", "model time")?;
        time_var.put_attribute("units", "days")?;
        time_var.put_values(&output.time, ..)?;
    }

    let mut profiles = vec![
        ("temp", "sea_water_temperature", "temperature", "degC", &output.temperature),
        ("sal", "sea_water_salinity", "salinity", "1e-3", &output.salinity),
        ("dens", "sea_water_density", "density", "kg m-3", &output.density),
    ];
    if config.include_velocity {
        profiles.push(("uvel", "eastward_sea_water_velocity", "eastward velocity", "m s-1", &output.u));
        profiles.push(("vvel", "northward_sea_water_velocity", "northward velocity", "m s-1", &output.v));
    }

    for (name, standard_name, long_name, units, series) in profiles {
        let mut var = file.add_variable::<f64>(name, &["z", "time"])?;
        var.put_attribute("standard_name", standard_name)?;
        var.put_attribute("long_name", long_name)?;
        var.put_attribute("units", units)?;
        var.put_attribute("_FillValue", FILL_VALUE_F64)?;
        var.put_values(&with_fill(series.to_depth_major()), ..)?;
    }

    {
        let mut mld_var = file.add_variable::<f64>("mld", &["time"])?;
        mld_var.put_attribute("standard_name", "ocean_mixed_layer_thickness_defined_by_sigma_t")?;
        mld_var.put_attribute("long_name", "mixed layer depth")?;
        mld_var.put_attribute("units", "m")?;
        mld_var.put_attribute("_FillValue", FILL_VALUE_F64)?;
        mld_var.put_values(&with_fill(output.mld.iter().copied()), ..)?;
    }

    file.add_attribute("Conventions", "CF-1.8")?;
    file.add_attribute("featureType", "profile")?;
    if let Some(ref title) = config.title {
        file.add_attribute("title", title.as_str())?;
    }
    if let Some(ref institution) = config.institution {
        file.add_attribute("institution", institution.as_str())?;
    }
    if let Some(ref source) = config.source {
        file.add_attribute("source", source.as_str())?;
    }
    if let Some(ref comment) = config.comment {
        file.add_attribute("comment", comment.as_str())?;
    }

    let now = Utc::now();
    file.add_attribute(
        "history",
        format!("{}: Created by pwp-rs", now.format("%Y-%m-%d %H:%M:%S UTC")).as_str(),
    )?;

    Ok(())
}

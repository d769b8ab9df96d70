//! Beaufort Sea Summer Column Example
//!
//! Runs the PWP model for 30 days on an Arctic summer column with:
//!
//! - A fresh, near-freezing surface layer over Pacific-origin water
//! - Diurnal shortwave heating and steady heat loss
//! - Light winds interrupted by a three-day storm
//! - Weak background diffusion
//!
//! Run with: `RUST_LOG=debug cargo run --release --example beaufort_column`
//! Add `--features netcdf` to also write `beaufort_column.nc`.

use std::error::Error;
use std::f64::consts::PI;

use env_logger::{Builder, Env};
use log::info;

use pwp_rs::io::{ForcingSeries, InitialProfile, prepare_run};
use pwp_rs::{EquationOfState, PwpParams, Simulation};

// ============================================================================
// Scenario
// ============================================================================

/// Length of the run (days)
const DAYS: usize = 30;

/// Peak midday shortwave (W/m²)
const Q_IN_PEAK: f64 = 550.0;

/// Outgoing longwave + turbulent heat loss (W/m²)
const Q_OUT: f64 = 130.0;

/// Net precipitation and melt, negative E-P (m/s)
const EMP: f64 = -2.0e-8;

/// Storm window (days)
const STORM: (f64, f64) = (12.0, 15.0);

/// Hourly forcing: clear-sky diurnal shortwave, steady heat loss, light
/// easterly wind with a storm.
fn synthetic_forcing() -> ForcingSeries {
    let time: Vec<f64> = (0..=DAYS * 24).map(|h| h as f64 / 24.0).collect();

    let q_in = time
        .iter()
        .map(|t| {
            let hour = (t * 24.0) % 24.0;
            (Q_IN_PEAK * (PI * (hour - 4.0) / 16.0).sin()).max(0.0)
        })
        .collect();
    let tx = time
        .iter()
        .map(|&t| if (STORM.0..STORM.1).contains(&t) { -0.25 } else { -0.04 })
        .collect();
    let ty = time
        .iter()
        .map(|&t| if (STORM.0..STORM.1).contains(&t) { 0.10 } else { 0.01 })
        .collect();

    ForcingSeries {
        q_out: vec![Q_OUT; time.len()],
        emp: vec![EMP; time.len()],
        q_in,
        tx,
        ty,
        time,
    }
}

/// Idealized Canada Basin profile.
fn initial_profile() -> InitialProfile {
    InitialProfile {
        depth: vec![0.0, 10.0, 20.0, 35.0, 50.0, 80.0, 120.0],
        temperature: vec![-1.2, -1.3, -1.4, -1.3, -0.9, -1.2, -1.4],
        salinity: vec![27.5, 28.0, 29.2, 30.6, 31.2, 32.0, 32.8],
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<(), Box<dyn Error>> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let eos = EquationOfState::new();
    let params = PwpParams::default()
        .with_latitude(73.0)
        .with_max_depth(120.0)
        .with_rkz(1e-5);

    let inputs = prepare_run(&synthetic_forcing(), &initial_profile(), &params, &eos)?;
    let mut sim = Simulation::new(params, inputs)?;

    println!("{:>6} {:>8} {:>8} {:>8} {:>8}", "day", "SST", "SSS", "MLD", "|u|");
    let summary = sim.run_with_callback(|out, n| {
        // Once a day, at midnight
        if n.get() % 8 == 0 {
            let t = out.temperature.profile(n)[0];
            let s = out.salinity.profile(n)[0];
            let speed = out.u.profile(n)[0].hypot(out.v.profile(n)[0]);
            println!(
                "{:>6.1} {:>8.3} {:>8.3} {:>8.1} {:>8.3}",
                out.time[n], t, s, out.mld[n], speed
            );
        }
    })?;

    info!(
        "finished {} steps: max MLD {:.1} m, {} convective mixes, {} shear stirs",
        summary.n_steps, summary.max_mld, summary.instability_mixes, summary.stirs
    );
    info!("final state: {}", summary.final_diagnostics.summary_line());

    #[cfg(feature = "netcdf")]
    {
        use pwp_rs::io::{NetCDFWriterConfig, write_netcdf};

        let config = NetCDFWriterConfig::new("beaufort_column.nc")
            .with_title("PWP Beaufort Sea summer column")
            .with_comment("Synthetic forcing, 30 days");
        write_netcdf(sim.output(), &config)?;
        info!("wrote {}", config.path);
    }

    Ok(())
}

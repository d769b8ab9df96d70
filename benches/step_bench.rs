//! Benchmarks for the time-step driver.
//!
//! Run with: `cargo bench --bench step_bench`
//!
//! Benchmarks a single model step and complete runs on columns of
//! increasing depth.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pwp_rs::{
    ColumnState, DepthGrid, EquationOfState, FluxSample, PwpParams, RunInputs, Simulation,
    SurfaceForcing, TimeIndex, absorb,
};

/// Stratified column under steady cooling and wind.
fn setup_inputs(params: &PwpParams, n_times: usize) -> RunInputs {
    let eos = EquationOfState::new();
    let grid = DepthGrid::from_max_depth(params.max_depth, params.dz).unwrap();
    let temperature = grid.depths().iter().map(|z| 8.0 - 0.05 * z).collect();
    let salinity = grid.depths().iter().map(|z| 33.0 + 0.01 * z).collect();
    let initial = ColumnState::at_rest(temperature, salinity, &eos).unwrap();

    let absrb = absorb(params.beta_red, params.beta_blue, grid.len(), params.dz);
    let flux = FluxSample {
        q_in: 150.0,
        q_out: 250.0,
        emp: 1e-8,
        tx: 0.1,
        ty: 0.05,
    };
    let forcing = SurfaceForcing::constant(n_times, flux, absrb).unwrap();
    let time = (0..n_times).map(|n| n as f64 * params.dt / 86400.0).collect();

    RunInputs {
        grid,
        forcing,
        time,
        initial,
    }
}

/// Benchmark advancing the column by one step.
fn bench_single_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_step");

    for max_depth in [50.0, 100.0, 200.0, 400.0] {
        let params = PwpParams::default().with_max_depth(max_depth).with_rkz(1e-5);
        let sim = Simulation::new(params.clone(), setup_inputs(&params, 2)).unwrap();
        let column = sim.current_column().clone();

        group.bench_with_input(
            BenchmarkId::new("advance_column", format!("{}_levels", column.len())),
            &column,
            |b, column| {
                b.iter(|| sim.advance_column(black_box(column), TimeIndex::new(1)));
            },
        );
    }

    group.finish();
}

/// Benchmark a 30-day run at 3-hourly steps.
fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.sample_size(20);

    for max_depth in [100.0, 200.0] {
        let params = PwpParams::default().with_max_depth(max_depth).with_rkz(1e-5);
        let inputs = setup_inputs(&params, 241);

        group.bench_with_input(
            BenchmarkId::new("30_days", format!("{max_depth}m")),
            &inputs,
            |b, inputs| {
                b.iter(|| {
                    let mut sim = Simulation::new(params.clone(), inputs.clone()).unwrap();
                    sim.run().unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_step, bench_full_run);
criterion_main!(benches);

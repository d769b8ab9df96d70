//! Benchmarks for the mixing kernels.
//!
//! Run with: `cargo bench --bench mixing_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pwp_rs::mixing::{diffuse_column, gradient_mix, remove_static_instability};
use pwp_rs::{ColumnState, EquationOfState};

/// Linearly stratified column with a sheared surface layer.
fn sheared_column(eos: &EquationOfState, n: usize) -> ColumnState {
    let temperature = (0..n).map(|i| 10.0 - 0.02 * i as f64).collect();
    let u = (0..n).map(|i| if i < n / 4 { 0.3 } else { 0.0 }).collect();
    ColumnState::new(temperature, vec![34.0; n], u, vec![0.0; n], eos).unwrap()
}

/// Column with cold, dense surface water over a stratified interior.
fn overturning_column(eos: &EquationOfState, n: usize) -> ColumnState {
    let temperature = (0..n)
        .map(|i| if i == 0 { -1.0 } else { 8.0 - 0.05 * i as f64 })
        .collect();
    ColumnState::at_rest(temperature, vec![34.0; n], eos).unwrap()
}

fn bench_gradient_mix(c: &mut Criterion) {
    let eos = EquationOfState::new();
    let mut group = c.benchmark_group("gradient_mix");

    for n in [50, 100, 200] {
        let column = sheared_column(&eos, n);
        group.bench_with_input(BenchmarkId::new("shear_layer", n), &column, |b, column| {
            b.iter(|| {
                let mut col = column.clone();
                gradient_mix(black_box(&mut col), 9.81, 1.0, 0.25, &eos, 1_000_000).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_static_instability(c: &mut Criterion) {
    let eos = EquationOfState::new();
    let mut group = c.benchmark_group("static_instability");

    for n in [50, 100, 200] {
        let column = overturning_column(&eos, n);
        group.bench_with_input(BenchmarkId::new("surface_cooling", n), &column, |b, column| {
            b.iter(|| {
                let mut col = column.clone();
                remove_static_instability(black_box(&mut col), &eos, n + 1).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_diffusion(c: &mut Criterion) {
    let eos = EquationOfState::new();
    let column = sheared_column(&eos, 200);

    c.bench_function("diffuse_column_200", |b| {
        b.iter(|| {
            let mut col = column.clone();
            diffuse_column(black_box(&mut col), 0.1, &eos);
            col
        });
    });
}

criterion_group!(benches, bench_gradient_mix, bench_static_instability, bench_diffusion);
criterion_main!(benches);

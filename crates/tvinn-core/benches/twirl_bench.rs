//! Benchmarks for twirl combination handling
//!
//! Run with: cargo bench -p tvinn-core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tvinn_core::{Combinations, ConjugationLayers, GroupTable};

/// Benchmark group table construction (includes inverse derivation and
/// the round-trip verification pass)
fn bench_table_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_construction");

    group.bench_function("pauli", |b| {
        b.iter(GroupTable::pauli);
    });

    group.bench_function("clifford", |b| {
        b.iter(GroupTable::clifford);
    });

    group.finish();
}

/// Benchmark exhaustive combination enumeration
fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumeration");
    let clifford = GroupTable::clifford();
    let pauli = GroupTable::pauli();

    for num_qubits in &[1, 2, 3] {
        group.bench_with_input(
            BenchmarkId::new("clifford", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| Combinations::new(black_box(&clifford), black_box(n)).count());
            },
        );
    }

    for num_qubits in &[2, 4, 6] {
        group.bench_with_input(BenchmarkId::new("pauli", num_qubits), num_qubits, |b, &n| {
            b.iter(|| Combinations::new(black_box(&pauli), black_box(n)).count());
        });
    }

    group.finish();
}

/// Benchmark layer construction for every combination of a small register
fn bench_layer_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_build");
    let clifford = GroupTable::clifford();

    group.bench_function("clifford_2q_all", |b| {
        b.iter(|| {
            for combination in Combinations::new(&clifford, 2) {
                black_box(ConjugationLayers::build(&clifford, &combination).unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_table_construction,
    bench_enumeration,
    bench_layer_build
);
criterion_main!(benches);

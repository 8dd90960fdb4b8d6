//! Criterion benchmarks for the multiplication algorithms.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use matcalc_core::generator::populate;
use matcalc_core::{Algorithm, Matrix, Multiplier};

fn operands(n: usize) -> (Matrix, Matrix) {
    let mut rng = StdRng::seed_from_u64(n as u64);
    (
        populate(n, -9, 9, &mut rng).unwrap(),
        populate(n, -9, 9, &mut rng).unwrap(),
    )
}

fn bench_algorithms(c: &mut Criterion) {
    let ns: Vec<usize> = vec![16, 32, 64, 128];

    for algo in Algorithm::ALL {
        let mult = algo.multiplier();
        let mut group = c.benchmark_group(mult.name().to_string());
        for &n in &ns {
            let (a, b) = operands(n);
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bench, _| {
                bench.iter(|| mult.multiply(&a, &b).unwrap());
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_algorithms);
criterion_main!(benches);

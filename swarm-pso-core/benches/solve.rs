use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use swarm_pso_core::benchmarks::Benchmark;
use swarm_pso_core::{OptimizerConfig, ParticleSwarmOptimizer};

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(20);

    for benchmark in [Benchmark::Sphere, Benchmark::Rastrigin] {
        for dim in [2usize, 10] {
            group.bench_with_input(
                BenchmarkId::new(benchmark.name(), dim),
                &dim,
                |b, &dim| {
                    b.iter(|| {
                        let mut pso = ParticleSwarmOptimizer::with_rng(
                            benchmark.function(),
                            StdRng::seed_from_u64(0),
                        )
                        .with_search_space(benchmark.search_space(dim).unwrap())
                        .with_config(OptimizerConfig::new().with_iterations(200));
                        black_box(pso.solve().unwrap())
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);

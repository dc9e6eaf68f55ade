//! Criterion benchmarks for the string-matching GA.
//!
//! Measures the evolution step at several population sizes and the raw
//! cost of fitness scoring.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hello_ga::ga::{fitness, GaRunner, Population, PopulationConfig, RunConfig, Target};
use hello_ga::random::create_rng;

fn bench_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("evolve");
    let target = Target::new("Hello, world!").unwrap();

    for size in [128usize, 512, 2048] {
        group.bench_with_input(BenchmarkId::new("population", size), &size, |b, &size| {
            let config = PopulationConfig::default().with_population_size(size);
            let mut rng = create_rng(42);
            let mut pop = Population::new(target.clone(), config, &mut rng).unwrap();
            b.iter(|| {
                pop.evolve(&mut rng);
                black_box(pop.best().fitness())
            });
        });
    }

    group.finish();
}

fn bench_fitness(c: &mut Criterion) {
    let gene = vec![b'a'; 1024];
    let target = vec![b'z'; 1024];
    c.bench_function("fitness_1024", |b| {
        b.iter(|| fitness(black_box(&gene), black_box(&target)).unwrap())
    });
}

fn bench_full_run(c: &mut Criterion) {
    let target = Target::new("Hello, world!").unwrap();
    let config = RunConfig::default()
        .with_population(PopulationConfig::default().with_population_size(512))
        .with_seed(42);

    let mut group = c.benchmark_group("run");
    group.sample_size(10);
    group.bench_function("hello_world_512", |b| {
        b.iter(|| GaRunner::run(&target, &config).unwrap().generations)
    });
    group.finish();
}

criterion_group!(benches, bench_evolve, bench_fitness, bench_full_run);
criterion_main!(benches);

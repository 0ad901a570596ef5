//! Criterion benchmarks for the evolutionary matcher.
//!
//! Measures the scoring hot path at several target sizes, and a short
//! end-to-end search on a synthetic host/target pair.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evomatch::graph::generate::random_graph;
use evomatch::search::{scorer, Candidate, SearchConfig, SearchRunner, SerialEvaluator};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");

    for &(k, degree) in &[(5usize, 2usize), (10, 4), (20, 8)] {
        let mut rng = StdRng::seed_from_u64(11);
        let host = random_graph(200, 10, &mut rng);
        let target = random_graph(k, degree, &mut rng);
        let candidate = Candidate::random(200, k, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, _| {
            b.iter(|| {
                black_box(scorer::score(
                    black_box(&candidate),
                    black_box(&host),
                    black_box(&target),
                ))
            })
        });
    }

    group.finish();
}

fn bench_short_search(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(23);
    let host = random_graph(100, 8, &mut rng);
    let target = random_graph(8, 3, &mut rng);

    let config = SearchConfig::default()
        .with_population_size(30)
        .with_children_count(6)
        .with_child_tries(5)
        .with_generation_count(10)
        .with_seed(42);

    c.bench_function("run_search_10_generations", |b| {
        b.iter(|| {
            black_box(SearchRunner::run_with_evaluator(
                black_box(&host),
                black_box(&target),
                &config,
                &SerialEvaluator,
            ))
        })
    });
}

criterion_group!(benches, bench_score, bench_short_search);
criterion_main!(benches);

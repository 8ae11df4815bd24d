// Performance benchmarks for catalog filtering and recommendation lookup
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use std::sync::Arc;

use brewrec_core::{
    BeerRecord, Catalog, FilterCondition, FilterPredicate, Recommender, SelfPolicy,
    SimilarityMatrix,
};

const STATES: &[&str] = &["VIC", "NSW", "QLD", "WA", "SA", "TAS"];
const STYLES: &[&str] = &["NEIPA", "Sour", "Pale Ale", "Stout", "Lager", "Pilsner"];

fn generate_catalog(size: usize) -> Arc<Catalog> {
    let mut rng = rand::rng();
    let records = (0..size)
        .map(|i| {
            BeerRecord::new(i as u32, format!("Beer {i}"))
                .with_section(format!("{}", i % 6 + 1))
                .with_state(STATES[rng.random_range(0..STATES.len())])
                .with_style(STYLES[rng.random_range(0..STYLES.len())])
                .with_abv(rng.random_range(0.5f32..13.0))
        })
        .collect();
    Arc::new(Catalog::load(records).unwrap())
}

fn generate_matrix(size: usize) -> Arc<SimilarityMatrix> {
    let mut rng = rand::rng();
    let ids = (0..size as u32).collect();
    let rows = (0..size)
        .map(|i| {
            (0..size)
                .map(|j| if i == j { 1.0 } else { rng.random_range(0.0f32..1.0) })
                .collect()
        })
        .collect();
    Arc::new(SimilarityMatrix::new(ids, rows).unwrap())
}

fn benchmark_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100, 1000, 10000].iter() {
        let catalog = generate_catalog(*size);
        let predicate = FilterPredicate::new()
            .with(FilterCondition::StateIn(vec!["VIC".to_string()]))
            .with(FilterCondition::AbvBetween { min: 4.0, max: 8.0 });

        group.bench_with_input(BenchmarkId::new("brewrec", size), size, |b, _| {
            b.iter(|| {
                let matches = catalog.filter(black_box(&predicate));
                black_box(matches);
            });
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [100, 500, 1000].iter() {
        let catalog = generate_catalog(*size);
        let matrix = generate_matrix(*size);
        let recommender = Recommender::new(catalog, matrix, SelfPolicy::Exclude).unwrap();

        group.bench_with_input(BenchmarkId::new("brewrec", size), size, |b, _| {
            b.iter(|| {
                let recs = recommender.recommend(black_box(0), 5).unwrap();
                black_box(recs);
            });
        });
    }

    group.finish();
}

fn benchmark_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    let catalog = generate_catalog(1000);
    let matrix = generate_matrix(1000);
    let recommender = Recommender::new(catalog, matrix, SelfPolicy::Exclude).unwrap();
    // Narrows to exactly one beer, so the recommend path runs too
    let predicate = FilterPredicate::new().with(FilterCondition::NumberIn(vec![42]));

    group.bench_function("single_selection", |b| {
        b.iter(|| {
            let eval = recommender.evaluate(black_box(&predicate), 5).unwrap();
            black_box(eval);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_filter,
    benchmark_recommend,
    benchmark_evaluate
);
criterion_main!(benches);

// ABOUTME: Criterion benchmarks for the concept proposal engine
// ABOUTME: Compares sequential and rayon scoring over synthetic catalogs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sport Planner Contributors

//! Criterion benchmarks for proposal generation.
//!
//! Measures the full pipeline (filter, window, score, classify, group)
//! for growing catalog sizes with parallel scoring on and off.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sport_planner::intelligence::{ProposalEngine, ProposalEngineConfig, ProposalInput};
use sport_planner::models::{
    CategoryNode, Concept, ProposalRequest, TeamCategory, TeamLevel, TeamProficiency,
};

const CATALOG_SIZES: [usize; 3] = [100, 1_000, 10_000];

/// Three-level category tree with a handful of roots
fn generate_categories() -> Vec<CategoryNode> {
    let mut categories = Vec::new();
    for root in 0..4_i64 {
        let root_id = root * 100 + 1;
        categories.push(CategoryNode::root(root_id, format!("Seccion {root}")));
        for child in 0..5_i64 {
            let child_id = root_id + child + 1;
            categories.push(CategoryNode::child(
                child_id,
                format!("Bloque {root}.{child}"),
                root_id,
            ));
            categories.push(CategoryNode::child(
                child_id + 50,
                format!("Detalle {root}.{child}"),
                child_id,
            ));
        }
    }
    categories
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_concepts(count: usize, categories: &[CategoryNode]) -> Vec<Concept> {
    (0..count)
        .map(|index| {
            let category = &categories[index % categories.len()];
            let concept = Concept::new(
                index as i64 + 1,
                format!("Concepto {index}"),
                (index % 10) as i32 + 1,
                (index * 7 % 11) as i32,
            )
            .with_category(category.id);
            match index % 7 {
                0 => concept,
                stage => concept.with_development_level(stage as i32),
            }
        })
        .collect()
}

fn bench_team() -> TeamProficiency {
    TeamProficiency::new(5, 4)
        .with_category(TeamCategory::with_ages(1, "Alevín", 11, 12))
        .with_team_level(TeamLevel {
            id: 1,
            name: "A".to_owned(),
            rank: 1,
        })
}

fn engine(parallel: bool) -> ProposalEngine {
    let mut config = ProposalEngineConfig::default();
    config.execution.parallel_scoring = parallel;
    config.execution.parallel_min_batch = 0;
    ProposalEngine::with_config(config)
}

fn bench_generate(c: &mut Criterion) {
    let categories = generate_categories();
    let team = bench_team();
    let request = ProposalRequest::new(1, 2025);
    let sequential = engine(false);
    let parallel = engine(true);

    let mut group = c.benchmark_group("proposal_generate");
    for size in CATALOG_SIZES {
        let concepts = generate_concepts(size, &categories);
        let input = ProposalInput {
            team: &team,
            concepts: &concepts,
            categories: &categories,
            template: None,
            request: &request,
        };
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &input, |b, input| {
            b.iter(|| black_box(sequential.generate(black_box(input))));
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &input, |b, input| {
            b.iter(|| black_box(parallel.generate(black_box(input))));
        });
    }
    group.finish();
}

fn bench_level_window(c: &mut Criterion) {
    let team = bench_team();
    let engine = engine(false);

    c.bench_function("level_window", |b| {
        b.iter(|| black_box(engine.level_window(black_box(&team), None, black_box(1))));
    });
}

criterion_group!(benches, bench_generate, bench_level_window);
criterion_main!(benches);

// SPDX-License-Identifier: MIT OR Apache-2.0
// Benchmarks: missing_docs - criterion_group! macro generates undocumentable code
#![allow(missing_docs)]
// Benchmarks: clippy lints relaxed for benchmark code (not production)
#![allow(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Benchmarks for tree search, cloning, and key rewriting.
//!
//! Compares arbor operations against:
//! - Manual recursive search over serde_json::Value
//! - serde_json::Value::clone

use arbor::prelude::*;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::{Value, json};
use std::hint::black_box;

// =============================================================================
// Test Data Generation
// =============================================================================

/// Generate a document for a named scenario
fn generate_document(scenario: &str) -> Value {
    match scenario {
        "flat_small" => json!({"name": "Alice", "age": 30, "active": true, "id": 7}),

        "users_medium" => json!({
            "users": (0..100).map(|i| json!({
                "id": i,
                "name": format!("User{}", i),
                "email": format!("user{}@example.com", i),
                "active": i % 2 == 0
            })).collect::<Vec<_>>()
        }),

        "users_large" => json!({
            "users": (0..1000).map(|i| json!({
                "id": i,
                "name": format!("User{}", i),
                "profile": {"tags": ["a", "b"], "score": i % 17}
            })).collect::<Vec<_>>()
        }),

        "deep_chain" => {
            let mut doc = json!({"id": "bottom"});
            for i in 0..64 {
                doc = json!({"level": i, "child": doc});
            }
            doc
        }

        _ => json!({}),
    }
}

const SCENARIOS: [&str; 4] = ["flat_small", "users_medium", "users_large", "deep_chain"];

/// Baseline: recursive search for a scalar in serde_json::Value
fn serde_contains(value: &Value, needle: &Value) -> bool {
    if value == needle {
        return true;
    }
    match value {
        Value::Array(items) => items.iter().any(|v| serde_contains(v, needle)),
        Value::Object(map) => map.values().any(|v| serde_contains(v, needle)),
        _ => false,
    }
}

// =============================================================================
// Search Benchmarks
// =============================================================================

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");

    for scenario in SCENARIOS {
        let doc = generate_document(scenario);
        let size = serde_json::to_string(&doc).unwrap().len();
        let tree = Tree::from(doc.clone());
        let missing = Tree::from("no such value");
        let missing_json = json!("no such value");

        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("arbor_miss", scenario), &tree, |b, tree| {
            b.iter(|| locate(black_box(tree), black_box(&missing), None))
        });

        group.bench_with_input(BenchmarkId::new("serde_miss", scenario), &doc, |b, doc| {
            b.iter(|| serde_contains(black_box(doc), black_box(&missing_json)))
        });

        group.bench_with_input(BenchmarkId::new("arbor_all_key", scenario), &tree, |b, tree| {
            b.iter(|| locate_all_key(black_box(tree), "id", None))
        });
    }

    group.finish();
}

fn bench_shape_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_match");

    for scenario in ["users_medium", "users_large"] {
        let tree = Tree::from(generate_document(scenario));
        let identity = Tree::from(json!({"name": "User99"}));

        group.bench_with_input(BenchmarkId::new("deep_filter", scenario), &tree, |b, tree| {
            b.iter(|| deep_filter(black_box(tree), black_box(&identity), None).len())
        });

        group.bench_with_input(BenchmarkId::new("depth_2", scenario), &tree, |b, tree| {
            b.iter(|| exists(black_box(tree), black_box(&identity), Some(2)))
        });
    }

    group.finish();
}

// =============================================================================
// Copy Benchmarks
// =============================================================================

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");

    for scenario in SCENARIOS {
        let doc = generate_document(scenario);
        let tree = Tree::from(doc.clone());

        group.bench_with_input(BenchmarkId::new("deep_clone", scenario), &tree, |b, tree| {
            b.iter(|| deep_clone(black_box(tree)))
        });

        group.bench_with_input(BenchmarkId::new("derive_clone", scenario), &tree, |b, tree| {
            b.iter(|| black_box(tree).clone())
        });

        group.bench_with_input(BenchmarkId::new("serde_clone", scenario), &doc, |b, doc| {
            b.iter(|| black_box(doc).clone())
        });

        let window = CloneOptions::new().start_depth(2).max_depth(3);
        group.bench_with_input(BenchmarkId::new("windowed", scenario), &tree, |b, tree| {
            b.iter(|| deep_clone_with(black_box(tree), &window))
        });
    }

    group.finish();
}

fn bench_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrite");

    for scenario in ["users_medium", "users_large"] {
        let tree = Tree::from(generate_document(scenario));

        group.bench_with_input(BenchmarkId::new("rename_keys", scenario), &tree, |b, tree| {
            b.iter(|| rename_keys(black_box(tree), "name", "label", None))
        });

        group.bench_with_input(
            BenchmarkId::new("deep_remove_all_key", scenario),
            &tree,
            |b, tree| b.iter(|| deep_remove_all_key(black_box(tree), "id", None)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_locate,
    bench_shape_match,
    bench_clone,
    bench_rewrite
);
criterion_main!(benches);

//! Criterion benchmarks for spamscore.
//!
//! Covers tokenization, bulk training and query scoring.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use spamscore::analysis::tokenizer::{SpaceTokenizer, Tokenizer};
use spamscore::classifier::{SampleSet, Trainer, TrainingPolicy};
use std::hint::black_box;

/// Generate labeled messages for benchmarking.
fn generate_samples(count: usize) -> SampleSet {
    let good_words = [
        "hey", "how", "are", "you", "lunch", "today", "see", "later", "call", "me", "home",
        "dinner", "ok", "thanks", "meeting", "tomorrow",
    ];
    let bad_words = [
        "free", "money", "win", "prize", "click", "here", "now", "claim", "cash", "urgent",
        "txt", "stop", "offer", "guaranteed", "reply", "award",
    ];

    let mut samples = SampleSet::new();
    for i in 0..count {
        let is_good = i % 3 != 0;
        let words = if is_good { &good_words } else { &bad_words };
        let length = 5 + (i % 20);
        let message: Vec<&str> = (0..length)
            .map(|j| words[(i * 7 + j * 13) % words.len()]) // Pseudo-random distribution
            .collect();
        samples.insert(format!("{} {}", message.join(" "), i), is_good);
    }
    samples
}

/// Benchmark message tokenization.
fn bench_tokenization(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenization");
    let tokenizer = SpaceTokenizer::new();
    let text =
        "Hi babe its Princess Twilight, how r u? Im home from abroad and lonely, text me back";

    group.bench_function("space_tokenize", |b| {
        b.iter(|| black_box(tokenizer.terms(black_box(text))))
    });

    group.finish();
}

/// Benchmark bulk training.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    let samples = generate_samples(5000);

    group.throughput(Throughput::Elements(samples.len() as u64));
    for policy in [TrainingPolicy::Symmetric, TrainingPolicy::LegacyGoodReinforcement] {
        let trainer = Trainer::new(policy);
        group.bench_function(policy.name(), |b| {
            b.iter(|| black_box(trainer.train(black_box(&samples))))
        });
    }

    group.finish();
}

/// Benchmark scoring against a trained classifier.
fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("scoring");
    let (classifier, _) = Trainer::default().train(&generate_samples(5000));
    let tokenizer = SpaceTokenizer::new();
    let queries: Vec<Vec<String>> = [
        "hey how are you doing today",
        "claim your free cash prize now",
        "xyzzy plugh never seen tokens",
    ]
    .iter()
    .map(|q| tokenizer.terms(q))
    .collect();

    group.throughput(Throughput::Elements(queries.len() as u64));
    group.bench_function("score_queries", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(classifier.scores(black_box(query)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tokenization, bench_training, bench_scoring);

criterion_main!(benches);

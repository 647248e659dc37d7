//! Fusion hot-path benchmark
//!
//! The engine is invoked synchronously from request handlers, so a single
//! update must stay trivially cheap. This measures the full ambient and
//! voice paths including validation, scoring and history recording.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use vitalfuse_core::{RiskInput, SensorReading, WellnessEngine};

fn bench_ambient_update(c: &mut Criterion) {
    let mut engine = WellnessEngine::new();
    let mut timestamp = 0u64;

    c.bench_function("ambient_update", |b| {
        b.iter(|| {
            timestamp += 1000;
            engine
                .process_ambient(black_box(SensorReading::new(23.7, 48.2)), timestamp)
                .unwrap()
        })
    });
}

fn bench_voice_update(c: &mut Criterion) {
    let mut engine = WellnessEngine::new();
    let mut timestamp = 0u64;

    c.bench_function("voice_update", |b| {
        b.iter(|| {
            timestamp += 1000;
            engine
                .process_voice(black_box(RiskInput::ClassifierProbability(0.35)), timestamp)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_ambient_update, bench_voice_update);
criterion_main!(benches);

//! Shared engine example
//!
//! One engine, two concurrent producers: a telemetry thread posting
//! ambient readings and a voice thread posting classifier results, the
//! way separate request handlers would. The shared handle serializes
//! every update.
//!
//! Run with: cargo run --example 03_shared_engine

use std::thread;

use vitalfuse_core::time::{SystemTime, TimeSource};
use vitalfuse_core::{RiskInput, SensorReading, SharedEngine, WellnessEngine};

fn main() {
    let shared = SharedEngine::new(WellnessEngine::new());

    let telemetry = {
        let handle = shared.clone();
        thread::spawn(move || {
            let clock = SystemTime;
            for _ in 0..30 {
                handle
                    .process_ambient(SensorReading::new(26.5, 58.0), clock.now())
                    .expect("finite readings are always accepted");
            }
        })
    };

    let voice = {
        let handle = shared.clone();
        thread::spawn(move || {
            let clock = SystemTime;
            for _ in 0..10 {
                handle
                    .process_voice(RiskInput::ClassifierProbability(0.3), clock.now())
                    .expect("probability is within [0, 1]");
            }
        })
    };

    telemetry.join().expect("telemetry thread panicked");
    voice.join().expect("voice thread panicked");

    println!("wellness after both producers: {:.1}", shared.wellness_index());
    println!("last snapshots:");
    for record in shared.history().iter().rev().take(5) {
        println!(
            "  t={:>5} source={:?} wellness={:.1}",
            record.timestamp, record.source, record.wellness
        );
    }
}

//! Voice-analysis fusion example
//!
//! Shows the full voice path: classifier probability in, normalized risk
//! score, fused wellness index and advisory tier out. The classifier
//! itself is external; here a short scripted session stands in for it.
//!
//! Run with: cargo run --example 02_voice_fusion

use vitalfuse_core::{RiskInput, SensorReading, WellnessEngine};

fn main() {
    let mut engine = WellnessEngine::new();

    // Settle the ambient side first so the reports carry real context
    for step in 0u64..5 {
        engine
            .process_ambient(SensorReading::new(23.0, 52.0), step * 1000)
            .expect("finite readings are always accepted");
    }

    // A session that drifts from calm to stressed
    let session: [(u64, f32); 5] = [
        (10_000, 0.10),
        (20_000, 0.25),
        (30_000, 0.55),
        (40_000, 0.80),
        (50_000, 0.95),
    ];

    for (timestamp, probability) in session {
        let report = engine
            .process_voice(RiskInput::ClassifierProbability(probability), timestamp)
            .expect("probability is within [0, 1]");

        println!(
            "p(stress)={:.2} -> risk={:>5.1} wellness={:>5.1} tier={:?}",
            probability, report.risk_score, report.wellness_index, report.advisory,
        );
        println!("  advice: {}", report.advisory.advisory());
    }
}

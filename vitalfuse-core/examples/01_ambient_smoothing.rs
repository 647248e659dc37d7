//! Basic ambient smoothing example
//!
//! Feeds a noisy stream of temperature/humidity readings through the
//! engine and prints how the smoothed estimates and the wellness index
//! settle.
//!
//! Run with: cargo run --example 01_ambient_smoothing

use vitalfuse_core::time::{FixedTime, TimeSource};
use vitalfuse_core::{SensorReading, WellnessEngine};

fn main() {
    let mut engine = WellnessEngine::new();
    let mut clock = FixedTime::new(0);

    // A warm, slightly humid room with sensor jitter. Real readings would
    // come from the telemetry endpoint; the deterministic wobble below
    // stands in for DHT22 noise.
    println!("{:>6} {:>10} {:>10} {:>9} {:>9}", "t", "raw temp", "raw hum", "smoothed", "wellness");

    for step in 0u64..20 {
        clock.advance(2000);
        let wobble = if step % 2 == 0 { 0.4 } else { -0.4 };
        let reading = SensorReading::new(27.0 + wobble, 62.0 - wobble * 2.0);

        let report = engine
            .process_ambient(reading, clock.now())
            .expect("finite readings are always accepted");

        println!(
            "{:>6} {:>10.2} {:>10.2} {:>9.2} {:>9.2}",
            clock.now(),
            reading.temperature,
            reading.humidity,
            report.smoothed_temperature,
            report.wellness_index,
        );
    }

    println!();
    println!(
        "final smoothed state: {:.2} degC / {:.2} %RH, wellness {:.1}",
        engine.smoothed_temperature(),
        engine.smoothed_humidity(),
        engine.wellness_index(),
    );
}

//! Wellness fusion engine for VitalFuse
//!
//! Estimates a person's real-time wellness index by fusing two noisy
//! signals: a volatile voice-stress risk score and a stable ambient-comfort
//! estimate, through a cascade of scalar Kalman filters.
//!
//! Key constraints:
//! - No I/O, no blocking: invoked synchronously from request handlers
//! - All persistent state owned by one engine object, mutated through a
//!   single serialized access path
//! - Bounded outputs: the wellness index never leaves [0, 100]
//!
//! ```rust
//! use vitalfuse_core::{RiskInput, SensorReading, WellnessEngine};
//!
//! let mut engine = WellnessEngine::new();
//!
//! // New ambient telemetry arrived
//! let ambient = engine.process_ambient(SensorReading::new(23.5, 48.0), 1000).unwrap();
//! assert!(ambient.wellness_index >= 0.0 && ambient.wellness_index <= 100.0);
//!
//! // A voice clip was classified upstream
//! let voice = engine.process_voice(RiskInput::ClassifierProbability(0.2), 2000).unwrap();
//! assert_eq!(voice.risk_score, 80.0); // inverted: 100 = calm
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod advisory;
pub mod buffer;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod fusion;
pub mod scoring;
pub mod time;
pub mod traits;

// Public API
pub use advisory::{classify, AdvisoryTier};
pub use engine::{
    AmbientReport, EngineConfig, RiskInput, VoiceReport, WellnessEngine, WellnessRecord,
};
pub use errors::{ConfigError, ConfigResult, FusionError, FusionResult};
pub use fusion::{
    ambient::{AmbientEstimator, SensorReading},
    scalar::{FilterParams, ScalarFilter},
    wellness::{MeasurementSource, WellnessFilter},
};
pub use scoring::{comfort::ComfortModel, risk::normalize_risk};
pub use traits::Validatable;

#[cfg(feature = "std")]
pub use engine::SharedEngine;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}

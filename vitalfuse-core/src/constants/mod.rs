//! Constants for VitalFuse Core
//!
//! Centralized, documented constants used throughout the fusion engine.
//! All tuning values live here - logic code must not contain magic numbers.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Filter**: Kalman noise parameters and initial filter states
//! - **Comfort**: The ambient comfort heuristic's ideal point and penalties
//! - **Advisory**: Severity tier thresholds

/// Kalman noise parameters and initial filter states.
pub mod filter;

/// Ideal comfort point, dead-zones and penalty slopes.
pub mod comfort;

/// Advisory tier thresholds.
pub mod advisory;

/// Lower bound of every 0-100 score scale (risk, comfort, wellness).
pub const SCORE_MIN: f32 = 0.0;

/// Upper bound of every 0-100 score scale (risk, comfort, wellness).
///
/// 100 always means the best state: calm voice, ideal ambient conditions,
/// full wellness. The inverted-risk polarity is load-bearing across the
/// whole engine.
pub const SCORE_MAX: f32 = 100.0;

// Re-export commonly used constants for convenience
pub use filter::{
    AMBIENT_PROCESS_NOISE, WELLNESS_PROCESS_NOISE,
    TEMPERATURE_MEASUREMENT_NOISE, HUMIDITY_MEASUREMENT_NOISE,
    VSD_MEASUREMENT_NOISE, COMFORT_MEASUREMENT_NOISE, IDLE_MEASUREMENT_NOISE,
    INITIAL_TEMPERATURE, INITIAL_HUMIDITY, INITIAL_WELLNESS, INITIAL_COVARIANCE,
};

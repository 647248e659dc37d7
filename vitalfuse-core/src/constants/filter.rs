//! Kalman Filter Parameters
//!
//! Noise parameters and initial states for the three scalar filters
//! (temperature, humidity, wellness). The relative sizes of the measurement
//! noises encode the engine's core trust model: ambient telemetry is stable,
//! voice-derived risk is volatile.

// ===== PROCESS NOISE =====

/// Process noise (Q) for the ambient temperature/humidity filters.
///
/// Indoor conditions drift slowly between samples, so the model is
/// trusted far more than any single reading.
///
/// Source: DHT22 smoothing tuned against recorded room telemetry
pub const AMBIENT_PROCESS_NOISE: f32 = 0.01;

/// Process noise (Q) for the wellness filter.
///
/// Wellness is modeled as a slowly drifting state; a small Q keeps the
/// fused index stable against single noisy measurements.
pub const WELLNESS_PROCESS_NOISE: f32 = 0.01;

// ===== MEASUREMENT NOISE =====

/// Measurement noise (R) for raw temperature readings.
///
/// Source: DHT22 accuracy specification (±0.5°C)
pub const TEMPERATURE_MEASUREMENT_NOISE: f32 = 0.5;

/// Measurement noise (R) for raw humidity readings.
///
/// Capacitive humidity sensing is noisier than temperature sensing,
/// so humidity readings are trusted less.
///
/// Source: DHT22 accuracy specification (±2-5% RH)
pub const HUMIDITY_MEASUREMENT_NOISE: f32 = 1.0;

/// Measurement noise (R) when fusing a voice-stress risk score.
///
/// A single short clip is a volatile sample of the speaker's state;
/// the large R makes each voice measurement nudge rather than drag
/// the wellness index.
pub const VSD_MEASUREMENT_NOISE: f32 = 10.0;

/// Measurement noise (R) when fusing an ambient comfort score.
///
/// The comfort heuristic runs over already-smoothed telemetry, so it is
/// treated as the trustworthy, stable signal.
pub const COMFORT_MEASUREMENT_NOISE: f32 = 2.0;

/// Measurement noise (R) for the idle / no-new-data update.
///
/// The current estimate is fed back as its own measurement with maximal
/// uncertainty, producing a near no-op that still lets covariance
/// breathe by a small bounded amount.
pub const IDLE_MEASUREMENT_NOISE: f32 = 50.0;

// ===== INITIAL STATES =====

/// Initial temperature estimate (°C) before any reading arrives.
///
/// Source: typical indoor temperature
pub const INITIAL_TEMPERATURE: f32 = 25.0;

/// Initial humidity estimate (% RH) before any reading arrives.
///
/// Source: typical indoor relative humidity
pub const INITIAL_HUMIDITY: f32 = 50.0;

/// Initial wellness index before any fusion call.
///
/// Starts mildly optimistic; the first few measurements pull it toward
/// the observed state quickly while covariance is still high.
pub const INITIAL_WELLNESS: f32 = 80.0;

/// Initial error covariance (P) for all three filters.
pub const INITIAL_COVARIANCE: f32 = 1.0;

// ===== HISTORY =====

/// Number of wellness snapshots retained in the engine's sliding window.
pub const HISTORY_DEPTH: usize = 64;

//! Error Types for Fusion and Configuration Failures
//!
//! ## Design Philosophy
//!
//! VitalFuse's error system follows a few hard rules:
//!
//! 1. **Small Size**: Each variant carries only the scalars needed to act on
//!    the failure. Errors are returned on the request hot path and must be
//!    cheap to construct and move.
//!
//! 2. **No Heap Allocation**: All error data is inline - no String, so the
//!    types work identically with and without `std`.
//!
//! 3. **Copy Semantics**: Errors implement Copy for efficient return from
//!    functions without move semantics complications.
//!
//! 4. **Two Lifetimes of Failure**: Per-call validation failures
//!    ([`FusionError`]) are recoverable by the caller and never touch filter
//!    state. Construction failures ([`ConfigError`]) are fatal: a filter with
//!    a non-positive measurement noise would divide by zero inside the gain
//!    computation, so the engine refuses to exist rather than start degraded.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use vitalfuse_core::{FusionError, SensorReading, WellnessEngine};
//!
//! fn handle_reading(engine: &mut WellnessEngine, reading: SensorReading) {
//!     match engine.process_ambient(reading, 1000) {
//!         Ok(report) => {
//!             // Valid reading - forward the fused index downstream
//!             let _ = report.wellness_index;
//!         }
//!         Err(FusionError::InvalidReading { .. }) => {
//!             // Sensor produced NaN/Inf - filter state is untouched,
//!             // drop the sample and flag the sensor
//!         }
//!         Err(FusionError::OutOfRange { .. }) => {
//!             // Upstream handed us a probability outside [0, 1]
//!         }
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for per-call fusion operations
pub type FusionResult<T> = Result<T, FusionError>;

/// Result type for engine and filter construction
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Per-call validation failures - filter state is never modified when one
/// of these is returned
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FusionError {
    /// Sensor scalar is NaN or infinite
    #[error("Reading {value} is not a finite number")]
    InvalidReading {
        /// The offending raw value (NaN or ±Inf)
        value: f32,
    },

    /// Input outside its documented domain
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The value that failed validation
        value: f32,
        /// Minimum acceptable value
        min: f32,
        /// Maximum acceptable value
        max: f32,
    },
}

/// Construction-time failures - fatal, the engine must not start
///
/// The scalar Kalman gain is `P / (P + R)`. With `R <= 0` the denominator
/// can reach zero and the gain bound no longer holds, so these are rejected
/// before any filter exists.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Measurement noise must be strictly positive
    #[error("Measurement noise must be > 0, got {value}")]
    NonPositiveMeasurementNoise {
        /// The rejected R value
        value: f32,
    },

    /// Process noise must be non-negative
    #[error("Process noise must be >= 0, got {value}")]
    NegativeProcessNoise {
        /// The rejected Q value
        value: f32,
    },
}

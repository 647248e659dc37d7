//! Scalar Kalman Fusion for Wellness Estimation
//!
//! ## Overview
//!
//! This module implements the state-estimation cascade at the center of
//! VitalFuse. Three discrete-time 1D Kalman filters cooperate:
//!
//! ```text
//! raw temperature ──→ ScalarFilter ──┐
//!                                    ├─→ ComfortModel ──┐
//! raw humidity ─────→ ScalarFilter ──┘                  ├─→ WellnessFilter ──→ wellness index
//!                                                       │
//! voice risk score ─────────────────────────────────────┘
//! ```
//!
//! ## Why a Kalman Filter?
//!
//! Both input signals are noisy in different ways:
//! - **Voice risk** is volatile: one short clip samples a momentary state
//! - **Ambient telemetry** jitters: consumer sensors wander reading to reading
//!
//! A recursive estimator weighs each new measurement against the current
//! estimate by their relative uncertainties, producing a stable index that
//! still responds to sustained change.
//!
//! ## The Scalar Recursion
//!
//! With identity transition and observation models (`F = H = 1`) the full
//! filter collapses to a handful of scalar operations per update:
//!
//! ```text
//! Covariance prediction:  P' = P + Q
//! Kalman gain:            K  = P' / (P' + R)
//! Innovation:             y  = z - x
//! State update:           x  = x + K·y
//! Covariance update:      P  = (1 - K)·P'
//! ```
//!
//! ## Numerical Invariants
//!
//! The recursion preserves two properties that the rest of the engine
//! relies on, enforced by construction-time validation of `Q` and `R`:
//! - `0 <= K <= 1` whenever `R > 0` and `P' >= 0`
//! - `P >= 0` after any number of updates
//!
//! The wellness filter additionally clamps its estimate to `[0, 100]`;
//! the ambient filters do not, because temperature and humidity are
//! unbounded physical quantities rather than defined indices.

pub mod scalar;
pub mod ambient;
pub mod wellness;

// Re-export main types
pub use scalar::{FilterParams, ScalarFilter};
pub use ambient::{AmbientEstimator, SensorReading};
pub use wellness::{MeasurementSource, WellnessFilter};

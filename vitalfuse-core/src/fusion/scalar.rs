//! Scalar Kalman Filter
//!
//! The single recursion shared by all three filters in the engine,
//! parameterized by process noise `Q` and measurement noise `R` with
//! identity transition and observation gains (`F = H = 1`).
//!
//! ## Design Rationale
//!
//! A full matrix Kalman filter is overkill for three independent scalar
//! quantities: every matrix in the 1x1 case degenerates to a float, and the
//! Joseph-form/symmetrization machinery needed for numerical stability in
//! higher dimensions becomes the single expression `(1 - K)·P'`, which is
//! non-negative by construction. Keeping the scalar case explicit makes the
//! invariants visible instead of burying them in matrix plumbing.
//!
//! ## Invariants
//!
//! For any `Q >= 0`, `R > 0` (enforced by [`FilterParams::new`]):
//! - predicted covariance `P' = P + Q >= 0`
//! - gain `K = P' / (P' + R)` lies in `[0, 1]`
//! - updated covariance `(1 - K)·P' >= 0`
//!
//! Violating these is only possible through a construction bug, never
//! through the recursion itself.

use crate::errors::{ConfigError, ConfigResult};

/// Noise parameters for one scalar filter, fixed at construction
///
/// `R > 0` is enforced here so the gain denominator `P' + R` can never be
/// zero downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    process_noise: f32,
    measurement_noise: f32,
}

impl FilterParams {
    /// Create a parameter set, rejecting `Q < 0` and `R <= 0`
    pub fn new(process_noise: f32, measurement_noise: f32) -> ConfigResult<Self> {
        if !(process_noise >= 0.0) {
            return Err(ConfigError::NegativeProcessNoise {
                value: process_noise,
            });
        }
        if !(measurement_noise > 0.0) {
            return Err(ConfigError::NonPositiveMeasurementNoise {
                value: measurement_noise,
            });
        }

        Ok(Self {
            process_noise,
            measurement_noise,
        })
    }

    /// Process noise (Q)
    pub fn process_noise(&self) -> f32 {
        self.process_noise
    }

    /// Measurement noise (R)
    pub fn measurement_noise(&self) -> f32 {
        self.measurement_noise
    }
}

/// One scalar Kalman filter: an estimate with its error covariance
///
/// Holds the persistent `(estimate, covariance)` pair for a single smoothed
/// quantity and advances it one measurement at a time.
#[derive(Debug, Clone)]
pub struct ScalarFilter {
    /// Current state estimate
    estimate: f32,
    /// Estimation error covariance (P)
    covariance: f32,
    /// Noise parameters, fixed at construction
    params: FilterParams,
}

impl ScalarFilter {
    /// Create a filter at the given initial state
    ///
    /// `initial_covariance` must be non-negative; the engine's config layer
    /// guarantees this for every filter it builds.
    pub fn new(params: FilterParams, initial_estimate: f32, initial_covariance: f32) -> Self {
        debug_assert!(initial_covariance >= 0.0);
        Self {
            estimate: initial_estimate,
            covariance: initial_covariance,
            params,
        }
    }

    /// Current state estimate
    pub fn estimate(&self) -> f32 {
        self.estimate
    }

    /// Current error covariance
    pub fn covariance(&self) -> f32 {
        self.covariance
    }

    /// Run one predict/update cycle with the configured measurement noise
    ///
    /// Returns the new estimate.
    pub fn update(&mut self, measurement: f32) -> f32 {
        self.update_with_noise(measurement, self.params.measurement_noise)
    }

    /// Run one predict/update cycle with a caller-selected measurement noise
    ///
    /// Used by the wellness filter, which picks `R` per call according to
    /// the measurement source. `noise` must come from a validated parameter
    /// set (strictly positive).
    pub fn update_with_noise(&mut self, measurement: f32, noise: f32) -> f32 {
        // Predict: state is static (F = 1), only covariance grows
        let predicted_covariance = self.covariance + self.params.process_noise;

        // Update
        let gain = predicted_covariance / (predicted_covariance + noise);
        let residual = measurement - self.estimate;

        self.estimate += gain * residual;
        self.covariance = (1.0 - gain) * predicted_covariance;

        self.estimate
    }

    /// Clamp the stored estimate into `[min, max]`
    ///
    /// Only the wellness filter uses this: its output is a defined bounded
    /// index, unlike the ambient physical quantities.
    pub(crate) fn clamp_estimate(&mut self, min: f32, max: f32) {
        self.estimate = self.estimate.clamp(min, max);
    }
}

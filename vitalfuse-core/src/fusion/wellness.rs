//! Wellness Fusion Filter
//!
//! The third Kalman filter in the cascade and the only component with
//! cross-call memory that outlives a single signal path. Each update fuses
//! exactly one measurement - a voice-stress risk score or an ambient
//! comfort score - into the persistent wellness index, selecting the
//! measurement noise by source.
//!
//! ## Source Selection
//!
//! | source  | measurement (Z)      | noise (R)            |
//! |---------|----------------------|----------------------|
//! | Vsd     | risk score           | 10.0 (volatile)      |
//! | Ambient | comfort score        | 2.0 (trustworthy)    |
//! | Idle    | current estimate     | 50.0 (max. unsure)   |
//!
//! The source tag is a closed enum dispatched by exhaustive match; there is
//! no fallback arm for an unrecognized source because one cannot be
//! constructed.
//!
//! ## Clamping
//!
//! After every update the stored estimate is clamped to `[0, 100]`.
//! Wellness is a defined bounded index, unlike the ambient filters'
//! physical quantities, which are deliberately left unclamped.

use crate::{
    constants::{
        filter::{
            COMFORT_MEASUREMENT_NOISE, IDLE_MEASUREMENT_NOISE, INITIAL_COVARIANCE,
            INITIAL_WELLNESS, VSD_MEASUREMENT_NOISE, WELLNESS_PROCESS_NOISE,
        },
        SCORE_MAX, SCORE_MIN,
    },
    errors::{ConfigError, ConfigResult},
    fusion::scalar::{FilterParams, ScalarFilter},
};

/// Which upstream signal feeds a wellness update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasurementSource {
    /// Voice-stress detection: fuse the risk score with high noise
    Vsd,
    /// Ambient telemetry: fuse the comfort score with low noise
    Ambient,
    /// No new data: feed the estimate back to itself with inflated noise
    Idle,
}

/// The persistent wellness estimator
///
/// Owns the single wellness `(estimate, covariance)` pair. All mutation of
/// the wellness index goes through [`WellnessFilter::fuse`].
#[derive(Debug, Clone)]
pub struct WellnessFilter {
    filter: ScalarFilter,
    vsd_noise: f32,
    comfort_noise: f32,
    idle_noise: f32,
}

impl WellnessFilter {
    /// Create a filter with custom noise parameters
    ///
    /// `process_noise` is shared across sources; each source's measurement
    /// noise is validated independently so a bad value is caught at
    /// construction, not at the first update that selects it.
    pub fn with_params(
        process_noise: f32,
        vsd_noise: f32,
        comfort_noise: f32,
        idle_noise: f32,
        initial_wellness: f32,
        initial_covariance: f32,
    ) -> ConfigResult<Self> {
        // Validate every candidate R up front; the scalar filter itself
        // only carries the Vsd pair, the others are swapped in per call.
        let vsd_params = FilterParams::new(process_noise, vsd_noise)?;
        FilterParams::new(process_noise, comfort_noise)?;
        FilterParams::new(process_noise, idle_noise)?;

        Ok(Self {
            filter: ScalarFilter::new(vsd_params, initial_wellness, initial_covariance),
            vsd_noise,
            comfort_noise,
            idle_noise,
        })
    }

    /// Fuse one measurement into the wellness index
    ///
    /// Selects `(Z, R)` by `source`, runs the scalar recursion, clamps the
    /// estimate to `[0, 100]` and returns it. Each arm reads only its own
    /// input: `Vsd` never touches `comfort_score`, `Ambient` never touches
    /// `risk_score`, `Idle` touches neither.
    pub fn fuse(&mut self, risk_score: f32, comfort_score: f32, source: MeasurementSource) -> f32 {
        let (measurement, noise) = match source {
            MeasurementSource::Vsd => (risk_score, self.vsd_noise),
            MeasurementSource::Ambient => (comfort_score, self.comfort_noise),
            MeasurementSource::Idle => (self.filter.estimate(), self.idle_noise),
        };

        self.filter.update_with_noise(measurement, noise);
        self.filter.clamp_estimate(SCORE_MIN, SCORE_MAX);
        self.filter.estimate()
    }

    /// Current wellness index
    pub fn wellness(&self) -> f32 {
        self.filter.estimate()
    }

    /// Current error covariance of the wellness estimate
    pub fn covariance(&self) -> f32 {
        self.filter.covariance()
    }

    fn standard() -> Result<Self, ConfigError> {
        Self::with_params(
            WELLNESS_PROCESS_NOISE,
            VSD_MEASUREMENT_NOISE,
            COMFORT_MEASUREMENT_NOISE,
            IDLE_MEASUREMENT_NOISE,
            INITIAL_WELLNESS,
            INITIAL_COVARIANCE,
        )
    }
}

impl Default for WellnessFilter {
    fn default() -> Self {
        // The standard constants are statically valid
        match Self::standard() {
            Ok(filter) => filter,
            Err(_) => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_initial_state() {
        let filter = WellnessFilter::default();
        assert_eq!(filter.wellness(), 80.0);
        assert_eq!(filter.covariance(), 1.0);
    }

    #[test]
    fn ambient_pulls_harder_than_vsd() {
        // Same measurement, different source: the low-noise ambient path
        // must move the estimate further than the high-noise voice path.
        let mut via_vsd = WellnessFilter::default();
        let mut via_ambient = WellnessFilter::default();

        let vsd_result = via_vsd.fuse(40.0, f32::NAN, MeasurementSource::Vsd);
        let ambient_result = via_ambient.fuse(f32::NAN, 40.0, MeasurementSource::Ambient);

        assert!(vsd_result > ambient_result, "ambient should move further toward 40");
        assert!(vsd_result < 80.0 && ambient_result < 80.0);
    }

    #[test]
    fn source_isolation() {
        // The unused argument must not influence the result: poison it
        // with NaN and expect a finite, identical outcome.
        let mut poisoned = WellnessFilter::default();
        let mut clean = WellnessFilter::default();

        let a = poisoned.fuse(55.0, f32::NAN, MeasurementSource::Vsd);
        let b = clean.fuse(55.0, 99.0, MeasurementSource::Vsd);
        assert_eq!(a, b);

        let a = poisoned.fuse(f32::NAN, 70.0, MeasurementSource::Ambient);
        let b = clean.fuse(12.0, 70.0, MeasurementSource::Ambient);
        assert_eq!(a, b);

        let a = poisoned.fuse(f32::NAN, f32::NAN, MeasurementSource::Idle);
        let b = clean.fuse(0.0, 100.0, MeasurementSource::Idle);
        assert_eq!(a, b);
        assert!(a.is_finite());
    }

    #[test]
    fn idle_is_near_noop() {
        let mut filter = WellnessFilter::default();
        filter.fuse(65.0, 0.0, MeasurementSource::Vsd);

        let before = filter.wellness();
        let cov_before = filter.covariance();

        filter.fuse(0.0, 0.0, MeasurementSource::Idle);

        // Estimate unchanged (residual is zero), covariance breathes by a
        // small bounded amount
        assert_eq!(filter.wellness(), before);
        let cov_after = filter.covariance();
        assert!(cov_after > 0.0);
        assert!((cov_after - cov_before).abs() < WELLNESS_PROCESS_NOISE);
    }

    #[test]
    fn output_stays_bounded() {
        let mut filter = WellnessFilter::default();

        for _ in 0..50 {
            let w = filter.fuse(100.0, 100.0, MeasurementSource::Ambient);
            assert!((0.0..=100.0).contains(&w));
        }
        for _ in 0..50 {
            let w = filter.fuse(0.0, 0.0, MeasurementSource::Vsd);
            assert!((0.0..=100.0).contains(&w));
        }
    }

    #[test]
    fn rejects_bad_noise_at_construction() {
        assert!(WellnessFilter::with_params(0.01, 0.0, 2.0, 50.0, 80.0, 1.0).is_err());
        assert!(WellnessFilter::with_params(0.01, 10.0, -2.0, 50.0, 80.0, 1.0).is_err());
        assert!(WellnessFilter::with_params(0.01, 10.0, 2.0, 0.0, 80.0, 1.0).is_err());
        assert!(WellnessFilter::with_params(-0.1, 10.0, 2.0, 50.0, 80.0, 1.0).is_err());
    }
}

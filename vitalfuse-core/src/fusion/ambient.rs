//! Ambient Telemetry Smoothing
//!
//! Two independent scalar Kalman filters over raw temperature and humidity
//! readings. Consumer climate sensors wander reading to reading; smoothing
//! them first keeps that jitter out of the comfort score and, through it,
//! out of the wellness index.
//!
//! Validation happens before state: a reading with a NaN or infinite
//! component is rejected whole and neither filter advances.

use crate::{
    constants::filter::{
        AMBIENT_PROCESS_NOISE, HUMIDITY_MEASUREMENT_NOISE, INITIAL_COVARIANCE, INITIAL_HUMIDITY,
        INITIAL_TEMPERATURE, TEMPERATURE_MEASUREMENT_NOISE,
    },
    errors::{ConfigResult, FusionError, FusionResult},
    fusion::scalar::{FilterParams, ScalarFilter},
    traits::Validatable,
};

/// One raw temperature/humidity sample from the ambient sensor
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorReading {
    /// Temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
}

impl SensorReading {
    /// Create a reading from raw sensor scalars
    pub fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature,
            humidity,
        }
    }
}

/// Paired Kalman filters smoothing raw ambient telemetry
///
/// Temperature and humidity are filtered independently, each with its own
/// measurement noise (humidity sensing is the noisier of the two).
#[derive(Debug, Clone)]
pub struct AmbientEstimator {
    temperature: ScalarFilter,
    humidity: ScalarFilter,
}

impl AmbientEstimator {
    /// Create an estimator with custom noise parameters and initial states
    ///
    /// Used by the engine's config layer; [`AmbientEstimator::default`]
    /// gives the standard tuning.
    pub fn with_params(
        temperature_params: FilterParams,
        humidity_params: FilterParams,
        initial_temperature: f32,
        initial_humidity: f32,
        initial_covariance: f32,
    ) -> Self {
        Self {
            temperature: ScalarFilter::new(
                temperature_params,
                initial_temperature,
                initial_covariance,
            ),
            humidity: ScalarFilter::new(humidity_params, initial_humidity, initial_covariance),
        }
    }

    /// Smooth one raw reading, advancing both filters
    ///
    /// Both scalars are validated before either filter is touched: an
    /// invalid reading leaves the estimator exactly as it was. Returns the
    /// pair `(smoothed_temperature, smoothed_humidity)`.
    pub fn update(&mut self, reading: SensorReading) -> FusionResult<(f32, f32)> {
        if !reading.temperature.is_valid() {
            return Err(FusionError::InvalidReading {
                value: reading.temperature,
            });
        }
        if !reading.humidity.is_valid() {
            return Err(FusionError::InvalidReading {
                value: reading.humidity,
            });
        }

        let smoothed_temperature = self.temperature.update(reading.temperature);
        let smoothed_humidity = self.humidity.update(reading.humidity);

        Ok((smoothed_temperature, smoothed_humidity))
    }

    /// Current smoothed temperature estimate (°C)
    pub fn temperature(&self) -> f32 {
        self.temperature.estimate()
    }

    /// Current smoothed humidity estimate (% RH)
    pub fn humidity(&self) -> f32 {
        self.humidity.estimate()
    }

    /// Current temperature error covariance
    pub fn temperature_covariance(&self) -> f32 {
        self.temperature.covariance()
    }

    /// Current humidity error covariance
    pub fn humidity_covariance(&self) -> f32 {
        self.humidity.covariance()
    }

    fn standard() -> ConfigResult<Self> {
        Ok(Self::with_params(
            FilterParams::new(AMBIENT_PROCESS_NOISE, TEMPERATURE_MEASUREMENT_NOISE)?,
            FilterParams::new(AMBIENT_PROCESS_NOISE, HUMIDITY_MEASUREMENT_NOISE)?,
            INITIAL_TEMPERATURE,
            INITIAL_HUMIDITY,
            INITIAL_COVARIANCE,
        ))
    }
}

impl Default for AmbientEstimator {
    fn default() -> Self {
        // The standard constants are statically valid
        match Self::standard() {
            Ok(estimator) => estimator,
            Err(_) => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smooths_toward_measurements() {
        let mut estimator = AmbientEstimator::default();

        // Starts at the documented initial state
        assert_eq!(estimator.temperature(), 25.0);
        assert_eq!(estimator.humidity(), 50.0);

        let (temp, hum) = estimator.update(SensorReading::new(26.0, 55.0)).unwrap();

        // Moves toward the measurement without jumping all the way
        assert!(temp > 25.0 && temp < 26.0);
        assert!(hum > 50.0 && hum < 55.0);
    }

    #[test]
    fn humidity_trusted_less_than_temperature() {
        let mut estimator = AmbientEstimator::default();

        // Equal-sized steps on both channels; the noisier humidity filter
        // should move a smaller fraction of the way
        let (temp, hum) = estimator.update(SensorReading::new(26.0, 51.0)).unwrap();
        let temp_fraction = temp - 25.0;
        let hum_fraction = hum - 50.0;
        assert!(temp_fraction > hum_fraction);
    }

    #[test]
    fn invalid_reading_leaves_state_unchanged() {
        let mut estimator = AmbientEstimator::default();
        estimator.update(SensorReading::new(22.0, 40.0)).unwrap();

        let temp_before = estimator.temperature();
        let hum_before = estimator.humidity();
        let temp_cov_before = estimator.temperature_covariance();
        let hum_cov_before = estimator.humidity_covariance();

        // NaN temperature: whole reading rejected
        let result = estimator.update(SensorReading::new(f32::NAN, 45.0));
        assert!(matches!(result, Err(FusionError::InvalidReading { .. })));

        // Infinite humidity: also rejected, even with a valid temperature
        let result = estimator.update(SensorReading::new(22.0, f32::INFINITY));
        assert!(matches!(result, Err(FusionError::InvalidReading { .. })));

        assert_eq!(estimator.temperature(), temp_before);
        assert_eq!(estimator.humidity(), hum_before);
        assert_eq!(estimator.temperature_covariance(), temp_cov_before);
        assert_eq!(estimator.humidity_covariance(), hum_cov_before);
    }

    #[test]
    fn repeated_constant_reading_converges() {
        let mut estimator = AmbientEstimator::default();

        for _ in 0..100 {
            estimator.update(SensorReading::new(20.0, 35.0)).unwrap();
        }

        assert!((estimator.temperature() - 20.0).abs() < 0.1);
        assert!((estimator.humidity() - 35.0).abs() < 0.2);
    }
}

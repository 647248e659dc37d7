//! Ambient Comfort Heuristic
//!
//! Maps a smoothed `(temperature, humidity)` pair to a 0-100 comfort score
//! around an ideal indoor point. A dead-zone around the ideal absorbs
//! normal fluctuation without penalty; beyond it the penalty grows linearly,
//! with temperature weighted more heavily than humidity as the dominant
//! comfort driver.
//!
//! The score is a pure function of its inputs. Callers are responsible for
//! passing finite values - in the engine the inputs are filter estimates,
//! which are finite by construction.

use crate::constants::{
    comfort::{
        HUMIDITY_DEADZONE, HUMIDITY_PENALTY_SLOPE, IDEAL_HUMIDITY, IDEAL_TEMPERATURE,
        TEMPERATURE_DEADZONE, TEMPERATURE_PENALTY_SLOPE, TEMPERATURE_WEIGHT,
    },
    SCORE_MAX, SCORE_MIN,
};

/// Comfort scoring model with a configurable ideal point
///
/// [`ComfortModel::default`] reproduces the standard indoor tuning
/// (24 °C / 50 %RH ideal, ±2 °C / ±10 %RH dead-zones, 60/40 weighting).
#[derive(Debug, Clone, Copy)]
pub struct ComfortModel {
    /// Temperature at which the temperature sub-score is perfect (°C)
    ideal_temperature: f32,
    /// Humidity at which the humidity sub-score is perfect (% RH)
    ideal_humidity: f32,
    /// No-penalty half-width around the ideal temperature (°C)
    temperature_deadzone: f32,
    /// No-penalty half-width around the ideal humidity (% RH)
    humidity_deadzone: f32,
    /// Score points lost per °C beyond the dead-zone
    temperature_slope: f32,
    /// Score points lost per % RH beyond the dead-zone
    humidity_slope: f32,
    /// Weight of the temperature sub-score; humidity gets the complement
    temperature_weight: f32,
}

impl Default for ComfortModel {
    fn default() -> Self {
        Self {
            ideal_temperature: IDEAL_TEMPERATURE,
            ideal_humidity: IDEAL_HUMIDITY,
            temperature_deadzone: TEMPERATURE_DEADZONE,
            humidity_deadzone: HUMIDITY_DEADZONE,
            temperature_slope: TEMPERATURE_PENALTY_SLOPE,
            humidity_slope: HUMIDITY_PENALTY_SLOPE,
            temperature_weight: TEMPERATURE_WEIGHT,
        }
    }
}

impl ComfortModel {
    /// Score a smoothed temperature/humidity pair on the 0-100 scale
    ///
    /// `score(24.0, 50.0)` is exactly `100.0` with the default tuning.
    pub fn score(&self, temperature: f32, humidity: f32) -> f32 {
        let temperature_score = Self::band_score(
            temperature,
            self.ideal_temperature,
            self.temperature_deadzone,
            self.temperature_slope,
        );
        let humidity_score = Self::band_score(
            humidity,
            self.ideal_humidity,
            self.humidity_deadzone,
            self.humidity_slope,
        );

        self.temperature_weight * temperature_score
            + (1.0 - self.temperature_weight) * humidity_score
    }

    /// Dead-zone/penalty scoring shared by both channels
    ///
    /// Deviation inside the dead-zone costs nothing; beyond it each unit
    /// costs `slope` points, clamped to the score scale.
    fn band_score(value: f32, ideal: f32, deadzone: f32, slope: f32) -> f32 {
        let deviation = libm::fabsf(value - ideal);
        let penalty = (deviation - deadzone).max(0.0) * slope;
        (SCORE_MAX - penalty).clamp(SCORE_MIN, SCORE_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_at_ideal_point() {
        let model = ComfortModel::default();
        assert_eq!(model.score(24.0, 50.0), 100.0);
    }

    #[test]
    fn deadzone_absorbs_fluctuation() {
        let model = ComfortModel::default();

        // Anywhere inside ±2°C / ±10%RH still scores perfect
        assert_eq!(model.score(26.0, 50.0), 100.0);
        assert_eq!(model.score(22.0, 60.0), 100.0);
        assert_eq!(model.score(25.5, 41.0), 100.0);
    }

    #[test]
    fn penalty_grows_linearly_beyond_deadzone() {
        let model = ComfortModel::default();

        // 3°C above ideal = 1°C past the dead-zone = 5 points off the
        // temperature sub-score, weighted 60%
        let score = model.score(27.0, 50.0);
        assert!((score - 97.0).abs() < 1e-4);

        // 15%RH above ideal = 5 past the dead-zone = 10 points off the
        // humidity sub-score, weighted 40%
        let score = model.score(24.0, 65.0);
        assert!((score - 96.0).abs() < 1e-4);
    }

    #[test]
    fn temperature_outweighs_humidity() {
        let model = ComfortModel::default();

        // Floor one channel at a time: losing the temperature sub-score
        // costs more of the combined score
        let temp_floored = model.score(60.0, 50.0);
        let hum_floored = model.score(24.0, 100.0);
        assert!(temp_floored < hum_floored);
    }

    #[test]
    fn clamped_at_extremes() {
        let model = ComfortModel::default();

        // Far outside any plausible room: both sub-scores floor at zero
        let score = model.score(-100.0, 0.0);
        assert!(score >= 0.0);

        let score = model.score(1000.0, 200.0);
        assert_eq!(score, 0.0);
    }
}

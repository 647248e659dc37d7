//! Wellness Engine - Ownership and Orchestration
//!
//! ## Overview
//!
//! [`WellnessEngine`] is the single owner of all persistent filter state:
//! the temperature, humidity and wellness `(estimate, covariance)` pairs
//! live here and nowhere else. Request handlers never construct or mutate
//! filter state directly; they call one of three operations:
//!
//! - [`WellnessEngine::process_voice`] - a voice clip was classified
//! - [`WellnessEngine::process_ambient`] - a new sensor reading arrived
//! - [`WellnessEngine::coast`] - no new data, let uncertainty breathe
//!
//! Each operation validates its input, runs the relevant transforms, fuses
//! into the wellness filter with the matching source tag, and records a
//! snapshot in the sliding history window.
//!
//! ## Lifecycle
//!
//! The engine is built once at process start from an [`EngineConfig`] and
//! lives until shutdown. Construction is the only point where
//! configuration can fail; a bad noise parameter aborts startup instead of
//! producing an engine that would divide by zero on its first update.
//!
//! ## Concurrency
//!
//! The engine itself is synchronous and lock-free; it performs no I/O and
//! never suspends. When request handlers run on multiple threads, wrap it
//! in [`SharedEngine`]: one mutex covering the whole
//! read-state/compute/write-state cycle of each operation. The computation
//! is O(1), so a single coarse lock is both sufficient and cheaper than
//! anything finer-grained. Updates from different sources may interleave in
//! arbitrary order; each update's measurement/noise pairing is
//! self-contained, so the result is correct under any serialization.

use crate::{
    advisory::{classify, AdvisoryTier},
    buffer::CircularBuffer,
    constants::{
        filter::{
            AMBIENT_PROCESS_NOISE, COMFORT_MEASUREMENT_NOISE, HISTORY_DEPTH,
            HUMIDITY_MEASUREMENT_NOISE, IDLE_MEASUREMENT_NOISE, INITIAL_COVARIANCE,
            INITIAL_HUMIDITY, INITIAL_TEMPERATURE, INITIAL_WELLNESS, TEMPERATURE_MEASUREMENT_NOISE,
            VSD_MEASUREMENT_NOISE, WELLNESS_PROCESS_NOISE,
        },
        SCORE_MAX, SCORE_MIN,
    },
    errors::{ConfigResult, FusionError, FusionResult},
    fusion::{
        ambient::{AmbientEstimator, SensorReading},
        scalar::FilterParams,
        wellness::{MeasurementSource, WellnessFilter},
    },
    scoring::{comfort::ComfortModel, risk::normalize_risk},
    time::Timestamp,
};

// Optional logging, compiled out entirely without the `log` feature
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Voice-path input: what the classifier pipeline hands the engine
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskInput {
    /// Raw classifier output in `[0, 1]`; the engine normalizes and inverts
    ClassifierProbability(f32),
    /// Already on the inverted 0-100 scale (100 = calm); validated only
    NormalizedScore(f32),
}

/// One snapshot of the wellness index after an update
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WellnessRecord {
    /// Fused wellness index after the update
    pub wellness: f32,
    /// Which signal produced this update
    pub source: MeasurementSource,
    /// Caller-supplied timestamp of the update
    pub timestamp: Timestamp,
}

/// Result of an ambient-update fusion call
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmbientReport {
    /// Smoothed temperature after this reading (°C)
    pub smoothed_temperature: f32,
    /// Smoothed humidity after this reading (% RH)
    pub smoothed_humidity: f32,
    /// Comfort score computed from the smoothed pair
    pub comfort_score: f32,
    /// Wellness index after fusing the comfort score
    pub wellness_index: f32,
}

/// Result of a voice-analysis fusion call
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoiceReport {
    /// Normalized risk score on the inverted scale (100 = calm)
    pub risk_score: f32,
    /// Current smoothed temperature (no new reading is taken)
    pub smoothed_temperature: f32,
    /// Current smoothed humidity (no new reading is taken)
    pub smoothed_humidity: f32,
    /// Wellness index after fusing the risk score
    pub wellness_index: f32,
    /// Severity tier for the new state
    pub advisory: AdvisoryTier,
}

/// Builder-style engine configuration
///
/// Defaults reproduce the standard tuning from [`crate::constants`]. Every
/// noise parameter is validated in [`EngineConfig::build`]; nothing is
/// checked per call afterwards.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    ambient_process_noise: f32,
    temperature_noise: f32,
    humidity_noise: f32,
    wellness_process_noise: f32,
    vsd_noise: f32,
    comfort_noise: f32,
    idle_noise: f32,
    initial_temperature: f32,
    initial_humidity: f32,
    initial_wellness: f32,
    initial_covariance: f32,
    comfort_model: ComfortModel,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ambient_process_noise: AMBIENT_PROCESS_NOISE,
            temperature_noise: TEMPERATURE_MEASUREMENT_NOISE,
            humidity_noise: HUMIDITY_MEASUREMENT_NOISE,
            wellness_process_noise: WELLNESS_PROCESS_NOISE,
            vsd_noise: VSD_MEASUREMENT_NOISE,
            comfort_noise: COMFORT_MEASUREMENT_NOISE,
            idle_noise: IDLE_MEASUREMENT_NOISE,
            initial_temperature: INITIAL_TEMPERATURE,
            initial_humidity: INITIAL_HUMIDITY,
            initial_wellness: INITIAL_WELLNESS,
            initial_covariance: INITIAL_COVARIANCE,
            comfort_model: ComfortModel::default(),
        }
    }
}

impl EngineConfig {
    /// Set process noise for the ambient temperature/humidity filters
    pub fn with_ambient_process_noise(mut self, noise: f32) -> Self {
        self.ambient_process_noise = noise;
        self
    }

    /// Set measurement noise for raw temperature and humidity readings
    pub fn with_ambient_measurement_noise(mut self, temperature: f32, humidity: f32) -> Self {
        self.temperature_noise = temperature;
        self.humidity_noise = humidity;
        self
    }

    /// Set process noise for the wellness filter
    pub fn with_wellness_process_noise(mut self, noise: f32) -> Self {
        self.wellness_process_noise = noise;
        self
    }

    /// Set per-source measurement noise for the wellness filter
    pub fn with_source_noise(mut self, vsd: f32, comfort: f32, idle: f32) -> Self {
        self.vsd_noise = vsd;
        self.comfort_noise = comfort;
        self.idle_noise = idle;
        self
    }

    /// Set the initial filter estimates
    pub fn with_initial_state(mut self, temperature: f32, humidity: f32, wellness: f32) -> Self {
        self.initial_temperature = temperature;
        self.initial_humidity = humidity;
        self.initial_wellness = wellness;
        self
    }

    /// Replace the comfort scoring model
    pub fn with_comfort_model(mut self, model: ComfortModel) -> Self {
        self.comfort_model = model;
        self
    }

    /// Build the engine, validating every noise parameter
    ///
    /// This is the only fallible step in the engine's life. A failure here
    /// must abort startup; there is no degraded mode.
    pub fn build(self) -> ConfigResult<WellnessEngine> {
        let ambient = AmbientEstimator::with_params(
            FilterParams::new(self.ambient_process_noise, self.temperature_noise)?,
            FilterParams::new(self.ambient_process_noise, self.humidity_noise)?,
            self.initial_temperature,
            self.initial_humidity,
            self.initial_covariance,
        );

        let wellness = WellnessFilter::with_params(
            self.wellness_process_noise,
            self.vsd_noise,
            self.comfort_noise,
            self.idle_noise,
            self.initial_wellness,
            self.initial_covariance,
        )?;

        Ok(WellnessEngine {
            ambient,
            wellness,
            comfort_model: self.comfort_model,
            history: CircularBuffer::new(),
        })
    }
}

/// The process-wide fusion state: three filters and their orchestration
///
/// Sole owner and sole mutator of the persistent filter state. See the
/// module docs for lifecycle and concurrency rules.
#[derive(Debug, Clone)]
pub struct WellnessEngine {
    ambient: AmbientEstimator,
    wellness: WellnessFilter,
    comfort_model: ComfortModel,
    history: CircularBuffer<WellnessRecord, HISTORY_DEPTH>,
}

impl WellnessEngine {
    /// Build an engine with the standard tuning
    ///
    /// Infallible because the standard constants are statically valid;
    /// custom tunings go through [`EngineConfig::build`].
    pub fn new() -> Self {
        match EngineConfig::default().build() {
            Ok(engine) => engine,
            Err(_) => unreachable!(),
        }
    }

    /// Ambient-update fusion call
    ///
    /// Smooths the raw reading through both ambient filters, scores comfort
    /// on the smoothed pair, and fuses the comfort score into the wellness
    /// index with `source = Ambient`. An invalid reading is rejected before
    /// any filter state changes.
    pub fn process_ambient(
        &mut self,
        reading: SensorReading,
        timestamp: Timestamp,
    ) -> FusionResult<AmbientReport> {
        let (smoothed_temperature, smoothed_humidity) =
            self.ambient.update(reading).map_err(|err| {
                log_warn!(
                    "ambient reading rejected: {:?} (t={}, h={})",
                    err,
                    reading.temperature,
                    reading.humidity
                );
                err
            })?;

        let comfort_score = self
            .comfort_model
            .score(smoothed_temperature, smoothed_humidity);

        // The risk argument is a placeholder on this path; the Ambient arm
        // never reads it. Passing the current estimate mirrors the idle
        // feedback shape.
        let placeholder_risk = self.wellness.wellness();
        let wellness_index =
            self.wellness
                .fuse(placeholder_risk, comfort_score, MeasurementSource::Ambient);

        self.record(wellness_index, MeasurementSource::Ambient, timestamp);
        log_debug!(
            "ambient fusion: temp={:.2} hum={:.2} comfort={:.1} wellness={:.1}",
            smoothed_temperature,
            smoothed_humidity,
            comfort_score,
            wellness_index
        );

        Ok(AmbientReport {
            smoothed_temperature,
            smoothed_humidity,
            comfort_score,
            wellness_index,
        })
    }

    /// Voice-analysis fusion call
    ///
    /// Normalizes or validates the risk input, reads the current smoothed
    /// ambient values (no new reading is taken), and fuses the risk score
    /// into the wellness index with `source = Vsd`.
    pub fn process_voice(
        &mut self,
        input: RiskInput,
        timestamp: Timestamp,
    ) -> FusionResult<VoiceReport> {
        let risk_score = match input {
            RiskInput::ClassifierProbability(probability) => normalize_risk(probability)
                .map_err(|err| {
                    log_warn!("voice probability rejected: {:?}", err);
                    err
                })?,
            RiskInput::NormalizedScore(score) => {
                if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
                    log_warn!("voice score rejected: {} outside score scale", score);
                    return Err(FusionError::OutOfRange {
                        value: score,
                        min: SCORE_MIN,
                        max: SCORE_MAX,
                    });
                }
                score
            }
        };

        let smoothed_temperature = self.ambient.temperature();
        let smoothed_humidity = self.ambient.humidity();
        let comfort_score = self
            .comfort_model
            .score(smoothed_temperature, smoothed_humidity);

        let wellness_index =
            self.wellness
                .fuse(risk_score, comfort_score, MeasurementSource::Vsd);

        self.record(wellness_index, MeasurementSource::Vsd, timestamp);
        log_debug!(
            "voice fusion: risk={:.1} wellness={:.1}",
            risk_score,
            wellness_index
        );

        Ok(VoiceReport {
            risk_score,
            smoothed_temperature,
            smoothed_humidity,
            wellness_index,
            advisory: classify(wellness_index, risk_score),
        })
    }

    /// Degraded / no-new-data update
    ///
    /// Feeds the current estimate back as its own measurement with inflated
    /// noise: the estimate is unchanged while covariance grows then
    /// re-shrinks by a small bounded amount. Returns the wellness index.
    pub fn coast(&mut self, timestamp: Timestamp) -> f32 {
        let wellness_index = self
            .wellness
            .fuse(SCORE_MIN, SCORE_MIN, MeasurementSource::Idle);

        self.record(wellness_index, MeasurementSource::Idle, timestamp);
        wellness_index
    }

    /// Current wellness index
    pub fn wellness_index(&self) -> f32 {
        self.wellness.wellness()
    }

    /// Current smoothed temperature (°C)
    pub fn smoothed_temperature(&self) -> f32 {
        self.ambient.temperature()
    }

    /// Current smoothed humidity (% RH)
    pub fn smoothed_humidity(&self) -> f32 {
        self.ambient.humidity()
    }

    /// Recent wellness snapshots, oldest first
    pub fn history(&self) -> impl Iterator<Item = &WellnessRecord> {
        self.history.iter()
    }

    fn record(&mut self, wellness: f32, source: MeasurementSource, timestamp: Timestamp) {
        self.history.push(WellnessRecord {
            wellness,
            source,
            timestamp,
        });
    }
}

impl Default for WellnessEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Thread-safe handle around a [`WellnessEngine`]
///
/// One mutex serializes every update as an atomic read-compute-write unit,
/// which is the whole concurrency discipline the engine needs: no operation
/// blocks on I/O and each runs in O(1). Clone the handle freely; clones
/// share the same engine.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: std::sync::Arc<std::sync::Mutex<WellnessEngine>>,
}

#[cfg(feature = "std")]
impl SharedEngine {
    /// Wrap an engine for shared use
    pub fn new(engine: WellnessEngine) -> Self {
        Self {
            inner: std::sync::Arc::new(std::sync::Mutex::new(engine)),
        }
    }

    /// Serialized [`WellnessEngine::process_ambient`]
    pub fn process_ambient(
        &self,
        reading: SensorReading,
        timestamp: Timestamp,
    ) -> FusionResult<AmbientReport> {
        self.lock().process_ambient(reading, timestamp)
    }

    /// Serialized [`WellnessEngine::process_voice`]
    pub fn process_voice(&self, input: RiskInput, timestamp: Timestamp) -> FusionResult<VoiceReport> {
        self.lock().process_voice(input, timestamp)
    }

    /// Serialized [`WellnessEngine::coast`]
    pub fn coast(&self, timestamp: Timestamp) -> f32 {
        self.lock().coast(timestamp)
    }

    /// Current wellness index
    pub fn wellness_index(&self) -> f32 {
        self.lock().wellness_index()
    }

    /// Copy of the recent wellness snapshots, oldest first
    pub fn history(&self) -> std::vec::Vec<WellnessRecord> {
        self.lock().history().copied().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, WellnessEngine> {
        // Updates are pure arithmetic and cannot panic mid-write, so a
        // poisoned lock still guards a consistent engine; recover it.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voice_flow_produces_report() {
        let mut engine = WellnessEngine::new();

        let report = engine
            .process_voice(RiskInput::ClassifierProbability(0.2), 1000)
            .unwrap();

        assert_eq!(report.risk_score, 80.0);
        // No ambient reading was taken: smoothed values still at initial
        assert_eq!(report.smoothed_temperature, 25.0);
        assert_eq!(report.smoothed_humidity, 50.0);
        assert!((0.0..=100.0).contains(&report.wellness_index));
    }

    #[test]
    fn ambient_flow_produces_report() {
        let mut engine = WellnessEngine::new();

        let report = engine
            .process_ambient(SensorReading::new(24.0, 50.0), 1000)
            .unwrap();

        // Smoothed values move toward the ideal point; comfort stays
        // perfect inside the dead-zones
        assert_eq!(report.comfort_score, 100.0);
        assert!(report.wellness_index > 80.0);
    }

    #[test]
    fn pre_normalized_score_accepted() {
        let mut engine = WellnessEngine::new();

        let report = engine
            .process_voice(RiskInput::NormalizedScore(55.0), 1000)
            .unwrap();
        assert_eq!(report.risk_score, 55.0);

        let err = engine.process_voice(RiskInput::NormalizedScore(120.0), 1000);
        assert!(matches!(err, Err(FusionError::OutOfRange { .. })));

        let err = engine.process_voice(RiskInput::NormalizedScore(f32::NAN), 1000);
        assert!(matches!(err, Err(FusionError::OutOfRange { .. })));
    }

    #[test]
    fn rejected_inputs_do_not_advance_state() {
        let mut engine = WellnessEngine::new();
        engine
            .process_ambient(SensorReading::new(23.0, 45.0), 1000)
            .unwrap();

        let wellness_before = engine.wellness_index();
        let temp_before = engine.smoothed_temperature();
        let history_before = engine.history().count();

        assert!(engine
            .process_ambient(SensorReading::new(f32::NAN, 45.0), 2000)
            .is_err());
        assert!(engine
            .process_voice(RiskInput::ClassifierProbability(2.0), 2000)
            .is_err());

        assert_eq!(engine.wellness_index(), wellness_before);
        assert_eq!(engine.smoothed_temperature(), temp_before);
        assert_eq!(engine.history().count(), history_before);
    }

    #[test]
    fn coast_keeps_estimate() {
        let mut engine = WellnessEngine::new();
        engine
            .process_voice(RiskInput::NormalizedScore(60.0), 1000)
            .unwrap();

        let before = engine.wellness_index();
        let after = engine.coast(2000);

        assert_eq!(before, after);
    }

    #[test]
    fn history_records_sources() {
        let mut engine = WellnessEngine::new();

        engine
            .process_ambient(SensorReading::new(24.0, 50.0), 1000)
            .unwrap();
        engine
            .process_voice(RiskInput::NormalizedScore(70.0), 2000)
            .unwrap();
        engine.coast(3000);

        let sources: std::vec::Vec<MeasurementSource> =
            engine.history().map(|r| r.source).collect();
        assert_eq!(
            sources,
            std::vec![
                MeasurementSource::Ambient,
                MeasurementSource::Vsd,
                MeasurementSource::Idle
            ]
        );

        let timestamps: std::vec::Vec<u64> = engine.history().map(|r| r.timestamp).collect();
        assert_eq!(timestamps, std::vec![1000, 2000, 3000]);
    }

    #[test]
    fn config_rejects_bad_noise() {
        assert!(EngineConfig::default()
            .with_ambient_measurement_noise(0.0, 1.0)
            .build()
            .is_err());
        assert!(EngineConfig::default()
            .with_source_noise(10.0, 2.0, -50.0)
            .build()
            .is_err());
        assert!(EngineConfig::default()
            .with_wellness_process_noise(-0.01)
            .build()
            .is_err());
    }

    #[test]
    fn custom_initial_state() {
        let mut engine = EngineConfig::default()
            .with_initial_state(20.0, 40.0, 50.0)
            .build()
            .unwrap();

        assert_eq!(engine.smoothed_temperature(), 20.0);
        assert_eq!(engine.smoothed_humidity(), 40.0);
        assert_eq!(engine.wellness_index(), 50.0);

        // A calm voice sample should now pull wellness upward
        let report = engine
            .process_voice(RiskInput::NormalizedScore(100.0), 1000)
            .unwrap();
        assert!(report.wellness_index > 50.0);
    }
}

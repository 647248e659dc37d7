//! Comfort Heuristic Parameters
//!
//! The comfort score maps smoothed temperature/humidity to a 0-100 scale
//! around an ideal indoor point. Dead-zones absorb normal fluctuation;
//! beyond them the penalty grows linearly.

/// Ideal indoor temperature (°C).
///
/// Source: ASHRAE comfort zone midpoint
pub const IDEAL_TEMPERATURE: f32 = 24.0;

/// Ideal indoor relative humidity (%).
pub const IDEAL_HUMIDITY: f32 = 50.0;

/// Half-width of the no-penalty band around the ideal temperature (°C).
pub const TEMPERATURE_DEADZONE: f32 = 2.0;

/// Half-width of the no-penalty band around the ideal humidity (% RH).
pub const HUMIDITY_DEADZONE: f32 = 10.0;

/// Comfort points lost per °C beyond the temperature dead-zone.
pub const TEMPERATURE_PENALTY_SLOPE: f32 = 5.0;

/// Comfort points lost per % RH beyond the humidity dead-zone.
pub const HUMIDITY_PENALTY_SLOPE: f32 = 2.0;

/// Weight of the temperature sub-score in the combined comfort score.
///
/// Temperature dominates perceived comfort, so it carries 60% of the
/// weight against humidity's 40%.
pub const TEMPERATURE_WEIGHT: f32 = 0.6;

/// Weight of the humidity sub-score in the combined comfort score.
pub const HUMIDITY_WEIGHT: f32 = 0.4;

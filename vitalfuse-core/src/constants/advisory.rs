//! Advisory Tier Thresholds
//!
//! Boundaries for the four severity tiers. The classifier checks risk
//! before wellness so that an acute voice-stress spike always overrides a
//! historically good trend.

/// Risk score below which the critical-stress tier fires unconditionally.
pub const CRITICAL_RISK_THRESHOLD: f32 = 30.0;

/// Wellness index below which the sustained-fatigue tier fires.
pub const FATIGUE_WELLNESS_THRESHOLD: f32 = 50.0;

/// Risk score below which (at healthy wellness) the moderate tier fires.
pub const MODERATE_RISK_THRESHOLD: f32 = 75.0;

/// Wellness index below which (at calm risk) the moderate tier fires.
pub const MODERATE_WELLNESS_THRESHOLD: f32 = 80.0;

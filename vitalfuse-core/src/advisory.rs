//! Advisory Tier Classification
//!
//! Deterministic, stateless mapping from the current `(wellness, risk)`
//! pair to one of four severity tiers, each carrying a fixed advisory
//! string for the presentation layer.
//!
//! ## Precedence
//!
//! Rules are evaluated in order and the first match wins:
//!
//! 1. risk < 30           → [`AdvisoryTier::CriticalStress`]
//! 2. wellness < 50       → [`AdvisoryTier::SustainedFatigue`]
//! 3. risk < 75 or wellness < 80 → [`AdvisoryTier::Moderate`]
//! 4. otherwise           → [`AdvisoryTier::Stable`]
//!
//! The ordering is significant: a momentary high-stress voice reading
//! always overrides a historically good wellness trend. The filter exists
//! to smooth; the advisory exists to stay responsive to acute events.

use crate::constants::advisory::{
    CRITICAL_RISK_THRESHOLD, FATIGUE_WELLNESS_THRESHOLD, MODERATE_RISK_THRESHOLD,
    MODERATE_WELLNESS_THRESHOLD,
};

/// Severity tier for the current fused state, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdvisoryTier {
    /// Acute voice-stress spike, regardless of the wellness trend
    CriticalStress,
    /// Wellness has been depressed long enough to drag the fused index down
    SustainedFatigue,
    /// Mild stress or slightly degraded wellness
    Moderate,
    /// Calm voice and healthy wellness trend
    Stable,
}

impl AdvisoryTier {
    /// Fixed advisory text for this tier
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::CriticalStress => {
                "High stress detected. Pause what you are doing and try a slow breathing exercise."
            }
            Self::SustainedFatigue => {
                "Sustained fatigue detected. Consider a longer break and check your rest schedule."
            }
            Self::Moderate => "Moderate strain detected. Take short breaks between tasks.",
            Self::Stable => "You seem calm and comfortable. Keep it up!",
        }
    }
}

/// Classify the current state into a severity tier
///
/// Pure precedence chain over the two scores; see the module docs for why
/// risk is checked first.
pub fn classify(wellness_index: f32, risk_score: f32) -> AdvisoryTier {
    if risk_score < CRITICAL_RISK_THRESHOLD {
        AdvisoryTier::CriticalStress
    } else if wellness_index < FATIGUE_WELLNESS_THRESHOLD {
        AdvisoryTier::SustainedFatigue
    } else if risk_score < MODERATE_RISK_THRESHOLD || wellness_index < MODERATE_WELLNESS_THRESHOLD {
        AdvisoryTier::Moderate
    } else {
        AdvisoryTier::Stable
    }
}

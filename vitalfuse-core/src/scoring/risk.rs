//! Voice Risk Normalization
//!
//! The external classifier reports the probability that a clip sounds
//! stressed. The engine works on the opposite polarity - 100 means calm -
//! so the boundary transform inverts while scaling:
//!
//! ```text
//! risk_score = clamp(100 · (1 - probability), 0, 100)
//! ```
//!
//! The inversion is a hard contract: every downstream consumer, from the
//! wellness filter to the advisory tiers, assumes 100 = calm/low-risk.
//! Probabilities outside `[0, 1]` (including NaN) are the caller's bug and
//! are rejected rather than clamped into plausibility.

use crate::{
    constants::{SCORE_MAX, SCORE_MIN},
    errors::{FusionError, FusionResult},
};

/// Normalize a classifier probability to the inverted 0-100 risk scale
pub fn normalize_risk(probability: f32) -> FusionResult<f32> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(FusionError::OutOfRange {
            value: probability,
            min: 0.0,
            max: 1.0,
        });
    }

    Ok((SCORE_MAX * (1.0 - probability)).clamp(SCORE_MIN, SCORE_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverts_polarity() {
        assert_eq!(normalize_risk(0.2).unwrap(), 80.0);
        assert_eq!(normalize_risk(1.0).unwrap(), 0.0);
        assert_eq!(normalize_risk(0.0).unwrap(), 100.0);
        assert_eq!(normalize_risk(0.5).unwrap(), 50.0);
    }

    #[test]
    fn rejects_out_of_domain() {
        assert!(matches!(
            normalize_risk(1.5),
            Err(FusionError::OutOfRange { value, .. }) if value == 1.5
        ));
        assert!(matches!(
            normalize_risk(-0.1),
            Err(FusionError::OutOfRange { .. })
        ));
        assert!(normalize_risk(f32::NAN).is_err());
        assert!(normalize_risk(f32::INFINITY).is_err());
    }
}

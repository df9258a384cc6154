use super::super::domain::{ClinicalProfile, RiskTier};

pub const HIGH_RISK_THRESHOLD: f64 = 0.65;
pub const MODERATE_RISK_THRESHOLD: f64 = 0.35;

const BASE_CONFIDENCE: f64 = 0.5;
const RECORD_CONFIDENCE_STEP: f64 = 0.05;
const MAX_RECORD_CONFIDENCE: f64 = 0.3;

/// Combines the base score with the record adjustment and caps it to [0, 1].
pub(crate) fn final_score(base: f64, adjustment: f64) -> f64 {
    let combined = base + adjustment;
    if combined.is_nan() {
        return 0.0;
    }
    combined.clamp(0.0, 1.0)
}

impl RiskTier {
    /// Boundary values belong to the higher tier.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            Self::High
        } else if score >= MODERATE_RISK_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

pub(crate) fn confidence(profile: &ClinicalProfile, record_count: usize) -> f64 {
    let mut confidence = BASE_CONFIDENCE;

    if profile.has_chronic_conditions() {
        confidence += 0.1;
    }
    if profile.medications_count > 0 {
        confidence += 0.1;
    }
    if record_count > 0 {
        confidence += (record_count as f64 * RECORD_CONFIDENCE_STEP).min(MAX_RECORD_CONFIDENCE);
    }

    confidence.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(RiskTier::from_score(0.65), RiskTier::High);
        assert_eq!(RiskTier::from_score(0.35), RiskTier::Moderate);
        assert_eq!(RiskTier::from_score(0.349999), RiskTier::Low);
        assert_eq!(RiskTier::from_score(0.0), RiskTier::Low);
        assert_eq!(RiskTier::from_score(1.0), RiskTier::High);
    }

    #[test]
    fn final_score_is_capped_at_one() {
        assert_eq!(final_score(2.4, 0.3), 1.0);
        assert_eq!(final_score(0.2, 0.1), 0.2 + 0.1);
        assert_eq!(final_score(f64::NAN, 0.1), 0.0);
    }

    #[test]
    fn record_confidence_bonus_is_capped() {
        let mut profile = ClinicalProfile::healthy();
        profile.chronic_conditions.push("diabetes".to_string());
        profile.medications_count = 2;

        assert!((confidence(&profile, 0) - 0.7).abs() < 1e-12);
        assert!((confidence(&profile, 2) - 0.8).abs() < 1e-12);
        assert!((confidence(&profile, 20) - 1.0).abs() < 1e-12);
        assert!(confidence(&profile, 20) <= 1.0);
    }
}

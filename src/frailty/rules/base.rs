use super::super::catalog::FactorCatalog;
use super::super::domain::{ClinicalProfile, CognitiveStatus, MobilityLevel, MAX_ADL_SCORE};
use serde::Serialize;

pub(crate) const ADL_POINT_WEIGHT: f64 = 0.06;

/// Per-category contributions kept separate so callers can audit the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BaseScore {
    pub conditions: f64,
    pub medications: f64,
    pub hospitalizations: f64,
    pub mobility: f64,
    pub cognition: f64,
    pub daily_living: f64,
}

impl BaseScore {
    /// Unclamped sum; the cap is applied once the record adjustment is added.
    pub fn total(&self) -> f64 {
        self.conditions
            + self.medications
            + self.hospitalizations
            + self.mobility
            + self.cognition
            + self.daily_living
    }
}

pub(crate) fn score_profile(profile: &ClinicalProfile, catalog: &FactorCatalog) -> BaseScore {
    BaseScore {
        conditions: profile
            .chronic_conditions
            .iter()
            .map(|condition| catalog.weight_for(condition))
            .sum(),
        medications: medication_weight(profile.medications_count),
        hospitalizations: hospitalization_weight(profile.recent_hospitalizations),
        mobility: mobility_weight(profile.mobility_level),
        cognition: cognitive_weight(profile.cognitive_status),
        daily_living: adl_weight(profile.activities_daily_living_score),
    }
}

pub(crate) fn medication_weight(count: u32) -> f64 {
    match count {
        10.. => 0.20,
        7..=9 => 0.15,
        5..=6 => 0.10,
        _ => f64::from(count) * 0.02,
    }
}

pub(crate) fn hospitalization_weight(count: u32) -> f64 {
    match count {
        3.. => 0.25,
        2 => 0.18,
        _ => f64::from(count) * 0.10,
    }
}

pub(crate) const fn mobility_weight(level: MobilityLevel) -> f64 {
    match level {
        MobilityLevel::Independent => 0.0,
        MobilityLevel::Limited => 0.25,
        MobilityLevel::Dependent => 0.45,
    }
}

pub(crate) const fn cognitive_weight(status: CognitiveStatus) -> f64 {
    match status {
        CognitiveStatus::Normal => 0.0,
        CognitiveStatus::MildImpairment => 0.12,
        CognitiveStatus::ModerateImpairment => 0.25,
        CognitiveStatus::SevereImpairment => 0.40,
    }
}

pub(crate) fn adl_weight(score: u8) -> f64 {
    f64::from(MAX_ADL_SCORE.saturating_sub(score)) * ADL_POINT_WEIGHT
}

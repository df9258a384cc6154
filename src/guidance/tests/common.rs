use crate::frailty::{
    ClinicalProfile, CognitiveStatus, FrailtyEngine, MobilityLevel, RiskAssessment, RiskTier,
};
use crate::guidance::Applicable;

pub(super) fn assessment(frailty_score: f64) -> RiskAssessment {
    RiskAssessment {
        frailty_score,
        risk_level: RiskTier::from_score(frailty_score),
        confidence_score: 0.7,
        contributing_factors: Vec::new(),
        insights: Vec::new(),
        warning_flags: Vec::new(),
    }
}

pub(super) fn frail_profile() -> ClinicalProfile {
    ClinicalProfile {
        chronic_conditions: vec![
            "dementia".to_string(),
            "chronic kidney disease".to_string(),
            "arthritis".to_string(),
        ],
        medications_count: 9,
        recent_hospitalizations: 2,
        mobility_level: MobilityLevel::Dependent,
        cognitive_status: CognitiveStatus::SevereImpairment,
        activities_daily_living_score: 4,
    }
}

pub(super) fn scored(profile: &ClinicalProfile) -> RiskAssessment {
    FrailtyEngine::default().score(profile, &[])
}

/// Minimal stand-in for a caller-owned resource type.
pub(super) struct Leaflet {
    pub(super) name: &'static str,
    pub(super) criteria: Vec<String>,
}

impl Leaflet {
    pub(super) fn new(name: &'static str, criteria: &[&str]) -> Self {
        Self {
            name,
            criteria: criteria.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Applicable for Leaflet {
    fn applicability_criteria(&self) -> &[String] {
        &self.criteria
    }
}

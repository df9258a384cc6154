use crate::frailty::{ClinicalProfile, MobilityLevel, RiskAssessment, RiskTier};
use serde::Serialize;

/// Criteria needed, alongside a high tier, to qualify for a frailty exemption.
pub const QUALIFYING_CRITERIA_MIN: usize = 3;

/// Fixed checklist of medical-frailty exemption criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityCriterion {
    MultipleChronicConditions,
    Polypharmacy,
    RecentHospitalizations,
    MobilityLimitation,
    CognitiveImpairment,
    DailyLivingLimitation,
}

impl EligibilityCriterion {
    pub const ALL: [Self; 6] = [
        Self::MultipleChronicConditions,
        Self::Polypharmacy,
        Self::RecentHospitalizations,
        Self::MobilityLimitation,
        Self::CognitiveImpairment,
        Self::DailyLivingLimitation,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::MultipleChronicConditions => "Two or more chronic conditions",
            Self::Polypharmacy => "Five or more medications",
            Self::RecentHospitalizations => "Two or more recent hospitalizations",
            Self::MobilityLimitation => "Limited or dependent mobility",
            Self::CognitiveImpairment => "Cognitive impairment",
            Self::DailyLivingLimitation => "Daily living score of 6 or below",
        }
    }

    pub fn is_met(self, profile: &ClinicalProfile) -> bool {
        match self {
            Self::MultipleChronicConditions => profile.condition_count() >= 2,
            Self::Polypharmacy => profile.medications_count >= 5,
            Self::RecentHospitalizations => profile.recent_hospitalizations >= 2,
            Self::MobilityLimitation => profile.mobility_level != MobilityLevel::Independent,
            Self::CognitiveImpairment => profile.cognitive_status.is_impaired(),
            Self::DailyLivingLimitation => profile.activities_daily_living_score <= 6,
        }
    }

    fn observed(self, profile: &ClinicalProfile) -> String {
        match self {
            Self::MultipleChronicConditions => {
                format!("{} documented", profile.condition_count())
            }
            Self::Polypharmacy => format!("{} prescribed", profile.medications_count),
            Self::RecentHospitalizations => {
                format!("{} recorded", profile.recent_hospitalizations)
            }
            Self::MobilityLimitation => profile.mobility_level.token().to_string(),
            Self::CognitiveImpairment => profile.cognitive_status.label().to_string(),
            Self::DailyLivingLimitation => {
                format!("{}/10", profile.activities_daily_living_score)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionOutcome {
    pub criterion: EligibilityCriterion,
    pub met: bool,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityReport {
    pub qualifies: bool,
    pub met_count: usize,
    pub total_criteria: usize,
    pub details: Vec<String>,
    pub criteria: Vec<CriterionOutcome>,
}

/// Runs the checklist. Qualification also requires the assessment to be high tier.
pub fn evaluate_eligibility(
    assessment: &RiskAssessment,
    profile: &ClinicalProfile,
) -> EligibilityReport {
    let criteria: Vec<CriterionOutcome> = EligibilityCriterion::ALL
        .iter()
        .map(|criterion| {
            let met = criterion.is_met(profile);
            let status = if met { "Met" } else { "Not met" };
            CriterionOutcome {
                criterion: *criterion,
                met,
                detail: format!(
                    "{status}: {} ({})",
                    criterion.label(),
                    criterion.observed(profile)
                ),
            }
        })
        .collect();

    let met_count = criteria.iter().filter(|outcome| outcome.met).count();
    let qualifies =
        met_count >= QUALIFYING_CRITERIA_MIN && assessment.risk_level == RiskTier::High;

    EligibilityReport {
        qualifies,
        met_count,
        total_criteria: criteria.len(),
        details: criteria.iter().map(|outcome| outcome.detail.clone()).collect(),
        criteria,
    }
}

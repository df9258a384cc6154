use super::super::domain::{ClinicalProfile, CognitiveStatus, ContributingFactor, MobilityLevel};
use super::base::{cognitive_weight, mobility_weight, ADL_POINT_WEIGHT};

const MULTIPLE_CONDITIONS_MIN: usize = 3;
const POLYPHARMACY_MIN: u32 = 5;
const HOSPITALIZATIONS_MIN: u32 = 2;
const ADL_CONCERN_BELOW: u8 = 7;

/// Emits the factors whose trigger fired, ordered by descending impact.
///
/// The sort is stable so equal impacts keep emission order.
pub(crate) fn rank_factors(profile: &ClinicalProfile) -> Vec<ContributingFactor> {
    let mut factors = Vec::new();

    let conditions = profile.condition_count();
    if conditions >= MULTIPLE_CONDITIONS_MIN {
        factors.push(ContributingFactor {
            factor: "Multiple Chronic Conditions".to_string(),
            impact: conditions as f64 * 0.08,
            description: format!(
                "You have {conditions} documented chronic conditions, which significantly impacts frailty risk."
            ),
        });
    }

    let medications = profile.medications_count;
    if medications >= POLYPHARMACY_MIN {
        factors.push(ContributingFactor {
            factor: "Polypharmacy".to_string(),
            impact: f64::from(medications) * 0.05,
            description: format!(
                "Taking {medications} medications increases risk of adverse effects and frailty."
            ),
        });
    }

    let hospitalizations = profile.recent_hospitalizations;
    if hospitalizations >= HOSPITALIZATIONS_MIN {
        factors.push(ContributingFactor {
            factor: "Recent Hospitalizations".to_string(),
            impact: f64::from(hospitalizations) * 0.15,
            description: format!(
                "{hospitalizations} recent hospitalizations indicate acute health events that contribute to frailty."
            ),
        });
    }

    if profile.mobility_level != MobilityLevel::Independent {
        factors.push(ContributingFactor {
            factor: "Mobility Limitations".to_string(),
            impact: mobility_weight(profile.mobility_level),
            description: format!(
                "{} mobility is a strong indicator of frailty.",
                profile.mobility_level.label()
            ),
        });
    }

    if profile.cognitive_status != CognitiveStatus::Normal {
        factors.push(ContributingFactor {
            factor: "Cognitive Impairment".to_string(),
            impact: cognitive_weight(profile.cognitive_status),
            description: format!(
                "Cognitive status shows {}, affecting daily functioning.",
                profile.cognitive_status.label()
            ),
        });
    }

    let adl = profile.activities_daily_living_score;
    if adl < ADL_CONCERN_BELOW {
        factors.push(ContributingFactor {
            factor: "Activities of Daily Living".to_string(),
            impact: f64::from(10 - adl) * ADL_POINT_WEIGHT,
            description: format!(
                "ADL score of {adl}/10 indicates difficulty with daily activities."
            ),
        });
    }

    factors.sort_by(|a, b| b.impact.total_cmp(&a.impact));
    factors
}

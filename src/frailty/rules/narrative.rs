use super::super::catalog::is_serious_condition;
use super::super::domain::{ClinicalProfile, MobilityLevel, RiskTier};

pub(crate) fn generate_insights(profile: &ClinicalProfile, tier: RiskTier) -> Vec<String> {
    let mut insights: Vec<String> = match tier {
        RiskTier::High => vec![
            "Your frailty assessment indicates you likely meet Indiana Medicaid's medical frailty criteria.".to_string(),
            "Medical frailty exemption can provide access to comprehensive health services and support.".to_string(),
        ],
        RiskTier::Moderate => vec![
            "You show moderate frailty indicators that may qualify you for enhanced Medicaid services.".to_string(),
            "Consider discussing preventive interventions with your healthcare provider to avoid progression.".to_string(),
        ],
        RiskTier::Low => vec![
            "Your current frailty assessment shows low risk, but continued monitoring is recommended.".to_string(),
        ],
    };

    if profile.condition_count() >= 3 {
        insights.push(
            "Managing multiple chronic conditions requires coordinated care - consider a care management program."
                .to_string(),
        );
    }

    if profile.medications_count >= 7 {
        insights.push(
            "High medication count increases risk of interactions - medication therapy management may be beneficial."
                .to_string(),
        );
    }

    if profile.recent_hospitalizations >= 2 {
        insights.push(
            "Frequent hospitalizations suggest need for better care coordination and preventive services."
                .to_string(),
        );
    }

    insights
}

/// Independent warning triggers. Severity prefixes are matched on by consumers.
pub(crate) fn identify_warnings(profile: &ClinicalProfile) -> Vec<String> {
    let mut warnings = Vec::new();

    if profile.recent_hospitalizations >= 3 {
        warnings.push(
            "CRITICAL: Three or more recent hospitalizations - immediate care coordination needed"
                .to_string(),
        );
    }

    if profile.mobility_level == MobilityLevel::Dependent && profile.cognitive_status.is_impaired()
    {
        warnings.push(
            "HIGH RISK: Combined mobility and cognitive impairment requires comprehensive support"
                .to_string(),
        );
    }

    if profile.medications_count >= 10 {
        warnings.push(
            "ALERT: Very high medication count - urgent medication review recommended".to_string(),
        );
    }

    if profile.activities_daily_living_score <= 3 {
        warnings.push(
            "CRITICAL: Severe limitations in daily activities - immediate assistance needed"
                .to_string(),
        );
    }

    let has_serious = profile
        .chronic_conditions
        .iter()
        .any(|condition| is_serious_condition(condition));
    if has_serious && profile.condition_count() >= 3 {
        warnings.push(
            "HIGH RISK: Multiple serious chronic conditions require specialized care management"
                .to_string(),
        );
    }

    warnings
}

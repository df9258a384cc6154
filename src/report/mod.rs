//! Member-facing assessment report assembled from a scored profile.

use crate::frailty::{ClinicalProfile, MobilityLevel, RiskAssessment, RiskTier};
use crate::guidance::{evaluate_eligibility, EligibilityReport};
use chrono::{Months, NaiveDate};
use serde::Serialize;

pub const REPORT_TITLE: &str = "Medical Frailty Assessment Report";
pub const REPORT_TYPE: &str = "frailty_assessment";
const FOLLOW_UP_MONTHS: u32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrailtyReport {
    pub title: &'static str,
    pub report_type: &'static str,
    pub generated_on: NaiveDate,
    pub follow_up_due: NaiveDate,
    pub frailty_score: f64,
    pub risk_level: RiskTier,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
    pub eligibility: EligibilityReport,
}

pub fn generate_report(
    profile: &ClinicalProfile,
    assessment: &RiskAssessment,
    generated_on: NaiveDate,
) -> FrailtyReport {
    let follow_up_due = generated_on
        .checked_add_months(Months::new(FOLLOW_UP_MONTHS))
        .unwrap_or(NaiveDate::MAX);

    FrailtyReport {
        title: REPORT_TITLE,
        report_type: REPORT_TYPE,
        generated_on,
        follow_up_due,
        frailty_score: assessment.frailty_score,
        risk_level: assessment.risk_level,
        summary: summary(assessment),
        recommendations: recommendations(profile, assessment.risk_level),
        next_steps: next_steps(assessment.risk_level),
        eligibility: evaluate_eligibility(assessment, profile),
    }
}

fn summary(assessment: &RiskAssessment) -> String {
    let description = match assessment.risk_level {
        RiskTier::High => "Your assessment indicates a high level of medical frailty. This means you likely meet the criteria for medical frailty exemptions under Indiana Medicaid.",
        RiskTier::Moderate => "Your assessment shows moderate indicators of medical frailty. You may qualify for additional support services and should discuss options with your healthcare provider.",
        RiskTier::Low => "Your assessment indicates low medical frailty at this time. Continue to monitor your health and maintain regular check-ups.",
    };

    format!(
        "Based on your health assessment, your frailty score is {:.1}%. {description} This assessment considers your chronic conditions, medications, recent hospitalizations, mobility, cognitive status, and daily living activities.",
        assessment.frailty_score * 100.0
    )
}

fn recommendations(profile: &ClinicalProfile, tier: RiskTier) -> Vec<String> {
    let mut recs = Vec::new();

    if tier == RiskTier::High {
        recs.push("Schedule an appointment with your primary care physician to discuss medical frailty exemption documentation");
        recs.push("Request a comprehensive medical evaluation to support your Medicaid application");
        recs.push("Consider applying for home health services if you have mobility limitations");
    }

    if profile.condition_count() >= 3 {
        recs.push("Ensure all chronic conditions are properly documented in your medical records");
        recs.push("Work with your healthcare team to develop a comprehensive care management plan");
    }

    if profile.medications_count >= 5 {
        recs.push("Request a medication review with your pharmacist to optimize your treatment plan");
    }

    if profile.recent_hospitalizations >= 2 {
        recs.push("Discuss strategies with your doctor to prevent future hospitalizations");
    }

    if profile.mobility_level != MobilityLevel::Independent {
        recs.push("Explore mobility assistance programs and adaptive equipment options");
    }

    if profile.cognitive_status.is_impaired() {
        recs.push("Consider a cognitive assessment to determine if additional support services are needed");
    }

    recs.into_iter().map(str::to_string).collect()
}

fn next_steps(tier: RiskTier) -> Vec<String> {
    let mut steps = vec![
        "Review this report with your healthcare provider".to_string(),
        "Gather all relevant medical documentation".to_string(),
    ];

    if matches!(tier, RiskTier::High | RiskTier::Moderate) {
        steps.push(
            "Contact Indiana Medicaid to discuss your eligibility for medical frailty exemptions"
                .to_string(),
        );
        steps.push(
            "Keep copies of all medical records and assessment reports for your application"
                .to_string(),
        );
    }

    steps.push(format!(
        "Schedule a follow-up assessment in {FOLLOW_UP_MONTHS} months to track any changes"
    ));

    steps
}

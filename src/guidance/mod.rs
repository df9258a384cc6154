//! Guidance applicability rules and the fixed exemption eligibility checklist.

mod catalog;
mod eligibility;
pub mod predicate;

pub use catalog::GuidanceCatalog;
pub use eligibility::{
    evaluate_eligibility, CriterionOutcome, EligibilityCriterion, EligibilityReport,
    QUALIFYING_CRITERIA_MIN,
};
pub use predicate::{evaluate_criterion, Comparison, Predicate};

use crate::frailty::{ClinicalProfile, RiskAssessment};
use serde::{Deserialize, Serialize};

/// Anything gated by applicability criteria strings.
pub trait Applicable {
    fn applicability_criteria(&self) -> &[String];
}

/// Guidance content shown to members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuidanceResource {
    pub id: u32,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resource_url: Option<String>,
    #[serde(default)]
    pub applicability_criteria: Vec<String>,
    #[serde(default)]
    pub priority: i32,
}

impl Applicable for GuidanceResource {
    fn applicability_criteria(&self) -> &[String] {
        &self.applicability_criteria
    }
}

/// No criteria means universally applicable; otherwise any single criterion suffices.
pub fn is_applicable(
    criteria: &[String],
    assessment: &RiskAssessment,
    profile: &ClinicalProfile,
) -> bool {
    criteria.is_empty()
        || criteria
            .iter()
            .any(|criterion| evaluate_criterion(criterion, assessment, profile))
}

/// Keeps the resources applicable to an assessment, preserving input order.
pub fn match_resources<'a, T: Applicable>(
    resources: &'a [T],
    assessment: &RiskAssessment,
    profile: &ClinicalProfile,
) -> Vec<&'a T> {
    resources
        .iter()
        .filter(|resource| is_applicable(resource.applicability_criteria(), assessment, profile))
        .collect()
}

#[cfg(test)]
mod tests;

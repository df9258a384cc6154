//! Frailty risk scoring: base score, record adjustment, tiering and narrative output.
//!
//! Every operation here is a pure function of its inputs. The engine only holds the
//! read-only condition catalog it was constructed with, so a single instance can be
//! shared across threads and used for any number of concurrent assessments.

pub mod catalog;
pub mod domain;
mod rules;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, ConditionWeight, FactorCatalog, SERIOUS_CONDITIONS};
pub use domain::{
    ClinicalProfile, CognitiveStatus, ContributingFactor, DiagnosisDetails, DiagnosisStatus,
    LabEntry, MobilityLevel, ProfileError, RecordDetail, RiskAssessment, RiskTier,
    SupplementaryRecord, VitalSigns,
};
pub use rules::{BaseScore, HIGH_RISK_THRESHOLD, MAX_RECORD_ADJUSTMENT, MODERATE_RISK_THRESHOLD};

use serde::Serialize;
use tracing::debug;

/// Stateless scorer parameterized by a condition catalog.
#[derive(Debug, Clone, Default)]
pub struct FrailtyEngine {
    catalog: FactorCatalog,
}

impl FrailtyEngine {
    pub fn new(catalog: FactorCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &FactorCatalog {
        &self.catalog
    }

    /// Scores a profile and any supplementary records into a full assessment.
    pub fn score(
        &self,
        profile: &ClinicalProfile,
        records: &[SupplementaryRecord],
    ) -> RiskAssessment {
        let breakdown = self.breakdown(profile, records);
        let frailty_score = breakdown.final_score();
        let risk_level = RiskTier::from_score(frailty_score);

        debug!(
            base = breakdown.base_total(),
            adjustment = breakdown.record_adjustment,
            frailty_score,
            risk_level = risk_level.token(),
            "frailty assessment scored"
        );

        RiskAssessment {
            frailty_score,
            risk_level,
            confidence_score: rules::confidence(profile, records.len()),
            contributing_factors: rules::rank_factors(profile),
            insights: rules::generate_insights(profile, risk_level),
            warning_flags: rules::identify_warnings(profile),
        }
    }

    /// Raw, unclamped base score for a profile.
    pub fn base_score(&self, profile: &ClinicalProfile) -> f64 {
        rules::score_profile(profile, &self.catalog).total()
    }

    /// Per-input contributions behind a score.
    pub fn breakdown(
        &self,
        profile: &ClinicalProfile,
        records: &[SupplementaryRecord],
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            base: rules::score_profile(profile, &self.catalog),
            record_adjustment: rules::record_adjustment(records),
        }
    }
}

/// Auditable view of every term that went into a frailty score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    #[serde(flatten)]
    pub base: BaseScore,
    pub record_adjustment: f64,
}

impl ScoreBreakdown {
    pub fn base_total(&self) -> f64 {
        self.base.total()
    }

    pub fn final_score(&self) -> f64 {
        rules::final_score(self.base.total(), self.record_adjustment)
    }
}

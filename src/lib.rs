pub mod config;
pub mod error;
pub mod frailty;
pub mod guidance;
pub mod report;
pub mod telemetry;

pub use frailty::{ClinicalProfile, FrailtyEngine, RiskAssessment, RiskTier, SupplementaryRecord};
pub use guidance::{evaluate_eligibility, match_resources};
pub use report::generate_report;

mod base;
mod classify;
mod factors;
mod narrative;
mod records;

pub use base::BaseScore;
pub use classify::{HIGH_RISK_THRESHOLD, MODERATE_RISK_THRESHOLD};
pub use records::MAX_RECORD_ADJUSTMENT;
pub(crate) use base::score_profile;
pub(crate) use classify::{confidence, final_score};
pub(crate) use factors::rank_factors;
pub(crate) use narrative::{generate_insights, identify_warnings};
pub(crate) use records::record_adjustment;

use super::common::*;
use crate::frailty::{
    CatalogError, ClinicalProfile, CognitiveStatus, ConditionWeight, FactorCatalog,
    FrailtyEngine, MobilityLevel, RiskTier, MAX_RECORD_ADJUSTMENT, MODERATE_RISK_THRESHOLD,
};

#[test]
fn healthy_profile_is_low_risk() {
    let assessment = engine().score(&ClinicalProfile::healthy(), &[]);

    assert_eq!(assessment.risk_level, RiskTier::Low);
    assert!(assessment.frailty_score < MODERATE_RISK_THRESHOLD);
    assert!(assessment.contributing_factors.is_empty());
    assert!(assessment.warning_flags.is_empty());
    assert_eq!(assessment.confidence_score, 0.5);
}

#[test]
fn severely_frail_profile_is_high_risk_with_critical_warning() {
    let assessment = engine().score(&severely_frail_profile(), &[]);

    assert_eq!(assessment.risk_level, RiskTier::High);
    assert!(assessment.frailty_score > 0.65);
    assert_eq!(assessment.frailty_score, 1.0);
    assert!(assessment
        .warning_flags
        .iter()
        .any(|warning| warning.contains("CRITICAL")));
    assert!(!assessment.contributing_factors.is_empty());
    assert!(assessment.insights[0].contains("medical frailty criteria"));
}

#[test]
fn only_triggered_factors_are_reported() {
    let profile = ClinicalProfile {
        activities_daily_living_score: 0,
        ..ClinicalProfile::healthy()
    };

    let assessment = engine().score(&profile, &[]);

    assert_eq!(assessment.contributing_factors.len(), 1);
    assert_eq!(
        assessment.contributing_factors[0].factor,
        "Activities of Daily Living"
    );
    assert!((assessment.frailty_score - 0.6).abs() < 1e-9);
}

#[test]
fn moderately_frail_profile_is_moderate_risk() {
    let assessment = engine().score(&moderately_frail_profile(), &[]);

    assert_eq!(assessment.risk_level, RiskTier::Moderate);
    assert!(assessment.frailty_score >= 0.35);
    assert!(assessment.frailty_score < 0.65);
}

#[test]
fn limited_mobility_with_mild_impairment_crosses_into_high_tier() {
    // Two conditions, five medications, one stay, limited mobility, mild impairment, ADL 6:
    // 0.14 + 0.10 + 0.10 + 0.25 + 0.12 + 0.24.
    let profile = ClinicalProfile {
        chronic_conditions: conditions(&["diabetes", "arthritis"]),
        medications_count: 5,
        recent_hospitalizations: 1,
        mobility_level: MobilityLevel::Limited,
        cognitive_status: CognitiveStatus::MildImpairment,
        activities_daily_living_score: 6,
    };

    let assessment = engine().score(&profile, &[]);

    assert!((assessment.frailty_score - 0.95).abs() < 1e-9);
    assert_eq!(assessment.risk_level, RiskTier::High);
}

#[test]
fn abnormal_vitals_raise_the_score() {
    let engine = engine();
    let profile = single_condition_profile();

    let without = engine.score(&profile, &[]);
    let with = engine.score(&profile, &[abnormal_vitals()]);

    assert!(with.frailty_score > without.frailty_score);
    assert!((with.frailty_score - without.frailty_score - 0.08).abs() < 1e-9);
}

#[test]
fn record_adjustment_never_exceeds_ceiling() {
    let engine = engine();
    let profile = ClinicalProfile::healthy();
    let records: Vec<_> = (0..10).map(|_| abnormal_vitals()).collect();

    let breakdown = engine.breakdown(&profile, &records);

    assert_eq!(breakdown.record_adjustment, MAX_RECORD_ADJUSTMENT);
    assert_eq!(engine.score(&profile, &records).risk_level, RiskTier::Low);
}

#[test]
fn supplementary_records_raise_confidence() {
    let engine = engine();
    let profile = single_condition_profile();

    let without = engine.score(&profile, &[]);
    let with = engine.score(&profile, &[normal_vitals()]);

    assert!(with.confidence_score > without.confidence_score);
    assert_eq!(with.frailty_score, without.frailty_score);

    let many: Vec<_> = (0..12).map(|_| normal_vitals()).collect();
    let capped = engine.score(&profile, &many);
    assert!((capped.confidence_score - (without.confidence_score + 0.3)).abs() < 1e-9);
}

#[test]
fn scoring_is_repeatable() {
    let engine = engine();
    let profile = severely_frail_profile();
    let records = vec![abnormal_vitals(), normal_vitals()];

    let first = engine.score(&profile, &records);
    let second = engine.score(&profile, &records);

    assert_eq!(first, second);
    assert_eq!(first.frailty_score.to_bits(), second.frailty_score.to_bits());
}

#[test]
fn engine_can_be_shared_across_threads() {
    let engine = engine();
    let profiles = vec![
        ClinicalProfile::healthy(),
        moderately_frail_profile(),
        severely_frail_profile(),
        single_condition_profile(),
    ];
    let expected: Vec<_> = profiles.iter().map(|p| engine.score(p, &[])).collect();

    let shared = &engine;
    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = profiles
            .iter()
            .map(|profile| scope.spawn(move || shared.score(profile, &[])))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("scoring thread completes"))
            .collect()
    });

    assert_eq!(parallel, expected);
}

#[test]
fn substitute_catalog_changes_condition_weights() -> Result<(), CatalogError> {
    let catalog = FactorCatalog::new(
        vec![ConditionWeight {
            pattern: "Diabetes".to_string(),
            weight: 0.3,
        }],
        0.0,
    )?;
    let engine = FrailtyEngine::new(catalog);
    let profile = ClinicalProfile {
        chronic_conditions: conditions(&["type 2 diabetes", "gout"]),
        ..ClinicalProfile::healthy()
    };

    assert!((engine.base_score(&profile) - 0.3).abs() < 1e-12);
    assert_eq!(engine.score(&profile, &[]).risk_level, RiskTier::Low);
    Ok(())
}

#[test]
fn breakdown_exposes_the_base_score_terms() {
    let engine = engine();
    let profile = severely_frail_profile();

    let breakdown = engine.breakdown(&profile, &[abnormal_vitals()]);

    assert_eq!(breakdown.base_total(), engine.base_score(&profile));
    assert_eq!(breakdown.base_total(), breakdown.base.total());
    assert_eq!(breakdown.final_score(), 1.0);

    let json = serde_json::to_value(breakdown).expect("breakdown serializes");
    assert_eq!(json["mobility"], 0.45);
    assert!(json.get("base").is_none());
    assert!(json["record_adjustment"].is_number());
}

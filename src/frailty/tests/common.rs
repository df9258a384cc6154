use crate::frailty::{
    ClinicalProfile, CognitiveStatus, FrailtyEngine, MobilityLevel, SupplementaryRecord,
    VitalSigns,
};

pub(super) fn engine() -> FrailtyEngine {
    FrailtyEngine::default()
}

pub(super) fn conditions(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

pub(super) fn severely_frail_profile() -> ClinicalProfile {
    ClinicalProfile {
        chronic_conditions: conditions(&["diabetes", "heart disease", "copd", "dementia"]),
        medications_count: 12,
        recent_hospitalizations: 3,
        mobility_level: MobilityLevel::Dependent,
        cognitive_status: CognitiveStatus::ModerateImpairment,
        activities_daily_living_score: 3,
    }
}

pub(super) fn moderately_frail_profile() -> ClinicalProfile {
    ClinicalProfile {
        chronic_conditions: conditions(&["diabetes", "arthritis"]),
        medications_count: 5,
        recent_hospitalizations: 1,
        mobility_level: MobilityLevel::Independent,
        cognitive_status: CognitiveStatus::Normal,
        activities_daily_living_score: 9,
    }
}

pub(super) fn single_condition_profile() -> ClinicalProfile {
    ClinicalProfile {
        chronic_conditions: conditions(&["diabetes"]),
        medications_count: 3,
        recent_hospitalizations: 0,
        mobility_level: MobilityLevel::Independent,
        cognitive_status: CognitiveStatus::Normal,
        activities_daily_living_score: 9,
    }
}

pub(super) fn abnormal_vitals() -> SupplementaryRecord {
    SupplementaryRecord::vital_signs(VitalSigns {
        blood_pressure_systolic: Some(180.0),
        oxygen_saturation: Some(88.0),
        ..VitalSigns::default()
    })
}

pub(super) fn normal_vitals() -> SupplementaryRecord {
    SupplementaryRecord::vital_signs(VitalSigns {
        blood_pressure_systolic: Some(120.0),
        blood_pressure_diastolic: Some(80.0),
        heart_rate: Some(72.0),
        ..VitalSigns::default()
    })
}

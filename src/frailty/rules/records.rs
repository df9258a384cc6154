use super::super::domain::{
    DiagnosisDetails, DiagnosisStatus, RecordDetail, SupplementaryRecord, VitalSigns,
};

pub const MAX_RECORD_ADJUSTMENT: f64 = 0.3;

const HYPERTENSIVE_SYSTOLIC: f64 = 160.0;
const HYPOTENSIVE_SYSTOLIC: f64 = 90.0;
const TACHYCARDIC_HEART_RATE: f64 = 100.0;
const BRADYCARDIC_HEART_RATE: f64 = 50.0;
const HYPOXIC_SATURATION: f64 = 92.0;
const UNDERWEIGHT_BMI: f64 = 18.5;
const OBESE_BMI: f64 = 35.0;

/// Additive adjustment from supplementary records, capped at [`MAX_RECORD_ADJUSTMENT`].
pub(crate) fn record_adjustment(records: &[SupplementaryRecord]) -> f64 {
    let total: f64 = records
        .iter()
        .map(|record| match &record.detail {
            RecordDetail::VitalSigns(vitals) => vital_signs_adjustment(vitals),
            RecordDetail::LabResult { lab_results } => {
                lab_results.iter().filter(|lab| lab.is_abnormal()).count() as f64 * 0.01
            }
            RecordDetail::Diagnosis(details) => diagnosis_adjustment(details),
            RecordDetail::Other => 0.0,
        })
        .sum();

    total.min(MAX_RECORD_ADJUSTMENT)
}

fn vital_signs_adjustment(vitals: &VitalSigns) -> f64 {
    let mut adjustment = 0.0;

    if let Some(systolic) = reading(vitals.blood_pressure_systolic) {
        if systolic > HYPERTENSIVE_SYSTOLIC {
            adjustment += 0.03;
        }
        if systolic < HYPOTENSIVE_SYSTOLIC {
            adjustment += 0.04;
        }
    }

    if let Some(rate) = reading(vitals.heart_rate) {
        if rate > TACHYCARDIC_HEART_RATE || rate < BRADYCARDIC_HEART_RATE {
            adjustment += 0.02;
        }
    }

    if let Some(saturation) = reading(vitals.oxygen_saturation) {
        if saturation < HYPOXIC_SATURATION {
            adjustment += 0.05;
        }
    }

    if let Some(bmi) = reading(vitals.bmi) {
        if bmi < UNDERWEIGHT_BMI || bmi > OBESE_BMI {
            adjustment += 0.03;
        }
    }

    adjustment
}

fn diagnosis_adjustment(details: &DiagnosisDetails) -> f64 {
    let severe = details
        .severity
        .as_deref()
        .is_some_and(|severity| severity == "severe");
    let chronic = details.status == Some(DiagnosisStatus::Chronic);

    if severe || chronic {
        0.02
    } else {
        0.0
    }
}

/// Zero or non-finite readings are treated as not taken.
fn reading(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

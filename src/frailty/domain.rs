use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structured clinical inputs captured for a single frailty assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalProfile {
    #[serde(default)]
    pub chronic_conditions: Vec<String>,
    #[serde(default)]
    pub medications_count: u32,
    #[serde(default)]
    pub recent_hospitalizations: u32,
    pub mobility_level: MobilityLevel,
    pub cognitive_status: CognitiveStatus,
    /// Activities of daily living, 0 to 10 where 10 is fully independent.
    pub activities_daily_living_score: u8,
}

impl ClinicalProfile {
    /// Profile with no recorded risk: no conditions, independent, unimpaired, ADL 10.
    pub fn healthy() -> Self {
        Self {
            chronic_conditions: Vec::new(),
            medications_count: 0,
            recent_hospitalizations: 0,
            mobility_level: MobilityLevel::Independent,
            cognitive_status: CognitiveStatus::Normal,
            activities_daily_living_score: MAX_ADL_SCORE,
        }
    }

    pub fn condition_count(&self) -> usize {
        self.chronic_conditions.len()
    }

    pub fn has_chronic_conditions(&self) -> bool {
        !self.chronic_conditions.is_empty()
    }

    /// Boundary check for caller-supplied profiles. Scoring assumes it has passed.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.activities_daily_living_score > MAX_ADL_SCORE {
            return Err(ProfileError::AdlOutOfRange(
                self.activities_daily_living_score,
            ));
        }
        Ok(())
    }
}

pub const MAX_ADL_SCORE: u8 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("activities of daily living score must be between 0 and 10 (found {0})")]
    AdlOutOfRange(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MobilityLevel {
    Independent,
    Limited,
    Dependent,
}

impl MobilityLevel {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Independent => "independent",
            Self::Limited => "limited",
            Self::Dependent => "dependent",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "independent" => Some(Self::Independent),
            "limited" => Some(Self::Limited),
            "dependent" => Some(Self::Dependent),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Independent => "Independent",
            Self::Limited => "Limited",
            Self::Dependent => "Dependent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveStatus {
    Normal,
    MildImpairment,
    ModerateImpairment,
    SevereImpairment,
}

impl CognitiveStatus {
    pub const fn is_impaired(self) -> bool {
        !matches!(self, Self::Normal)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::MildImpairment => "mild impairment",
            Self::ModerateImpairment => "moderate impairment",
            Self::SevereImpairment => "severe impairment",
        }
    }
}

/// Optional auxiliary record supplied alongside a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementaryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_on: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub detail: RecordDetail,
}

impl SupplementaryRecord {
    pub fn new(detail: RecordDetail) -> Self {
        Self {
            recorded_on: None,
            title: None,
            detail,
        }
    }

    pub fn vital_signs(vitals: VitalSigns) -> Self {
        Self::new(RecordDetail::VitalSigns(vitals))
    }

    pub fn lab_results(entries: Vec<LabEntry>) -> Self {
        Self::new(RecordDetail::LabResult {
            lab_results: entries,
        })
    }

    pub fn diagnosis(details: DiagnosisDetails) -> Self {
        Self::new(RecordDetail::Diagnosis(details))
    }
}

/// Kind-specific payload, tagged by `record_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "record_type", rename_all = "snake_case")]
pub enum RecordDetail {
    VitalSigns(VitalSigns),
    LabResult {
        #[serde(default)]
        lab_results: Vec<LabEntry>,
    },
    Diagnosis(DiagnosisDetails),
    /// Medications, procedures, immunizations, allergies and anything else untyped.
    #[serde(other)]
    Other,
}

/// Individual readings; anything not measured stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalSigns {
    pub blood_pressure_systolic: Option<f64>,
    pub blood_pressure_diastolic: Option<f64>,
    pub heart_rate: Option<f64>,
    pub temperature: Option<f64>,
    pub respiratory_rate: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub bmi: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabEntry {
    pub test_name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_range: Option<String>,
    #[serde(default)]
    pub abnormal_flag: Option<bool>,
}

impl LabEntry {
    pub fn is_abnormal(&self) -> bool {
        self.abnormal_flag.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosisDetails {
    pub condition: String,
    pub icd_code: Option<String>,
    pub severity: Option<String>,
    pub status: Option<DiagnosisStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisStatus {
    Active,
    Resolved,
    Chronic,
}

/// Discrete classification of the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// Named explanation of what drove a score, ranked by impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributingFactor {
    pub factor: String,
    pub impact: f64,
    pub description: String,
}

/// Engine output for a single profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub frailty_score: f64,
    pub risk_level: RiskTier,
    pub confidence_score: f64,
    pub contributing_factors: Vec<ContributingFactor>,
    pub insights: Vec<String>,
    pub warning_flags: Vec<String>,
}

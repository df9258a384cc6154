use serde::{Deserialize, Serialize};
use std::io::Read;

pub const DEFAULT_CONDITION_WEIGHT: f64 = 0.05;

/// Conditions whose presence alongside other chronic conditions calls for specialized care.
pub const SERIOUS_CONDITIONS: [&str; 4] = [
    "dementia",
    "chronic kidney disease",
    "heart failure",
    "copd",
];

/// Single catalog row: a lower-cased label fragment and the weight it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionWeight {
    pub pattern: String,
    pub weight: f64,
}

/// Ordered condition-to-weight table consulted by the base score.
///
/// Lookup is case-insensitive substring containment and the first matching row in
/// catalog order wins. Rows may overlap, so the order is significant and preserved
/// exactly as supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorCatalog {
    entries: Vec<ConditionWeight>,
    default_weight: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog row {row} has a blank condition pattern")]
    BlankPattern { row: usize },
    #[error("weight {weight} for '{pattern}' must be a finite value between 0 and 1")]
    InvalidWeight { pattern: String, weight: f64 },
    #[error("catalog row {row}: {detail}")]
    InvalidRow { row: usize, detail: String },
}

impl FactorCatalog {
    pub fn new(
        entries: Vec<ConditionWeight>,
        default_weight: f64,
    ) -> Result<Self, CatalogError> {
        validate_weight("default", default_weight)?;

        let mut normalized = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let pattern = entry.pattern.trim().to_lowercase();
            if pattern.is_empty() {
                return Err(CatalogError::BlankPattern { row: index + 1 });
            }
            validate_weight(&pattern, entry.weight)?;
            normalized.push(ConditionWeight {
                pattern,
                weight: entry.weight,
            });
        }

        Ok(Self {
            entries: normalized,
            default_weight,
        })
    }

    /// Canonical weights used for every stored assessment.
    pub fn standard() -> Self {
        const STANDARD: [(&str, f64); 10] = [
            ("diabetes", 0.08),
            ("heart disease", 0.12),
            ("copd", 0.10),
            ("chronic kidney disease", 0.15),
            ("dementia", 0.18),
            ("stroke", 0.14),
            ("cancer", 0.13),
            ("arthritis", 0.06),
            ("osteoporosis", 0.08),
            ("depression", 0.07),
        ];

        Self {
            entries: STANDARD
                .iter()
                .map(|(pattern, weight)| ConditionWeight {
                    pattern: (*pattern).to_string(),
                    weight: *weight,
                })
                .collect(),
            default_weight: DEFAULT_CONDITION_WEIGHT,
        }
    }

    /// Reads a `condition,weight` CSV. Unmatched conditions keep the standard default weight.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for row in csv_reader.deserialize::<CatalogRow>() {
            let row = row?;
            entries.push(ConditionWeight {
                pattern: row.condition,
                weight: row.weight,
            });
        }

        Self::new(entries, DEFAULT_CONDITION_WEIGHT)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn entries(&self) -> &[ConditionWeight] {
        &self.entries
    }

    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    /// Weight for a free-text condition label.
    pub fn weight_for(&self, condition: &str) -> f64 {
        let lowered = condition.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowered.contains(entry.pattern.as_str()))
            .map(|entry| entry.weight)
            .unwrap_or(self.default_weight)
    }
}

impl Default for FactorCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    condition: String,
    weight: f64,
}

pub(crate) fn is_serious_condition(condition: &str) -> bool {
    let lowered = condition.to_lowercase();
    SERIOUS_CONDITIONS
        .iter()
        .any(|serious| lowered.contains(serious))
}

fn validate_weight(pattern: &str, weight: f64) -> Result<(), CatalogError> {
    if weight.is_finite() && (0.0..=1.0).contains(&weight) {
        Ok(())
    } else {
        Err(CatalogError::InvalidWeight {
            pattern: pattern.to_string(),
            weight,
        })
    }
}

use super::{is_applicable, Applicable, GuidanceResource};
use crate::frailty::{CatalogError, ClinicalProfile, RiskAssessment};
use serde::{Deserialize, Deserializer};
use std::cmp::Reverse;
use std::io::Read;
use std::path::Path;

/// In-memory guidance catalog with the listing order used for display.
#[derive(Debug, Clone, Default)]
pub struct GuidanceCatalog {
    resources: Vec<GuidanceResource>,
}

impl GuidanceCatalog {
    pub fn new(resources: Vec<GuidanceResource>) -> Self {
        Self { resources }
    }

    /// Built-in resources covering each applicability field.
    pub fn standard() -> Self {
        let resource = |id: u32,
                        category: &str,
                        title: &str,
                        description: &str,
                        criteria: &[&str],
                        priority: i32| GuidanceResource {
            id,
            category: category.to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
            resource_url: None,
            applicability_criteria: criteria.iter().map(|c| c.to_string()).collect(),
            priority,
        };

        Self::new(vec![
            resource(
                1,
                "exemptions",
                "Applying for a Medical Frailty Exemption",
                "Documentation your physician needs to certify medical frailty.",
                &["risk_level = high", "frailty_score >= 0.65"],
                10,
            ),
            resource(
                2,
                "services",
                "Enhanced Medicaid Services",
                "Support services available to members with moderate frailty indicators.",
                &["risk_level = moderate"],
                8,
            ),
            resource(
                3,
                "care_management",
                "Chronic Condition Care Management",
                "Coordinating care across specialists and primary care.",
                &["chronic_conditions"],
                7,
            ),
            resource(
                4,
                "home_health",
                "Home Health and Personal Care Aides",
                "In-home assistance for members who rely on others to get around.",
                &["mobility_level = dependent", "mobility_level = limited"],
                6,
            ),
            resource(
                5,
                "prevention",
                "Staying Active and Preventing Falls",
                "Exercises and home changes that reduce fall risk.",
                &["frailty_score < 0.35"],
                4,
            ),
            resource(
                6,
                "general",
                "Understanding Your Frailty Assessment",
                "What each part of the assessment measures and how it is used.",
                &[],
                5,
            ),
        ])
    }

    /// Reads resources from CSV; criteria are `;`-separated in `applicability_criteria`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut resources = Vec::new();
        for (index, row) in csv_reader.deserialize::<ResourceRow>().enumerate() {
            let row = row?;
            if row.title.is_empty() {
                return Err(CatalogError::InvalidRow {
                    row: index + 1,
                    detail: "resource title is blank".to_string(),
                });
            }
            resources.push(row.into_resource());
        }

        Ok(Self::new(resources))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn resources(&self) -> &[GuidanceResource] {
        &self.resources
    }

    /// Resources ordered by priority (highest first) then title, optionally for one category.
    pub fn list(&self, category: Option<&str>) -> Vec<&GuidanceResource> {
        let mut listed: Vec<&GuidanceResource> = self
            .resources
            .iter()
            .filter(|resource| category.map_or(true, |c| resource.category == c))
            .collect();
        listed.sort_by(|a, b| {
            (Reverse(a.priority), a.title.as_str()).cmp(&(Reverse(b.priority), b.title.as_str()))
        });
        listed
    }

    /// Listing filtered against the member's latest assessment.
    ///
    /// Without an assessment only universally applicable resources are returned.
    pub fn personalized(
        &self,
        latest: Option<(&RiskAssessment, &ClinicalProfile)>,
        category: Option<&str>,
    ) -> Vec<&GuidanceResource> {
        self.list(category)
            .into_iter()
            .filter(|resource| match latest {
                Some((assessment, profile)) => {
                    is_applicable(resource.applicability_criteria(), assessment, profile)
                }
                None => resource.applicability_criteria().is_empty(),
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ResourceRow {
    id: u32,
    category: String,
    title: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    resource_url: Option<String>,
    #[serde(default)]
    applicability_criteria: String,
    #[serde(default)]
    priority: i32,
}

impl ResourceRow {
    fn into_resource(self) -> GuidanceResource {
        let applicability_criteria = self
            .applicability_criteria
            .split(';')
            .map(str::trim)
            .filter(|criterion| !criterion.is_empty())
            .map(str::to_string)
            .collect();

        GuidanceResource {
            id: self.id,
            category: self.category,
            title: self.title,
            description: self.description,
            resource_url: self.resource_url,
            applicability_criteria,
            priority: self.priority,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

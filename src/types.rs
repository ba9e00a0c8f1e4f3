//! Record types returned by the records API.
//!
//! Records are pass-through: every field is optional and nothing is
//! validated or normalized. A field whose JSON value has an unexpected type
//! never fails the record. Scalars are kept as text and compound values are
//! dropped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PortalError, Result};

/// Which of the two record lists something refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordKind {
    #[default]
    Company,
    Project,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::Company, RecordKind::Project];

    pub fn toggle(self) -> Self {
        match self {
            RecordKind::Company => RecordKind::Project,
            RecordKind::Project => RecordKind::Company,
        }
    }

    /// Singular noun, lowercase
    pub fn noun(self) -> &'static str {
        match self {
            RecordKind::Company => "company",
            RecordKind::Project => "project",
        }
    }

    /// Plural noun, capitalized (tab and heading text)
    pub fn plural_title(self) -> &'static str {
        match self {
            RecordKind::Company => "Companies",
            RecordKind::Project => "Projects",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.noun())
    }
}

impl FromStr for RecordKind {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "company" | "companies" => Ok(RecordKind::Company),
            "project" | "projects" => Ok(RecordKind::Project),
            _ => Err(PortalError::Other(format!(
                "unknown record kind '{s}', expected 'companies' or 'projects'"
            ))),
        }
    }
}

/// A registered company
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    #[serde(rename = "_id", deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub business_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub contact_person_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub contact_person_designation: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone_number: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub company_website: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub years_in_operation: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub number_of_employees: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub annual_turnover: Option<String>,
    /// Comma-delimited list, see [`Company::expertise_tags`]
    #[serde(deserialize_with = "lenient::text")]
    pub areas_of_expertise: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub office_address: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub relevant_licenses: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub company_registration_number: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub tax_registration_number: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub equipment_owned: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub hse_policy: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub past_project_references: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub safety_record: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub company_profile: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub not_blacklisted: Option<bool>,
    #[serde(deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
}

impl Company {
    /// Expertise areas split on commas, trimmed, blanks dropped
    pub fn expertise_tags(&self) -> Vec<&str> {
        self.areas_of_expertise
            .as_deref()
            .map(|areas| {
                areas
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether the company is cleared to work with (the status badge)
    pub fn is_active(&self) -> bool {
        self.not_blacklisted.unwrap_or(false)
    }
}

/// A submitted project inquiry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(rename = "_id", deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub project_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone_number: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub project_details: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
}

/// One record of either kind, as shown in the detail modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Company(Company),
    Project(Project),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Company(_) => RecordKind::Company,
            Record::Project(_) => RecordKind::Project,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Record::Company(c) => c.id.as_deref(),
            Record::Project(p) => p.id.as_deref(),
        }
    }
}

/// Stable key for a rendered card: the record id, or its position when the
/// API sent none
pub fn record_key(kind: RecordKind, id: Option<&str>, index: usize) -> String {
    match id {
        Some(id) if !id.is_empty() => format!("{}:{}", kind.noun(), id),
        _ => format!("{}#{}", kind.noun(), index),
    }
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Any scalar becomes text; null, arrays and objects become `None`
    pub fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        })
    }

    /// Booleans, "true"/"false" strings and 0/1 numbers
    pub fn flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(b) => Some(b),
            Value::String(s) => match s.trim().to_lowercase().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            Value::Number(n) => n.as_f64().map(|v| v != 0.0),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_from_api_json() {
        let json = r#"{
            "_id": "65a1",
            "companyName": "Acme Corp",
            "contactPersonName": "Jane",
            "email": "jane@acme.com",
            "yearsInOperation": 12,
            "numberOfEmployees": "40",
            "notBlacklisted": true,
            "createdAt": "2024-01-05T10:00:00.000Z",
            "__v": 0
        }"#;

        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.id.as_deref(), Some("65a1"));
        assert_eq!(company.company_name.as_deref(), Some("Acme Corp"));
        assert_eq!(company.years_in_operation.as_deref(), Some("12"));
        assert_eq!(company.number_of_employees.as_deref(), Some("40"));
        assert!(company.is_active());
        assert!(company.business_type.is_none());
    }

    #[test]
    fn test_malformed_fields_do_not_fail_the_record() {
        let json = r#"{
            "companyName": {"en": "Acme"},
            "email": ["a@b.c"],
            "phoneNumber": null,
            "notBlacklisted": "maybe"
        }"#;

        let company: Company = serde_json::from_str(json).unwrap();
        assert!(company.company_name.is_none());
        assert!(company.email.is_none());
        assert!(company.phone_number.is_none());
        assert!(company.not_blacklisted.is_none());
        assert!(!company.is_active());
    }

    #[test]
    fn test_flag_accepts_strings_and_numbers() {
        let c: Company = serde_json::from_str(r#"{"notBlacklisted": "TRUE"}"#).unwrap();
        assert_eq!(c.not_blacklisted, Some(true));
        let c: Company = serde_json::from_str(r#"{"notBlacklisted": 0}"#).unwrap();
        assert_eq!(c.not_blacklisted, Some(false));
    }

    #[test]
    fn test_project_from_api_json() {
        let json = r#"{"_id": "p1", "name": "Warehouse", "projectType": "Construction"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.name.as_deref(), Some("Warehouse"));
        assert_eq!(project.project_type.as_deref(), Some("Construction"));
        assert!(project.project_details.is_none());
    }

    #[test]
    fn test_expertise_tags() {
        let company = Company {
            areas_of_expertise: Some("Civil, MEP ,, Fit-out,".to_string()),
            ..Default::default()
        };
        assert_eq!(company.expertise_tags(), vec!["Civil", "MEP", "Fit-out"]);
        assert!(Company::default().expertise_tags().is_empty());
    }

    #[test]
    fn test_record_kind_parse_and_toggle() {
        assert_eq!("companies".parse::<RecordKind>().unwrap(), RecordKind::Company);
        assert_eq!("Project".parse::<RecordKind>().unwrap(), RecordKind::Project);
        assert!("people".parse::<RecordKind>().is_err());
        assert_eq!(RecordKind::Company.toggle(), RecordKind::Project);
        assert_eq!(RecordKind::default(), RecordKind::Company);
    }

    #[test]
    fn test_record_key_falls_back_to_index() {
        assert_eq!(record_key(RecordKind::Company, Some("a1"), 3), "company:a1");
        assert_eq!(record_key(RecordKind::Project, None, 3), "project#3");
        assert_eq!(record_key(RecordKind::Project, Some(""), 0), "project#0");
    }
}

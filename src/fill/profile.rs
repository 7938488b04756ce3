use crate::detect::field_type::FieldType;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Snapshot of the signed-in user's profile, as served by the dashboard
/// backend. Every field is optional: a missing attribute is an explicit
/// "no value", never an empty string that could overwrite real data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub preferred_locations: Option<Vec<String>>,
    pub desired_titles: Option<Vec<String>>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub salary_expectation: Option<String>,
    pub availability: Option<String>,
    pub visa_status: Option<String>,
}

impl UserProfile {
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::JsonParse {
            context: "user profile".to_string(),
            source: e,
        })
    }

    pub fn from_json_file(path: &str) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path).map_err(|e| EngineError::Io {
            context: format!("reading profile '{}'", path),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// Resolve the profile value for a semantic field type.
    ///
    /// This is the fixed mapping table of the autofill executor. Field
    /// types with no sensible profile counterpart (resume uploads, cover
    /// letters, free-text questions) resolve to None and are skipped.
    pub fn value_for(&self, field_type: FieldType) -> Option<String> {
        match field_type {
            FieldType::FullName => self.full_name_value(),
            FieldType::FirstName => nonempty(&self.first_name),
            FieldType::LastName => nonempty(&self.last_name),
            FieldType::Email => nonempty(&self.email),
            FieldType::Phone => nonempty(&self.phone),
            FieldType::Linkedin => nonempty(&self.linkedin),
            FieldType::Portfolio => nonempty(&self.portfolio),
            FieldType::Skills => join_list(&self.skills),
            FieldType::Location => join_list(&self.preferred_locations),
            FieldType::Experience => nonempty(&self.experience),
            FieldType::Education => nonempty(&self.education),
            FieldType::Salary => nonempty(&self.salary_expectation),
            FieldType::Availability => nonempty(&self.availability),
            FieldType::Visa => nonempty(&self.visa_status),

            // Free-text and upload fields have no profile mapping
            FieldType::Resume
            | FieldType::CoverLetter
            | FieldType::Motivation
            | FieldType::Other => None,
        }
    }

    /// Full name falls back to "first last" when no explicit full name
    /// is stored.
    fn full_name_value(&self) -> Option<String> {
        if let Some(full) = nonempty(&self.full_name) {
            return Some(full);
        }
        let first = nonempty(&self.first_name);
        let last = nonempty(&self.last_name);
        match (first, last) {
            (Some(f), Some(l)) => Some(format!("{} {}", f, l)),
            (Some(f), None) => Some(f),
            (None, Some(l)) => Some(l),
            (None, None) => None,
        }
    }
}

fn nonempty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn join_list(values: &Option<Vec<String>>) -> Option<String> {
    let items: Vec<&str> = values
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}

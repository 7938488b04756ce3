use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of a job-application form field.
///
/// The variant order here mirrors nothing; the classification priority
/// lives in the pattern table (`classifier::pattern_table`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    FullName,
    FirstName,
    LastName,
    Email,
    Phone,
    Resume,
    CoverLetter,
    Experience,
    Skills,
    Education,
    Linkedin,
    Portfolio,
    Salary,
    Location,
    Availability,
    Visa,
    Motivation,
    Other,
}

impl FieldType {
    /// Human-readable name for console reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            FieldType::FullName => "Full name",
            FieldType::FirstName => "First name",
            FieldType::LastName => "Last name",
            FieldType::Email => "Email",
            FieldType::Phone => "Phone",
            FieldType::Resume => "Resume",
            FieldType::CoverLetter => "Cover letter",
            FieldType::Experience => "Experience",
            FieldType::Skills => "Skills",
            FieldType::Education => "Education",
            FieldType::Linkedin => "LinkedIn",
            FieldType::Portfolio => "Portfolio",
            FieldType::Salary => "Salary",
            FieldType::Location => "Location",
            FieldType::Availability => "Availability",
            FieldType::Visa => "Visa / work authorization",
            FieldType::Motivation => "Motivation",
            FieldType::Other => "Other question",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

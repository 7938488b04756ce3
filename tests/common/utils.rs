#![allow(dead_code)]

use form_autofill::fill::profile::UserProfile;
use form_autofill::page::document::Document;
use serde_json::{Value, json};

// =========================================================================
// Snapshot builders — assemble page snapshot JSON in test code
// =========================================================================

pub fn doc(nodes: Vec<Value>) -> Document {
    let snapshot = json!({
        "url": "https://jobs.example.com/postings/123/apply",
        "title": "Apply — Example Co",
        "dom": nodes,
    });
    Document::from_json_str(&snapshot.to_string()).expect("valid test snapshot")
}

pub fn fixture(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    base.join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}

pub fn input(id: &str) -> Value {
    json!({ "tag": "input", "id": id })
}

pub fn typed_input(id: &str, input_type: &str) -> Value {
    json!({ "tag": "input", "id": id, "type": input_type })
}

pub fn textarea(id: &str) -> Value {
    json!({ "tag": "textarea", "id": id })
}

pub fn label_for(target: &str, text: &str) -> Value {
    json!({ "tag": "label", "for": target, "text": text })
}

pub fn div(children: Vec<Value>) -> Value {
    json!({ "tag": "div", "children": children })
}

pub fn div_with_text(text: &str, children: Vec<Value>) -> Value {
    json!({ "tag": "div", "text": text, "children": children })
}

/// A labeled input the way most application forms mark them up:
/// `<label for=id>text</label><input id=id>` side by side.
pub fn labeled_input(id: &str, label_text: &str) -> Vec<Value> {
    vec![label_for(id, label_text), input(id)]
}

pub fn form(form_id: &str, children: Vec<Value>) -> Value {
    json!({ "tag": "form", "id": form_id, "children": children })
}

// =========================================================================
// Profile builders
// =========================================================================

pub fn full_profile() -> UserProfile {
    UserProfile {
        first_name: Some("Ada".into()),
        last_name: Some("Lovelace".into()),
        full_name: None,
        email: Some("ada@example.com".into()),
        phone: Some("555-0100".into()),
        linkedin: Some("https://linkedin.com/in/ada".into()),
        portfolio: Some("https://ada.dev".into()),
        skills: Some(vec!["Rust".into(), "Analysis".into()]),
        preferred_locations: Some(vec!["London".into(), "Remote".into()]),
        desired_titles: Some(vec!["Engineer".into()]),
        experience: Some("10 years of engine design".into()),
        education: Some("University of London".into()),
        salary_expectation: Some("100000".into()),
        availability: Some("Two weeks notice".into()),
        visa_status: Some("Citizen".into()),
    }
}

pub fn minimal_profile() -> UserProfile {
    UserProfile {
        first_name: Some("Ada".into()),
        email: Some("ada@example.com".into()),
        ..UserProfile::default()
    }
}

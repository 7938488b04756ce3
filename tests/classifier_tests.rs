use form_autofill::detect::classifier::{FieldSignals, classify};
use form_autofill::detect::field_type::FieldType;

fn signals(label: &str, id: &str, name: &str, placeholder: &str, kind: &str) -> FieldSignals {
    FieldSignals {
        label: label.into(),
        id: id.into(),
        name: name.into(),
        placeholder: placeholder.into(),
        kind: kind.into(),
    }
}

fn labeled(label: &str) -> FieldSignals {
    signals(label, "", "", "", "text")
}

// =========================================================================
// Classification determinism
// =========================================================================

#[test]
fn classification_is_deterministic() {
    let s = signals("Email Address", "email_field", "", "", "text");

    let first = classify(&s);
    assert_eq!(first, Some(FieldType::Email), "Email label must classify as email");

    for _ in 0..10 {
        assert_eq!(classify(&s), first, "Same signals must always classify the same");
    }
}

// =========================================================================
// Priority ordering — most-specific-first ladder
// =========================================================================

#[test]
fn first_name_is_not_swallowed_by_full_name() {
    assert_eq!(
        classify(&labeled("First Name")),
        Some(FieldType::FirstName),
        "First Name must win over the generic name rule"
    );
    assert_eq!(
        classify(&signals("", "fname", "", "", "text")),
        Some(FieldType::FirstName),
        "fname id alone is enough"
    );
}

#[test]
fn last_name_is_not_swallowed_by_full_name() {
    assert_eq!(classify(&labeled("Last Name")), Some(FieldType::LastName));
    assert_eq!(classify(&labeled("Surname")), Some(FieldType::LastName));
}

#[test]
fn bare_name_classifies_as_full_name() {
    assert_eq!(classify(&labeled("Name")), Some(FieldType::FullName));
    assert_eq!(classify(&labeled("Full Name")), Some(FieldType::FullName));
    assert_eq!(classify(&labeled("Your name")), Some(FieldType::FullName));
}

#[test]
fn company_and_user_names_are_not_full_name() {
    assert_eq!(
        classify(&labeled("Company Name")),
        None,
        "Company name must not be filled with the applicant's name"
    );
    assert_eq!(
        classify(&signals("", "username", "", "", "text")),
        None,
        "Usernames are not applicant names"
    );
}

#[test]
fn cover_letter_wins_over_motivation_prose() {
    assert_eq!(
        classify(&labeled("Cover letter: why do you want this role?")),
        Some(FieldType::CoverLetter),
        "Cover letter must be tested before the why/motivation rule"
    );
}

#[test]
fn linkedin_wins_over_generic_url() {
    assert_eq!(
        classify(&signals("LinkedIn Profile", "", "", "", "url")),
        Some(FieldType::Linkedin)
    );
    assert_eq!(
        classify(&signals("Personal website", "", "", "", "url")),
        Some(FieldType::Portfolio),
        "Non-LinkedIn urls fall through to portfolio"
    );
}

#[test]
fn email_address_is_email_not_location() {
    assert_eq!(
        classify(&labeled("Email Address")),
        Some(FieldType::Email),
        "The address word inside 'email address' must not reach the location rule"
    );
    assert_eq!(classify(&labeled("Home Address")), Some(FieldType::Location));
}

// =========================================================================
// Category coverage
// =========================================================================

#[test]
fn one_sample_per_category() {
    let cases = [
        ("Phone number", FieldType::Phone),
        ("Resume / CV", FieldType::Resume),
        ("Years of experience", FieldType::Experience),
        ("Key skills", FieldType::Skills),
        ("Highest degree", FieldType::Education),
        ("Expected salary", FieldType::Salary),
        ("Preferred location", FieldType::Location),
        ("When can you start?", FieldType::Availability),
        ("Do you require visa sponsorship?", FieldType::Visa),
        ("Why do you want to join us?", FieldType::Motivation),
        ("Additional comments", FieldType::Other),
    ];

    for (label, expected) in cases {
        assert_eq!(
            classify(&labeled(label)),
            Some(expected),
            "label '{}' misclassified",
            label
        );
    }
}

#[test]
fn control_kind_contributes_signals() {
    assert_eq!(
        classify(&signals("", "", "", "", "email")),
        Some(FieldType::Email),
        "An unlabeled email input still classifies by kind"
    );
    assert_eq!(
        classify(&signals("", "", "", "", "tel")),
        Some(FieldType::Phone)
    );
}

// =========================================================================
// Unmatched controls
// =========================================================================

#[test]
fn unmatched_controls_return_none() {
    assert_eq!(classify(&labeled("Favorite color")), None);
    assert_eq!(
        classify(&signals("", "", "", "", "text")),
        None,
        "A control with no signals at all must not classify"
    );
}

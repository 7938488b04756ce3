use serde_json::json;

use form_autofill::detect::detector::DetectionSession;
use form_autofill::error::EngineError;
use form_autofill::fill::executor::{FillOptions, fill_fields};
use form_autofill::page::document::SyntheticEvent;

mod common;
use crate::common::utils::{doc, full_profile, label_for, labeled_input, minimal_profile, typed_input};

fn control(session: &DetectionSession, id: &str) -> usize {
    session
        .document
        .iter_attached()
        .find(|&i| session.document.node(i).id.as_deref() == Some(id))
        .expect("control present")
}

// =========================================================================
// End-to-end fill scenario
// =========================================================================

#[test]
fn fills_matched_fields_and_reports_the_written_count() {
    let mut nodes = Vec::new();
    nodes.extend(labeled_input("fname", "First Name"));
    nodes.extend(labeled_input("em", "Email"));
    nodes.push(typed_input("cv", "file"));
    nodes.push(label_for("cv", "Resume"));

    let mut session = DetectionSession::with_profile(doc(nodes), minimal_profile());
    session.detect();

    let report = session.autofill(&FillOptions::default()).expect("profile present");

    assert_eq!(report.matched, 3, "All three fields matched a type");
    assert_eq!(report.filled, 2, "Only the first name and email were written");
    assert_eq!(report.skipped_unfillable, 1, "The file input was skipped, not attempted");

    let fname = control(&session, "fname");
    let em = control(&session, "em");
    let cv = control(&session, "cv");
    assert_eq!(session.document.value(fname), Some("Ada"));
    assert_eq!(session.document.value(em), Some("ada@example.com"));
    assert_eq!(session.document.value(cv), None, "File input untouched");
}

#[test]
fn each_written_control_gets_input_then_change() {
    let mut session =
        DetectionSession::with_profile(doc(labeled_input("em", "Email")), minimal_profile());
    session.detect();
    session.autofill(&FillOptions::default()).unwrap();

    let em = control(&session, "em");
    assert_eq!(
        session.document.events_for(em),
        vec![SyntheticEvent::Input, SyntheticEvent::Change],
        "Host-page scripts observe input then change, in that order"
    );
}

#[test]
fn joined_list_values_and_full_name_concat() {
    let mut nodes = Vec::new();
    nodes.extend(labeled_input("name", "Full Name"));
    nodes.extend(labeled_input("sk", "Skills"));
    nodes.extend(labeled_input("loc", "Preferred location"));

    let mut session = DetectionSession::with_profile(doc(nodes), full_profile());
    session.detect();
    session.autofill(&FillOptions::default()).unwrap();

    assert_eq!(
        session.document.value(control(&session, "name")),
        Some("Ada Lovelace"),
        "Full name falls back to first + last"
    );
    assert_eq!(
        session.document.value(control(&session, "sk")),
        Some("Rust, Analysis")
    );
    assert_eq!(
        session.document.value(control(&session, "loc")),
        Some("London, Remote")
    );
}

// =========================================================================
// No-overwrite invariant
// =========================================================================

#[test]
fn prefilled_values_survive_without_overwrite() {
    let mut nodes = vec![json!({
        "tag": "input", "id": "em", "value": "kept@example.com"
    })];
    nodes.push(label_for("em", "Email"));

    let mut session = DetectionSession::with_profile(doc(nodes), minimal_profile());
    session.detect();
    let report = session.autofill(&FillOptions::default()).unwrap();

    assert_eq!(report.filled, 0);
    assert_eq!(report.skipped_prefilled, 1);
    assert_eq!(
        session.document.value(control(&session, "em")),
        Some("kept@example.com"),
        "User-entered data wins by default"
    );
}

#[test]
fn overwrite_flag_replaces_prefilled_values() {
    let mut nodes = vec![json!({
        "tag": "input", "id": "em", "value": "old@example.com"
    })];
    nodes.push(label_for("em", "Email"));

    let mut session = DetectionSession::with_profile(doc(nodes), minimal_profile());
    session.detect();
    let report = session.autofill(&FillOptions { overwrite: true }).unwrap();

    assert_eq!(report.filled, 1);
    assert_eq!(
        session.document.value(control(&session, "em")),
        Some("ada@example.com")
    );
}

#[test]
fn value_typed_after_detection_is_respected() {
    let mut session =
        DetectionSession::with_profile(doc(labeled_input("em", "Email")), minimal_profile());
    session.detect();

    // The user types between detection and fill; the executor checks the
    // live value, not the stale already_filled flag.
    let em = control(&session, "em");
    session.document.set_value(em, "typed@example.com");
    let events_before = session.document.events().len();

    let report = session.autofill(&FillOptions::default()).unwrap();

    assert_eq!(report.skipped_prefilled, 1);
    assert_eq!(session.document.value(em), Some("typed@example.com"));
    assert_eq!(
        session.document.events().len(),
        events_before,
        "A skipped field emits no events"
    );
}

// =========================================================================
// Empty-skip invariant
// =========================================================================

#[test]
fn missing_profile_attributes_leave_controls_untouched() {
    let mut nodes = Vec::new();
    nodes.extend(labeled_input("em", "Email"));
    nodes.extend(labeled_input("ph", "Phone"));

    // minimal_profile has an email but no phone.
    let mut session = DetectionSession::with_profile(doc(nodes), minimal_profile());
    session.detect();
    let report = session.autofill(&FillOptions::default()).unwrap();

    assert_eq!(report.filled, 1);
    assert_eq!(report.skipped_no_value, 1);

    let ph = control(&session, "ph");
    assert_eq!(session.document.value(ph), None, "No empty-string overwrite");
    assert!(
        session.document.events_for(ph).is_empty(),
        "An untouched field emits no events"
    );
}

#[test]
fn whitespace_only_profile_values_count_as_missing() {
    let mut profile = minimal_profile();
    profile.phone = Some("   ".into());

    let mut session =
        DetectionSession::with_profile(doc(labeled_input("ph", "Phone")), profile);
    session.detect();
    let report = session.autofill(&FillOptions::default()).unwrap();

    assert_eq!(report.filled, 0);
    assert_eq!(report.skipped_no_value, 1);
}

// =========================================================================
// Detached controls
// =========================================================================

#[test]
fn controls_removed_after_detection_are_skipped_silently() {
    let mut nodes = Vec::new();
    nodes.extend(labeled_input("em", "Email"));
    nodes.extend(labeled_input("fname", "First Name"));

    let mut session = DetectionSession::with_profile(doc(nodes), minimal_profile());
    let detection = session.detect().clone();

    let em = control(&session, "em");
    session.document.detach(em);

    let profile = session.profile.clone().unwrap();
    let report = fill_fields(
        &mut session.document,
        &detection,
        &profile,
        &FillOptions::default(),
    );

    assert_eq!(report.skipped_detached, 1);
    assert_eq!(report.filled, 1, "The surviving field is still filled");
    assert!(
        session.document.events_for(em).is_empty(),
        "No events on the detached control"
    );
}

// =========================================================================
// Authentication gate
// =========================================================================

#[test]
fn autofill_without_profile_is_refused_with_zero_writes() {
    let mut session = DetectionSession::new(doc(labeled_input("em", "Email")));
    session.detect();

    let result = session.autofill(&FillOptions::default());

    assert!(
        matches!(result, Err(EngineError::NotAuthenticated)),
        "Missing profile must surface as the distinct authentication outcome"
    );
    let em = control(&session, "em");
    assert_eq!(session.document.value(em), None);
    assert!(session.document.events().is_empty(), "Zero DOM writes");
}

use form_autofill::detect::detector::DetectionSession;
use form_autofill::fill::executor::FillReport;
use form_autofill::report::console::{format_detection_report, format_fill_report};

mod common;
use crate::common::utils::{doc, label_for, labeled_input, typed_input};

// =========================================================================
// Detection report formatting
// =========================================================================

#[test]
fn detection_report_lists_fields_and_counts() {
    let mut nodes = Vec::new();
    nodes.extend(labeled_input("fname", "First Name"));
    nodes.push(typed_input("cv", "file"));
    nodes.push(label_for("cv", "Resume"));
    let mut session = DetectionSession::new(doc(nodes));
    let detection = session.detect().clone();

    let report = format_detection_report(&session.document, &detection);

    assert!(report.contains("=== Form Detection ==="));
    assert!(report.contains("First name"), "Field type display name is shown");
    assert!(report.contains("\"First Name\""), "Inferred label is shown");
    assert!(report.contains("[file]"), "File controls are marked unfillable");
    assert!(report.contains("2 fields detected"));
}

#[test]
fn empty_detection_reports_no_form() {
    let mut session = DetectionSession::new(doc(vec![]));
    let detection = session.detect().clone();

    let report = format_detection_report(&session.document, &detection);

    assert!(report.contains("No application form detected"));
    assert!(!report.contains("fields detected"));
}

#[test]
fn singular_field_count_reads_naturally() {
    let mut session = DetectionSession::new(doc(labeled_input("em", "Email")));
    let detection = session.detect().clone();

    let report = format_detection_report(&session.document, &detection);
    assert!(report.contains("1 field detected"));
}

// =========================================================================
// Fill report formatting
// =========================================================================

#[test]
fn fill_report_shows_written_versus_matched() {
    let report = FillReport {
        matched: 5,
        filled: 3,
        skipped_prefilled: 1,
        skipped_no_value: 1,
        skipped_unfillable: 0,
        skipped_detached: 0,
    };

    let text = format_fill_report(&report);

    assert!(text.contains("3 of 5 matched fields written"));
    assert!(text.contains("skipped 1 (already filled)"));
    assert!(text.contains("skipped 1 (no profile value)"));
    assert!(
        !text.contains("not fillable"),
        "Zero-count skip reasons are omitted"
    );
}

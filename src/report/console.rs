use crate::detect::detector::DetectionResult;
use crate::fill::executor::FillReport;
use crate::page::document::Document;

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format a detection result for terminal output.
///
/// Produces output like:
/// ```text
/// === Form Detection ===
///
/// ✓ First name       "First Name" (fname)
/// ✓ Email            "Email" (em)
/// ✓ Resume           "Resume" (cv) [file]
///
/// === 3 fields detected ===
/// ```
pub fn format_detection_report(doc: &Document, detection: &DetectionResult) -> String {
    let mut out = String::new();

    out.push_str("=== Form Detection ===\n\n");

    if detection.is_empty() {
        out.push_str("No application form detected on this page.\n");
        return out;
    }

    for field in &detection.fields {
        let node = doc.node(field.control);
        let anchor = node
            .id
            .as_deref()
            .or(node.name.as_deref())
            .unwrap_or("unnamed");

        let mut markers = String::new();
        if !field.kind.is_fillable() {
            markers.push_str(" [file]");
        }
        if field.already_filled {
            markers.push_str(" [filled]");
        }

        out.push_str(&format!(
            "\u{2713} {:<18} \"{}\" ({}){}\n",
            field.field_type.display_name(),
            field.label,
            anchor,
            markers
        ));
    }

    let count = detection.field_count();
    let noun = if count == 1 { "field" } else { "fields" };
    out.push_str(&format!("\n=== {} {} detected ===\n", count, noun));

    out
}

/// Format a fill report: filled vs matched, with the skip breakdown.
pub fn format_fill_report(report: &FillReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Autofill: {} of {} matched fields written ===\n",
        report.filled, report.matched
    ));

    let skips = [
        (report.skipped_prefilled, "already filled"),
        (report.skipped_no_value, "no profile value"),
        (report.skipped_unfillable, "not fillable"),
        (report.skipped_detached, "removed from page"),
    ];

    for (count, reason) in skips {
        if count > 0 {
            out.push_str(&format!("  skipped {} ({})\n", count, reason));
        }
    }

    out
}

use crate::detect::detector::DetectionResult;
use crate::fill::profile::UserProfile;
use crate::page::document::Document;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default)]
pub struct FillOptions {
    /// Overwrite controls the user already filled. Off by default:
    /// user-entered data wins.
    pub overwrite: bool,
}

/// Outcome of one fill pass. `filled` is the count of fields actually
/// written, distinct from `matched`, so callers can report accurate
/// feedback.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FillReport {
    pub matched: u32,
    pub filled: u32,
    pub skipped_prefilled: u32,
    pub skipped_no_value: u32,
    pub skipped_unfillable: u32,
    pub skipped_detached: u32,
}

/// Write profile-derived values into the detected controls.
///
/// Per-field failures never abort the batch; every skip is counted and
/// the pass continues. Skips, in check order:
/// - file and other unfillable control kinds (value-by-script on file
///   inputs is not permitted, so they are never attempted);
/// - controls the host page detached since detection;
/// - controls currently non-empty, unless overwrite is requested;
/// - field types whose profile attribute resolves to no value.
pub fn fill_fields(
    doc: &mut Document,
    detection: &DetectionResult,
    profile: &UserProfile,
    options: &FillOptions,
) -> FillReport {
    let mut report = FillReport::default();

    for field in &detection.fields {
        report.matched += 1;

        if !field.kind.is_fillable() {
            report.skipped_unfillable += 1;
            continue;
        }

        if !doc.is_attached(field.control) {
            report.skipped_detached += 1;
            continue;
        }

        // Check the live value rather than the flag captured at
        // detection time: the user may have typed in between.
        if doc.value(field.control).is_some() && !options.overwrite {
            report.skipped_prefilled += 1;
            continue;
        }

        let value = match profile.value_for(field.field_type) {
            Some(v) => v,
            None => {
                report.skipped_no_value += 1;
                continue;
            }
        };

        doc.set_value(field.control, &value);
        report.filled += 1;
    }

    report
}

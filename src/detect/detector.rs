use crate::detect::classifier::{FieldSignals, classify};
use crate::detect::field_type::FieldType;
use crate::detect::labels::infer_label;
use crate::error::EngineError;
use crate::fill::executor::{FillOptions, FillReport, fill_fields};
use crate::fill::profile::UserProfile;
use crate::page::document::{Document, NodeId};
use crate::page::page_model::ControlKind;
use serde::Serialize;

/// One classified form control. Ephemeral: rebuilt on every detection
/// pass, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifiedField {
    /// Non-owning reference into the session's document
    pub control: NodeId,
    pub field_type: FieldType,
    /// Best-effort inferred display label (may be an attribute fallback)
    pub label: String,
    /// True if the control held a non-empty value at classification time
    pub already_filled: bool,
    #[serde(skip)]
    pub kind: ControlKind,
}

/// Ordered outcome of one classification pass; insertion order is DOM
/// traversal order.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionResult {
    pub fields: Vec<ClassifiedField>,
    /// Structural fingerprint of the document at scan time, for trace
    /// correlation
    pub fingerprint: String,
}

impl DetectionResult {
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Zero classifiable fields is the neutral "no form detected"
    /// outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Per-page-load engine state: the document, the cached profile, and the
/// last detection result. Owns nothing beyond one page's lifetime; a new
/// page gets a new session.
#[derive(Debug)]
pub struct DetectionSession {
    pub document: Document,
    pub profile: Option<UserProfile>,
    last_detection: Option<DetectionResult>,
}

impl DetectionSession {
    pub fn new(document: Document) -> Self {
        DetectionSession {
            document,
            profile: None,
            last_detection: None,
        }
    }

    pub fn with_profile(document: Document, profile: UserProfile) -> Self {
        DetectionSession {
            document,
            profile: Some(profile),
            last_detection: None,
        }
    }

    /// Scan the whole document and classify every control. Replaces any
    /// previous detection result.
    pub fn detect(&mut self) -> &DetectionResult {
        self.detect_scoped(None)
    }

    /// Scan a single form subtree by form id. An unknown id yields an
    /// empty result, same as a page without a form.
    pub fn detect_form(&mut self, form_id: &str) -> &DetectionResult {
        let scope = self.document.find_form(form_id);
        match scope {
            Some(root) => self.detect_scoped(Some(root)),
            None => self.last_detection.insert(DetectionResult {
                fields: Vec::new(),
                fingerprint: self.document.fingerprint(),
            }),
        }
    }

    fn detect_scoped(&mut self, scope: Option<NodeId>) -> &DetectionResult {
        let mut fields = Vec::new();

        for control in self.document.controls_in(scope) {
            let kind = match self.document.kind(control) {
                Some(ControlKind::Hidden) | None => continue,
                Some(kind) => kind,
            };

            let label = infer_label(&self.document, control);
            let node = self.document.node(control);
            let signals = FieldSignals {
                label: label.clone(),
                id: node.id.clone().unwrap_or_default(),
                name: node.name.clone().unwrap_or_default(),
                placeholder: node.placeholder.clone().unwrap_or_default(),
                kind: kind.as_search_str().to_string(),
            };

            if let Some(field_type) = classify(&signals) {
                fields.push(ClassifiedField {
                    control,
                    field_type,
                    label,
                    already_filled: self.document.value(control).is_some(),
                    kind,
                });
            }
        }

        self.last_detection.insert(DetectionResult {
            fields,
            fingerprint: self.document.fingerprint(),
        })
    }

    pub fn last_detection(&self) -> Option<&DetectionResult> {
        self.last_detection.as_ref()
    }

    /// Cosmetic highlight on every detected control. Read-only with
    /// respect to control values.
    pub fn highlight_detected(&mut self) {
        let controls: Vec<NodeId> = self
            .last_detection
            .iter()
            .flat_map(|d| d.fields.iter().map(|f| f.control))
            .collect();
        for control in controls {
            if self.document.is_attached(control) {
                self.document.set_highlight(control, true);
            }
        }
    }

    pub fn clear_highlights(&mut self) {
        self.document.clear_highlights();
    }

    /// Fill detected fields from the cached profile. Runs detection first
    /// if none has happened yet. Refuses to run without a profile.
    pub fn autofill(&mut self, options: &FillOptions) -> Result<FillReport, EngineError> {
        let profile = match &self.profile {
            Some(p) => p.clone(),
            None => return Err(EngineError::NotAuthenticated),
        };

        let detection = match &self.last_detection {
            Some(existing) => existing.clone(),
            None => self.detect().clone(),
        };

        let report = fill_fields(&mut self.document, &detection, &profile, options);
        self.clear_highlights();
        Ok(report)
    }
}

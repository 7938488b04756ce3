use crate::detect::field_type::FieldType;
use regex::Regex;
use std::sync::OnceLock;

// ============================================================================
// Pure classification — attribute strings in, field type out.
// No document access here; the live-tree label search lives in labels.rs.
// ============================================================================

/// The locally observable signals of one form control.
#[derive(Debug, Clone, Default)]
pub struct FieldSignals {
    pub label: String,
    pub id: String,
    pub name: String,
    pub placeholder: String,
    pub kind: String,
}

impl FieldSignals {
    /// Case-folded concatenation tested against the pattern ladder.
    pub fn search_text(&self) -> String {
        [
            self.label.as_str(),
            self.id.as_str(),
            self.name.as_str(),
            self.placeholder.as_str(),
            self.kind.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

struct PatternRule {
    field_type: FieldType,
    pattern: Regex,
    /// If the rule matches but the exclusion also matches, the rung is
    /// skipped and the ladder continues.
    exclude: Option<Regex>,
}

impl PatternRule {
    fn new(field_type: FieldType, pattern: &str) -> Self {
        PatternRule {
            field_type,
            pattern: Regex::new(pattern).expect("invalid field pattern"),
            exclude: None,
        }
    }

    fn with_exclude(mut self, pattern: &str) -> Self {
        self.exclude = Some(Regex::new(pattern).expect("invalid exclusion pattern"));
        self
    }
}

/// The ordered pattern ladder. First match wins, so rules are ordered
/// most-specific-first: firstName/lastName before the generic name rule,
/// coverLetter before the prose-question rules, linkedin before the
/// generic url/website rule.
fn pattern_table() -> &'static [PatternRule] {
    static TABLE: OnceLock<Vec<PatternRule>> = OnceLock::new();
    TABLE.get_or_init(|| {
        vec![
            PatternRule::new(
                FieldType::FirstName,
                r"first[\s_-]?name|given[\s_-]?name|\bfname\b|forename",
            ),
            PatternRule::new(
                FieldType::LastName,
                r"last[\s_-]?name|family[\s_-]?name|surname|\blname\b",
            ),
            PatternRule::new(
                FieldType::FullName,
                r"full[\s_-]?name|applicant[\s_-]?name|your[\s_-]?name|\bname\b",
            )
            .with_exclude(r"company|employer|user|school"),
            PatternRule::new(FieldType::Email, r"e[\s_-]?mail"),
            PatternRule::new(FieldType::Phone, r"phone|mobile|telephone|\btel\b"),
            PatternRule::new(FieldType::Linkedin, r"linked[\s_-]?in"),
            PatternRule::new(FieldType::Resume, r"resume|\bcv\b|curriculum\s?vitae"),
            PatternRule::new(FieldType::CoverLetter, r"cover(ing)?[\s_-]?letter"),
            PatternRule::new(
                FieldType::Portfolio,
                r"portfolio|personal[\s_-]?(web)?site|github|website|\burl\b",
            ),
            PatternRule::new(
                FieldType::Education,
                r"education|degree|university|college|school|qualification",
            ),
            PatternRule::new(
                FieldType::Experience,
                r"experience|work[\s_-]?history|employment",
            ),
            PatternRule::new(FieldType::Skills, r"\bskills?\b|technolog|competenc"),
            PatternRule::new(
                FieldType::Salary,
                r"salary|compensation|\bctc\b|expected\s?pay",
            ),
            PatternRule::new(
                FieldType::Visa,
                r"visa|sponsor|work\s?authori[sz]ation|authori[sz]ed\s?to\s?work|right\s?to\s?work",
            ),
            PatternRule::new(
                FieldType::Availability,
                r"availab|start\s?date|notice\s?period|when\s?can\s?you\s?start|earliest",
            ),
            PatternRule::new(
                FieldType::Location,
                r"location|address|\bcity\b|country|zip|postal|where\s?are\s?you\s?(located|based)",
            ),
            PatternRule::new(FieldType::Motivation, r"\bwhy\b|motivat|reason\s?for\s?applying"),
            PatternRule::new(
                FieldType::Other,
                r"question|additional|comments?\b|anything\s?else|other\s?information",
            ),
        ]
    })
}

/// Classify a control from its signals. Returns None when no pattern
/// matches; unmatched controls are excluded from detection results —
/// a missed field is acceptable, a wrong value in a wrong field is not.
pub fn classify(signals: &FieldSignals) -> Option<FieldType> {
    let text = signals.search_text();

    for rule in pattern_table() {
        if rule.pattern.is_match(&text) {
            if let Some(exclude) = &rule.exclude {
                if exclude.is_match(&text) {
                    continue;
                }
            }
            return Some(rule.field_type);
        }
    }

    None
}

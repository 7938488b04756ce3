use serde::Deserialize;

/// One DOM node as emitted by the extension's extraction script.
///
/// All attributes are optional: a control with no id, no name, and no
/// placeholder is legal input.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotNode {
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(rename = "type", default)]
    pub input_type: Option<String>,
    /// `for` attribute on label elements
    #[serde(rename = "for", default)]
    pub for_target: Option<String>,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(rename = "testId", default)]
    pub test_id: Option<String>,
    /// Direct text content of this node (children excluded)
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub children: Vec<SnapshotNode>,
}

/// A full page snapshot: metadata plus the node tree.
#[derive(Debug, Clone, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub dom: Vec<SnapshotNode>,
}

/// The kind of an interactive form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    TextArea,
    Select,
    Email,
    Tel,
    Url,
    Number,
    /// Never auto-filled: scripted value assignment on file inputs is not
    /// permitted in the execution environment
    File,
    /// Never scanned
    Hidden,
    Other(String),
}

impl ControlKind {
    /// Lowercase kind string fed into the classification search text.
    pub fn as_search_str(&self) -> &str {
        match self {
            ControlKind::Text => "text",
            ControlKind::TextArea => "textarea",
            ControlKind::Select => "select",
            ControlKind::Email => "email",
            ControlKind::Tel => "tel",
            ControlKind::Url => "url",
            ControlKind::Number => "number",
            ControlKind::File => "file",
            ControlKind::Hidden => "hidden",
            ControlKind::Other(s) => s.as_str(),
        }
    }

    pub fn is_fillable(&self) -> bool {
        !matches!(self, ControlKind::File | ControlKind::Hidden)
    }
}

/// Determine whether a node is a form control, and of what kind.
///
/// Buttons, submits and choice inputs (checkbox/radio) are not autofill
/// targets and return None.
pub fn control_kind(tag: &str, input_type: Option<&str>) -> Option<ControlKind> {
    match tag {
        "textarea" => return Some(ControlKind::TextArea),
        "select" => return Some(ControlKind::Select),
        "input" => {}
        _ => return None,
    }

    match input_type {
        None | Some("text") | Some("search") => Some(ControlKind::Text),
        Some("email") => Some(ControlKind::Email),
        Some("tel") => Some(ControlKind::Tel),
        Some("url") => Some(ControlKind::Url),
        Some("number") => Some(ControlKind::Number),
        Some("file") => Some(ControlKind::File),
        Some("hidden") => Some(ControlKind::Hidden),

        // Non-text controls
        Some("submit") | Some("button") | Some("reset") | Some("image") | Some("checkbox")
        | Some("radio") => None,

        Some(other) => Some(ControlKind::Other(other.to_string())),
    }
}

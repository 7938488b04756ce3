use crate::page::document::{Document, NodeId};

/// Upper bound on the ancestor walk. Unbounded walks risk pathological
/// behavior on deep trees, and labels more than a few levels away are
/// rarely related to the control anyway.
pub const MAX_ANCESTOR_DEPTH: usize = 3;

/// Ancestor text longer than this is page copy, not a label.
const MAX_LABEL_TEXT_LEN: usize = 100;

/// Best-effort label inference for a form control.
///
/// Resolution order, first match wins:
/// 1. a `label` element whose `for` targets the control's id;
/// 2. bounded upward walk: a descendant `label` under an ancestor, or an
///    ancestor whose direct text is short and contains a colon (the text
///    before the colon);
/// 3. placeholder, then name, then id, then "unknown".
///
/// Known limitation: on unconventional markup the colon heuristic can
/// pick up unrelated nearby copy. That is accepted best-effort behavior.
pub fn infer_label(doc: &Document, control: NodeId) -> String {
    if let Some(id) = doc.node(control).id.as_deref() {
        if let Some(label_node) = doc.label_for_target(id) {
            let text = doc.subtree_text(label_node);
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    if let Some(label) = search_ancestors(doc, control) {
        return label;
    }

    fallback_label(doc, control)
}

fn search_ancestors(doc: &Document, control: NodeId) -> Option<String> {
    let mut current = doc.node(control).parent;

    for _ in 0..MAX_ANCESTOR_DEPTH {
        let ancestor = current?;

        if let Some(text) = descendant_label_text(doc, ancestor, control) {
            return Some(text);
        }

        if let Some(text) = colon_label_text(doc, ancestor) {
            return Some(text);
        }

        current = doc.node(ancestor).parent;
    }

    None
}

/// First non-empty `label` element in the ancestor's subtree, the control
/// itself excluded.
fn descendant_label_text(doc: &Document, ancestor: NodeId, control: NodeId) -> Option<String> {
    find_label_in(doc, ancestor, control)
        .map(|label_node| doc.subtree_text(label_node))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

fn find_label_in(doc: &Document, node: NodeId, control: NodeId) -> Option<NodeId> {
    if node != control && doc.node(node).tag == "label" {
        let text = doc.subtree_text(node);
        if !text.trim().is_empty() {
            return Some(node);
        }
    }
    for &child in &doc.node(node).children {
        if !doc.is_attached(child) {
            continue;
        }
        if let Some(found) = find_label_in(doc, child, control) {
            return Some(found);
        }
    }
    None
}

/// Short ancestor text containing a colon: the text before the colon is
/// taken as the label.
fn colon_label_text(doc: &Document, ancestor: NodeId) -> Option<String> {
    let text = doc.node(ancestor).text.as_deref()?.trim();
    if text.is_empty() || text.len() >= MAX_LABEL_TEXT_LEN {
        return None;
    }
    let (before, _) = text.split_once(':')?;
    let before = before.trim();
    if before.is_empty() {
        None
    } else {
        Some(before.to_string())
    }
}

/// Attribute fallback chain: placeholder, name, id, "unknown".
fn fallback_label(doc: &Document, control: NodeId) -> String {
    let node = doc.node(control);

    for attr in [&node.placeholder, &node.name, &node.id] {
        if let Some(v) = attr {
            let trimmed = v.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    "unknown".to_string()
}

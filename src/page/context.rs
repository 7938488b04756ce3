use crate::page::document::{Document, NodeId};

// ============================================================================
// Job-page context extraction — feeds the AI relay request
// ============================================================================

/// Extract the job title from the page: first non-empty match of an
/// ordered selector ladder, falling back to the page title.
pub fn extract_job_title(doc: &Document) -> Option<String> {
    first_text(doc, |d, i| d.node(i).tag == "h1")
        .or_else(|| first_text(doc, |d, i| has_class(d, i, "job-title")))
        .or_else(|| first_text(doc, |d, i| has_class(d, i, "position-title")))
        .or_else(|| first_text(doc, |d, i| d.node(i).test_id.as_deref() == Some("job-title")))
        .or_else(|| {
            doc.title()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
        })
}

/// Extract the company name, falling back to the page host.
pub fn extract_company(doc: &Document) -> Option<String> {
    first_text(doc, |d, i| has_class(d, i, "company-name"))
        .or_else(|| first_text(doc, |d, i| has_class(d, i, "employer-name")))
        .or_else(|| first_text(doc, |d, i| d.node(i).test_id.as_deref() == Some("company-name")))
        .or_else(|| doc.url().and_then(host_of))
}

fn first_text(doc: &Document, matches: impl Fn(&Document, NodeId) -> bool) -> Option<String> {
    doc.iter_attached()
        .filter(|&i| matches(doc, i))
        .map(|i| doc.subtree_text(i))
        .find(|t| !t.trim().is_empty())
        .map(|t| t.trim().to_string())
}

fn has_class(doc: &Document, id: NodeId, class: &str) -> bool {
    doc.node(id)
        .class
        .as_deref()
        .map(|c| c.split_whitespace().any(|part| part == class))
        .unwrap_or(false)
}

/// Naive host extraction: strip the scheme, cut at the first slash.
fn host_of(url: &str) -> Option<String> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}

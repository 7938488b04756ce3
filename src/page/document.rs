use crate::error::EngineError;
use crate::page::page_model::{ControlKind, PageSnapshot, SnapshotNode, control_kind};

pub type NodeId = usize;

/// One node in the flattened page arena.
#[derive(Debug, Clone)]
pub struct Node {
    pub tag: String,
    pub id: Option<String>,
    pub name: Option<String>,
    pub placeholder: Option<String>,
    pub input_type: Option<String>,
    pub for_target: Option<String>,
    pub class: Option<String>,
    pub test_id: Option<String>,
    pub text: Option<String>,
    pub value: Option<String>,

    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,

    attached: bool,
    highlighted: bool,
}

/// Synthetic event emitted after a programmatic value write, in the order
/// host-page scripts expect to observe them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticEvent {
    Input,
    Change,
}

#[derive(Debug, Clone)]
pub struct EmittedEvent {
    pub node: NodeId,
    pub event: SyntheticEvent,
}

/// An in-memory page document: a flat arena of nodes in DOM traversal
/// order, with parent links for ancestor walks.
///
/// The document stands in for the live page. Value writes go through
/// `set_value`, which appends Input then Change events to the event log —
/// the equivalent of `dispatchEvent` on the real page. Raw value
/// assignment without those events is a correctness bug for framework-bound
/// forms, so there is no other write path.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    url: Option<String>,
    title: Option<String>,
    events: Vec<EmittedEvent>,
}

impl Document {
    pub fn from_snapshot(snapshot: PageSnapshot) -> Self {
        let mut doc = Document {
            nodes: Vec::new(),
            url: snapshot.url,
            title: snapshot.title,
            events: Vec::new(),
        };
        for node in &snapshot.dom {
            doc.insert(node, None);
        }
        doc
    }

    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let snapshot: PageSnapshot =
            serde_json::from_str(json).map_err(|e| EngineError::JsonParse {
                context: "page snapshot".to_string(),
                source: e,
            })?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub fn from_json_file(path: &str) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path).map_err(|e| EngineError::Io {
            context: format!("reading snapshot '{}'", path),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// Preorder insertion keeps arena indices in DOM traversal order.
    fn insert(&mut self, node: &SnapshotNode, parent: Option<NodeId>) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            tag: node.tag.clone(),
            id: node.id.clone(),
            name: node.name.clone(),
            placeholder: node.placeholder.clone(),
            input_type: node.input_type.clone(),
            for_target: node.for_target.clone(),
            class: node.class.clone(),
            test_id: node.test_id.clone(),
            text: node.text.clone(),
            value: node.value.clone(),
            parent,
            children: Vec::new(),
            attached: true,
            highlighted: false,
        });
        if let Some(p) = parent {
            self.nodes[p].children.push(id);
        }
        for child in &node.children {
            self.insert(child, Some(id));
        }
        id
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All attached nodes in traversal order.
    pub fn iter_attached(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).filter(|&i| self.nodes[i].attached)
    }

    // ------------------------------------------------------------------
    // Control access
    // ------------------------------------------------------------------

    pub fn kind(&self, id: NodeId) -> Option<ControlKind> {
        let node = &self.nodes[id];
        control_kind(&node.tag, node.input_type.as_deref())
    }

    /// All attached form controls in traversal order, optionally scoped to
    /// one subtree (e.g. a single form element).
    pub fn controls_in(&self, scope: Option<NodeId>) -> Vec<NodeId> {
        self.iter_attached()
            .filter(|&i| self.kind(i).is_some())
            .filter(|&i| match scope {
                Some(root) => self.is_descendant_of(i, root),
                None => true,
            })
            .collect()
    }

    /// Find a form element by its id attribute.
    pub fn find_form(&self, form_id: &str) -> Option<NodeId> {
        self.iter_attached()
            .find(|&i| self.nodes[i].tag == "form" && self.nodes[i].id.as_deref() == Some(form_id))
    }

    fn is_descendant_of(&self, id: NodeId, root: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(n) = current {
            if n == root {
                return true;
            }
            current = self.nodes[n].parent;
        }
        false
    }

    /// Find the label element whose `for` attribute targets the given id.
    pub fn label_for_target(&self, target_id: &str) -> Option<NodeId> {
        self.iter_attached().find(|&i| {
            self.nodes[i].tag == "label"
                && self.nodes[i].for_target.as_deref() == Some(target_id)
        })
    }

    /// Concatenated trimmed text of a node and its descendants.
    pub fn subtree_text(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        self.collect_text(id, &mut parts);
        parts.join(" ")
    }

    fn collect_text(&self, id: NodeId, out: &mut Vec<String>) {
        if let Some(text) = &self.nodes[id].text {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push(trimmed.to_string());
            }
        }
        for &child in &self.nodes[id].children {
            if self.nodes[child].attached {
                self.collect_text(child, out);
            }
        }
    }

    // ------------------------------------------------------------------
    // Mutation: values, events, attachment, highlights
    // ------------------------------------------------------------------

    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.nodes[id].value.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Write a value and emit Input then Change on the control.
    pub fn set_value(&mut self, id: NodeId, value: &str) {
        self.nodes[id].value = Some(value.to_string());
        self.events.push(EmittedEvent {
            node: id,
            event: SyntheticEvent::Input,
        });
        self.events.push(EmittedEvent {
            node: id,
            event: SyntheticEvent::Change,
        });
    }

    pub fn events(&self) -> &[EmittedEvent] {
        &self.events
    }

    pub fn events_for(&self, id: NodeId) -> Vec<SyntheticEvent> {
        self.events
            .iter()
            .filter(|e| e.node == id)
            .map(|e| e.event)
            .collect()
    }

    pub fn is_attached(&self, id: NodeId) -> bool {
        self.nodes[id].attached
    }

    /// Detach a node and its subtree, as if the host page removed it
    /// between detection and fill.
    pub fn detach(&mut self, id: NodeId) {
        self.nodes[id].attached = false;
        let children = self.nodes[id].children.clone();
        for child in children {
            self.detach(child);
        }
    }

    pub fn set_highlight(&mut self, id: NodeId, on: bool) {
        self.nodes[id].highlighted = on;
    }

    pub fn is_highlighted(&self, id: NodeId) -> bool {
        self.nodes[id].highlighted
    }

    pub fn clear_highlights(&mut self) {
        for node in &mut self.nodes {
            node.highlighted = false;
        }
    }

    // ------------------------------------------------------------------
    // Fingerprint
    // ------------------------------------------------------------------

    /// SHA-1 over the structural attributes of attached nodes. Values and
    /// highlights are excluded so the fingerprint is stable across fills.
    pub fn fingerprint(&self) -> String {
        use sha1::{Digest, Sha1};

        let mut hasher = Sha1::new();
        for id in self.iter_attached() {
            let node = &self.nodes[id];
            hasher.update(node.tag.as_bytes());
            for attr in [&node.id, &node.name, &node.placeholder, &node.input_type] {
                if let Some(v) = attr {
                    hasher.update(v.as_bytes());
                }
                hasher.update(b"|");
            }
            hasher.update(b";");
        }
        format!("{:x}", hasher.finalize())
    }
}

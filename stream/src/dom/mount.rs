//! Mount points
//!
//! A mount point is a container owned by the surrounding page. The core
//! only ever clears it and appends to it.

use super::node::{escape_html, Node};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint {
    id: String,
    children: Vec<Node>,
}

impl MountPoint {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    /// A mount point that already shows something (e.g. a loading notice)
    pub fn with_children(id: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id: id.into(),
            children,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append_child(&mut self, node: Node) {
        self.children.push(node);
    }

    /// Clear, then insert the given nodes in one step
    pub fn replace_children(&mut self, nodes: impl IntoIterator<Item = Node>) {
        self.children = nodes.into_iter().collect();
    }

    pub fn inner_html(&self) -> String {
        let mut buf = String::new();
        for child in &self.children {
            child.write_html(&mut buf);
        }
        buf
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div id=\"{}\">{}</div>",
            escape_html(&self.id),
            self.inner_html()
        )
    }
}

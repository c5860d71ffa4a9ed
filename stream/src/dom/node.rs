//! Owned element tree
//!
//! Nodes are built with a consuming builder and serialized to HTML.
//! Text and attribute values are escaped on output; raw markup is not.

use std::fmt::Write;

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Payload of an element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Inner {
    #[default]
    Empty,
    /// Literal text, escaped on output
    Text(String),
    /// Trusted markup, emitted verbatim
    RawMarkup(String),
    /// Ordered child elements
    Children(Vec<Node>),
}

/// An element, or a tagless fragment that renders only its payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag: Option<String>,
    attrs: Vec<(String, String)>,
    inner: Inner,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            attrs: Vec::new(),
            inner: Inner::Empty,
        }
    }

    /// A tagless node
    pub fn fragment(inner: Inner) -> Self {
        Self {
            tag: None,
            attrs: Vec::new(),
            inner,
        }
    }

    /// Set an attribute, replacing any previous value for the same name
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Apply every entry of an attribute map
    pub fn attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in attrs {
            self.set_attr(name, value);
        }
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.inner = Inner::Text(text.into());
        self
    }

    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.inner = Inner::RawMarkup(markup.into());
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        self.append_child(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        for node in nodes {
            self.append_child(node);
        }
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Append after any existing payload. A text or markup payload is kept
    /// as a leading fragment.
    pub fn append_child(&mut self, node: Node) {
        match &mut self.inner {
            Inner::Children(children) => children.push(node),
            Inner::Empty => self.inner = Inner::Children(vec![node]),
            payload => {
                let leading = Node::fragment(std::mem::take(payload));
                self.inner = Inner::Children(vec![leading, node]);
            }
        }
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn inner(&self) -> &Inner {
        &self.inner
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn child_nodes(&self) -> &[Node] {
        match &self.inner {
            Inner::Children(children) => children,
            _ => &[],
        }
    }

    /// Depth-first, pre-order walk over this node and everything below it
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in self.child_nodes() {
            out.extend(child.descendants());
        }
        out
    }

    /// Concatenated text payloads (raw markup excluded)
    pub fn text_content(&self) -> String {
        match &self.inner {
            Inner::Empty | Inner::RawMarkup(_) => String::new(),
            Inner::Text(text) => text.clone(),
            Inner::Children(children) => children.iter().map(Node::text_content).collect(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut buf = String::new();
        self.write_html(&mut buf);
        buf
    }

    pub fn write_html(&self, buf: &mut String) {
        if let Some(tag) = &self.tag {
            buf.push('<');
            buf.push_str(tag);
            for (name, value) in &self.attrs {
                // Writing into a String cannot fail
                let _ = write!(buf, " {}=\"{}\"", name, escape_html(value));
            }
            buf.push('>');

            if VOID_ELEMENTS.contains(&tag.as_str()) {
                return;
            }
        }

        match &self.inner {
            Inner::Empty => {}
            Inner::Text(text) => buf.push_str(&escape_html(text)),
            Inner::RawMarkup(markup) => buf.push_str(markup),
            Inner::Children(children) => {
                for child in children {
                    child.write_html(buf);
                }
            }
        }

        if let Some(tag) = &self.tag {
            let _ = write!(buf, "</{}>", tag);
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_html())
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

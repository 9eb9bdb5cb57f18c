//! Output tree handed to a hosting renderer.
//!
//! DESIGN
//! ======
//! The builder never writes markup itself. It produces `Node` values: either
//! an element with a closed set of tags, ordered attributes and ordered
//! children, or a text leaf. "No content" is an element with no children;
//! empty content is an element holding one empty text node. Hosts must keep
//! that distinction.

use serde::Serialize;

// =============================================================================
// TAGS
// =============================================================================

/// Element tags the builder can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Section,
    Div,
    Button,
    P,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Span,
}

impl Tag {
    /// HTML tag name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Div => "div",
            Self::Button => "button",
            Self::P => "p",
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
            Self::Span => "span",
        }
    }
}

// =============================================================================
// NODES
// =============================================================================

/// A single attribute. Boolean attributes carry an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attr {
    pub name: &'static str,
    pub value: String,
}

/// A node in the output tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

impl Node {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// The element behind this node, if it is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text { .. } => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: Tag,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<Attr>,
    pub children: Vec<Node>,
}

impl Element {
    #[must_use]
    pub fn new(tag: Tag) -> Self {
        Self { tag, attrs: Vec::new(), children: Vec::new() }
    }

    /// Append an attribute. Later duplicates are not merged.
    #[must_use]
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push(Attr { name, value: value.into() });
        self
    }

    /// Append an attribute only when a value is present.
    #[must_use]
    pub fn with_optional_attr(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.with_attr(name, value),
            None => self,
        }
    }

    /// Append a boolean attribute when `on` is set.
    #[must_use]
    pub fn with_flag(self, name: &'static str, on: bool) -> Self {
        if on { self.with_attr(name, "") } else { self }
    }

    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Value of the first attribute named `name`.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    #[must_use]
    pub fn class(&self) -> Option<&str> {
        self.attr("class")
    }

    /// Named action reference attached as a click handler.
    #[must_use]
    pub fn on_click(&self) -> Option<&str> {
        self.attr(ON_CLICK_ATTR)
    }

    /// Child elements, skipping text nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of the direct text children, or `None` when the
    /// element has no content at all.
    #[must_use]
    pub fn text_content(&self) -> Option<String> {
        if self.children.is_empty() {
            return None;
        }
        let mut out = String::new();
        for child in &self.children {
            if let Node::Text { text } = child {
                out.push_str(text);
            }
        }
        Some(out)
    }
}

/// Attribute used to carry click-handler action names to the host.
pub const ON_CLICK_ATTR: &str = "data-on-click";

#[cfg(test)]
#[path = "node_test.rs"]
mod tests;

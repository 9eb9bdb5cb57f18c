//! Component registry — the closed set of renderable component kinds.
//!
//! DESIGN
//! ======
//! Each kind owns a property struct (its accepted shape) and a render
//! function that turns those properties plus optional content into an
//! [`Element`]. A component reference is the tagged enum [`Component`]; the
//! file form `{ Kind: { ...props } }` is decoded by a strict deserializer that
//! rejects zero keys, multiple keys, unknown kinds and unknown properties.
//!
//! Out-of-range `variant` and `as` values are not errors: they decode to the
//! kind's default. Pages are trusted configuration, so a typo degrades the
//! look of one element instead of refusing the whole page.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::node::{Element, Node, ON_CLICK_ATTR, Tag};

// =============================================================================
// KINDS
// =============================================================================

/// Closed set of component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Interactive control rendered as a `button`.
    Button,
    /// Text element rendered as a paragraph, heading or span.
    Text,
}

impl ComponentKind {
    pub const ALL: [Self; 2] = [Self::Button, Self::Text];

    /// Name used as the single key of a component reference.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Text => "Text",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Property names this kind accepts in its property bag.
    #[must_use]
    pub fn accepted_props(self) -> &'static [&'static str] {
        match self {
            Self::Button => &["children", "variant", "flavor", "id", "onClick", "disabled", "title"],
            Self::Text => &["children", "as", "className", "id", "title"],
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn kind_names() -> String {
    ComponentKind::ALL
        .iter()
        .map(|kind| format!("`{kind}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// CHILDREN
// =============================================================================

/// Content passed to a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Children {
    Text(String),
    Number(f64),
    List(Vec<Children>),
}

impl Children {
    /// Flatten into text nodes, preserving order.
    #[must_use]
    pub fn to_nodes(&self) -> Vec<Node> {
        let mut out = Vec::new();
        self.push_nodes(&mut out);
        out
    }

    fn push_nodes(&self, out: &mut Vec<Node>) {
        match self {
            Self::Text(text) => out.push(Node::text(text.clone())),
            Self::Number(n) => out.push(Node::text(n.to_string())),
            Self::List(items) => {
                for item in items {
                    item.push_nodes(out);
                }
            }
        }
    }
}

impl From<&str> for Children {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

// =============================================================================
// LENIENT CHOICES
// =============================================================================

/// A closed string choice that falls back to its default when the input is
/// absent or not one of the known values.
trait Choice: Default {
    const FIELD: &'static str;

    fn parse(raw: &str) -> Option<Self>;
}

fn deserialize_choice<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Choice,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let parsed = match &raw {
        None | Some(Value::Null) => return Ok(T::default()),
        Some(Value::String(s)) => T::parse(s),
        Some(_) => None,
    };
    Ok(parsed.unwrap_or_else(|| {
        debug!(field = T::FIELD, value = ?raw, "unrecognized value; using default");
        T::default()
    }))
}

/// Visual variant of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    /// Fixed class string for the variant. Not overridable by props.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "bg-pink-500 hover:bg-pink-700 text-white h-10 px-5 rounded",
            Self::Secondary => "bg-gray-500 hover:bg-gray-700 text-white h-10 px-5 rounded",
        }
    }
}

impl Choice for ButtonVariant {
    const FIELD: &'static str = "variant";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Text role selected by the `as` property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTag {
    #[default]
    P,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Span,
}

impl TextTag {
    #[must_use]
    pub fn tag(self) -> Tag {
        match self {
            Self::P => Tag::P,
            Self::H1 => Tag::H1,
            Self::H2 => Tag::H2,
            Self::H3 => Tag::H3,
            Self::H4 => Tag::H4,
            Self::H5 => Tag::H5,
            Self::H6 => Tag::H6,
            Self::Span => Tag::Span,
        }
    }
}

impl Choice for TextTag {
    const FIELD: &'static str = "as";

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "p" => Some(Self::P),
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            "h3" => Some(Self::H3),
            "h4" => Some(Self::H4),
            "h5" => Some(Self::H5),
            "h6" => Some(Self::H6),
            "span" => Some(Self::Span),
            _ => None,
        }
    }
}

// =============================================================================
// PROPERTY SHAPES
// =============================================================================

/// Properties of a [`ComponentKind::Button`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ButtonProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Children>,
    #[serde(default, alias = "flavor", deserialize_with = "deserialize_choice")]
    pub variant: ButtonVariant,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the action the host runs on click.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_click: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Properties of a [`ComponentKind::Text`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Children>,
    #[serde(default, rename = "as", deserialize_with = "deserialize_choice")]
    pub tag: TextTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

// =============================================================================
// COMPONENT REFERENCE
// =============================================================================

/// A component reference: one kind plus that kind's properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Component {
    Button(ButtonProps),
    Text(TextProps),
}

impl Component {
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Button(_) => ComponentKind::Button,
            Self::Text(_) => ComponentKind::Text,
        }
    }

    #[must_use]
    pub fn children(&self) -> Option<&Children> {
        match self {
            Self::Button(props) => props.children.as_ref(),
            Self::Text(props) => props.children.as_ref(),
        }
    }

    /// Decode a property bag for `kind`, rejecting properties the kind does
    /// not accept.
    fn from_props(kind: ComponentKind, bag: Map<String, Value>) -> Result<Self, String> {
        let accepted = kind.accepted_props();
        if let Some(unknown) = bag.keys().find(|key| !accepted.contains(&key.as_str())) {
            return Err(format!(
                "`{kind}` does not accept property `{unknown}`; accepted: {}",
                accepted.join(", ")
            ));
        }

        let value = Value::Object(bag);
        let decoded = match kind {
            ComponentKind::Button => ButtonProps::deserialize(value).map(Self::Button),
            ComponentKind::Text => TextProps::deserialize(value).map(Self::Text),
        };
        decoded.map_err(|e| format!("invalid `{kind}` properties: {e}"))
    }
}

impl<'de> Deserialize<'de> for Component {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ComponentVisitor)
    }
}

struct ComponentVisitor;

impl<'de> Visitor<'de> for ComponentVisitor {
    type Value = Component;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a component reference with exactly one of {}", kind_names())
    }

    fn visit_map<A>(self, mut map: A) -> Result<Component, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some(name) = map.next_key::<String>()? else {
            return Err(de::Error::custom(format!(
                "component reference has no kind key; expected one of {}",
                kind_names()
            )));
        };
        let kind = ComponentKind::from_name(&name).ok_or_else(|| {
            de::Error::custom(format!("unknown component kind `{name}`; expected one of {}", kind_names()))
        })?;
        let bag = map.next_value::<Option<Map<String, Value>>>()?.unwrap_or_default();

        if let Some(extra) = map.next_key::<String>()? {
            return Err(de::Error::custom(format!(
                "component reference has more than one kind key (`{name}`, `{extra}`); use one reference per component"
            )));
        }

        Component::from_props(kind, bag).map_err(de::Error::custom)
    }
}

// =============================================================================
// RENDERING
// =============================================================================

/// Render a component with optional content.
///
/// `content` is passed separately from the property bag so callers decide
/// whether the element gets content at all.
#[must_use]
pub fn render(component: &Component, content: Option<&Children>) -> Element {
    match component {
        Component::Button(props) => render_button(props, content),
        Component::Text(props) => render_text(props, content),
    }
}

#[must_use]
pub fn render_button(props: &ButtonProps, content: Option<&Children>) -> Element {
    let el = Element::new(Tag::Button)
        .with_attr("class", props.variant.class())
        .with_optional_attr("id", props.id.as_deref())
        .with_optional_attr("title", props.title.as_deref())
        .with_optional_attr(ON_CLICK_ATTR, props.on_click.as_deref())
        .with_flag("disabled", props.disabled);
    with_content(el, content)
}

#[must_use]
pub fn render_text(props: &TextProps, content: Option<&Children>) -> Element {
    let el = Element::new(props.tag.tag())
        .with_optional_attr("class", props.class_name.as_deref())
        .with_optional_attr("id", props.id.as_deref())
        .with_optional_attr("title", props.title.as_deref());
    with_content(el, content)
}

fn with_content(el: Element, content: Option<&Children>) -> Element {
    match content {
        Some(children) => el.with_children(children.to_nodes()),
        None => el,
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

//! Tree builder — turns a page description into the output node tree.
//!
//! DESIGN
//! ======
//! A single pass over a fixed three-level structure: each section becomes a
//! `section` element, each block a `div`, each component reference the
//! element its registry entry renders. Order is preserved at every level and
//! nothing is filtered. The builder keeps no state between calls.

use tracing::debug;

use crate::node::{Element, Node, Tag};
use crate::page::{Block, PageDescription, Section};
use crate::registry::{self, Component};

/// Build the region elements for `page`, one per section.
#[must_use]
pub fn build(page: &PageDescription) -> Vec<Element> {
    debug!(sections = page.sections.len(), "building page");
    page.sections.iter().map(build_section).collect()
}

fn build_section(section: &Section) -> Element {
    debug!(name = section.name.as_deref(), blocks = section.blocks.len(), "section");
    Element::new(Tag::Section)
        .with_optional_attr("class", section.style.as_deref())
        .with_children(section.blocks.iter().map(|block| Node::from(build_block(block))))
}

fn build_block(block: &Block) -> Element {
    Element::new(Tag::Div)
        .with_optional_attr("class", block.style.as_deref())
        .with_children(block.components.iter().map(|component| Node::from(resolve(component))))
}

/// Render one component reference through the registry.
///
/// Content is passed only when `children` is present, so an absent value
/// yields an element with no content rather than an empty one.
#[must_use]
pub fn resolve(component: &Component) -> Element {
    match component.children() {
        Some(children) => registry::render(component, Some(children)),
        None => registry::render(component, None),
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;

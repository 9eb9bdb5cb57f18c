//! HTML writer for the output tree.
//!
//! DESIGN
//! ======
//! `render_fragment` serializes built regions as-is. `render_document` wraps
//! them in a full document whose head is filled from the page metadata
//! (title, description, Open Graph tags, canonical link). Text and attribute
//! values are escaped; tags and attribute names come from closed sets.

use std::fmt::Write as _;

use crate::node::{Element, Node};
use crate::page::PageDescription;

/// Document-level options that are not part of the page description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Stylesheet linked from the head, if any.
    pub stylesheet: Option<String>,
}

/// Serialize regions to HTML without a surrounding document.
#[must_use]
pub fn render_fragment(regions: &[Element]) -> String {
    let mut out = String::new();
    for el in regions {
        write_element(&mut out, el);
    }
    out
}

/// Serialize a full HTML document for `page` around already-built regions.
#[must_use]
pub fn render_document(page: &PageDescription, regions: &[Element], options: &DocumentOptions) -> String {
    let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    write_head(&mut out, page);
    if let Some(href) = &options.stylesheet {
        let _ = writeln!(out, "<link rel=\"stylesheet\" href=\"{}\">", escape_attr(href));
    }
    out.push_str("</head>\n<body>\n");
    out.push_str(&render_fragment(regions));
    out.push_str("\n</body>\n</html>\n");
    out
}

fn write_head(out: &mut String, page: &PageDescription) {
    if !page.title.is_empty() {
        let _ = writeln!(out, "<title>{}</title>", escape_text(&page.title));
        write_meta(out, "property", "og:title", &page.title);
    }
    if !page.description.is_empty() {
        write_meta(out, "name", "description", &page.description);
        write_meta(out, "property", "og:description", &page.description);
    }
    if !page.url.is_empty() {
        write_meta(out, "property", "og:url", &page.url);
        let _ = writeln!(out, "<link rel=\"canonical\" href=\"{}\">", escape_attr(&page.url));
    }
    if !page.image.is_empty() {
        write_meta(out, "property", "og:image", &page.image);
    }
}

fn write_meta(out: &mut String, key: &str, name: &str, content: &str) {
    let _ = writeln!(out, "<meta {key}=\"{name}\" content=\"{}\">", escape_attr(content));
}

fn write_element(out: &mut String, el: &Element) {
    let tag = el.tag.as_str();
    out.push('<');
    out.push_str(tag);
    for attr in &el.attrs {
        out.push(' ');
        out.push_str(attr.name);
        if !attr.value.is_empty() {
            let _ = write!(out, "=\"{}\"", escape_attr(&attr.value));
        }
    }
    out.push('>');
    for child in &el.children {
        match child {
            Node::Element(child) => write_element(out, child),
            Node::Text { text } => out.push_str(&escape_text(text)),
        }
    }
    let _ = write!(out, "</{tag}>");
}

/// Escape text content.
#[must_use]
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a double-quoted attribute value.
#[must_use]
pub fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;

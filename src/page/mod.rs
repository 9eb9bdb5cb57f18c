//! Page description model and loaders.
//!
//! A page is immutable configuration: built once in Rust or loaded once from
//! a JSON/YAML file at startup, then handed read-only to the builder. Unknown
//! fields are rejected so authoring mistakes fail at load time.

pub mod load;

use serde::{Deserialize, Serialize};

use crate::registry::Component;

pub use load::{from_json_str, from_yaml_str, load_file};

/// Top-level page description.
///
/// `title`, `description`, `url` and `image` are head metadata only; the
/// builder does not read them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageDescription {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Outer region of a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// Inner region of a section, holding component references.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Block {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl PageDescription {
    /// Total number of blocks across all sections.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.sections.iter().map(|s| s.blocks.len()).sum()
    }

    /// Total number of component references across all blocks.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.blocks)
            .map(|b| b.components.len())
            .sum()
    }
}

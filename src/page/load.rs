//! Page loaders for JSON and YAML sources.

use std::path::Path;

use tracing::info;

use super::PageDescription;
use crate::error::PageError;

/// Source format of a page file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Format for `path`, or `None` when the extension is not recognized.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Parse a page description from JSON text.
///
/// # Errors
///
/// Returns [`PageError::Json`] if the text is not a valid page description.
pub fn from_json_str(text: &str) -> Result<PageDescription, PageError> {
    serde_json::from_str(text).map_err(|source| PageError::Json { path: None, source })
}

/// Parse a page description from YAML text.
///
/// # Errors
///
/// Returns [`PageError::Yaml`] if the text is not a valid page description.
pub fn from_yaml_str(text: &str) -> Result<PageDescription, PageError> {
    serde_yaml::from_str(text).map_err(|source| PageError::Yaml { path: None, source })
}

/// Load a page description from a `.json`, `.yaml` or `.yml` file.
///
/// # Errors
///
/// Returns [`PageError::UnsupportedFormat`] for other extensions,
/// [`PageError::Io`] if the file cannot be read, and a parse error naming the
/// file if its contents are not a valid page description.
pub fn load_file(path: &Path) -> Result<PageDescription, PageError> {
    let format = Format::from_path(path).ok_or_else(|| PageError::UnsupportedFormat { path: path.to_path_buf() })?;
    let text = std::fs::read_to_string(path).map_err(|source| PageError::Io { path: path.to_path_buf(), source })?;

    let page: PageDescription = match format {
        Format::Json => serde_json::from_str(&text)
            .map_err(|source| PageError::Json { path: Some(path.to_path_buf()), source })?,
        Format::Yaml => serde_yaml::from_str(&text)
            .map_err(|source| PageError::Yaml { path: Some(path.to_path_buf()), source })?,
    };

    info!(path = %path.display(), ?format, sections = page.sections.len(), "page loaded");
    Ok(page)
}

#[cfg(test)]
#[path = "load_test.rs"]
mod tests;

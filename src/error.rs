//! Errors raised while loading a page description.
//!
//! Rendering is infallible once a page is loaded, so every error in this
//! crate is a configuration error surfaced at load time.

use std::path::PathBuf;

/// Error returned by the page loaders in [`crate::page`].
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The page file could not be read.
    #[error("failed to read page file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The page file is not a valid JSON page description.
    #[error("invalid JSON page description{}: {source}", describe_path(path.as_ref()))]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
    /// The page file is not a valid YAML page description.
    #[error("invalid YAML page description{}: {source}", describe_path(path.as_ref()))]
    Yaml {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },
    /// The file extension does not name a supported format.
    #[error("unsupported page format for {}: expected .json, .yaml or .yml", path.display())]
    UnsupportedFormat { path: PathBuf },
}

fn describe_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| format!(" in {}", p.display()))
}

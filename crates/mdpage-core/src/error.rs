//! Errors for the layers around the converter that touch the filesystem.
//!
//! Conversion itself never fails; only page configuration, rendering and
//! export report errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a page setup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read page config at {}: {source}", config_path.display())]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse page config at {}: {source}", config_path.display())]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid page config: {0}")]
    Invalid(String),
}

/// Failure inside a renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize layout: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write rendered output: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure while exporting a Markdown file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("file \"{}\" not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unknown template kind: {0}")]
    UnknownTemplate(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

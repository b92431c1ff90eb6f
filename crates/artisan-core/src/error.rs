//! Unified error types for the module-artisan toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while resolving an identity or rendering templates.
#[derive(Error, Debug)]
pub enum ArtisanError {
    // --- Configuration ---

    /// The identity configuration file was not found or could not be read.
    #[error("config file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but contains invalid JSON.
    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // --- Identity ---

    /// The (decorated) project name would not produce valid Rust after substitution.
    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The namespace is not a usable Rust module name.
    #[error("invalid namespace '{namespace}': {reason}")]
    InvalidNamespace { namespace: String, reason: String },

    /// A free-text field (author, description) cannot be embedded in a doc comment.
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    // --- Templates ---

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    // --- General ---

    /// JSON serialization failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, ArtisanError>`.
pub type Result<T> = std::result::Result<T, ArtisanError>;

//! Error types for webgme-setup-core

use thiserror::Error;

/// Result type alias using webgme-setup-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types
#[derive(Error, Debug)]
pub enum Error {
    /// No registry in the start directory or any parent
    #[error("Could not find a project in current or any parent directories")]
    ProjectNotFound,

    /// Registry document could not be read as expected
    #[error("Invalid registry at {path}: {message}")]
    InvalidRegistry { path: String, message: String },

    /// Unknown component kind
    #[error("Unknown component type: {kind}. Available types: {available}")]
    UnknownComponentKind { kind: String, available: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Template error from Tera
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    /// Embedded template missing
    #[error("Template not found: {name}")]
    TemplateNotFound { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid registry error
    pub fn invalid_registry(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRegistry {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an unknown component kind error
    pub fn unknown_component_kind(kind: impl Into<String>, available: impl Into<String>) -> Self {
        Self::UnknownComponentKind {
            kind: kind.into(),
            available: available.into(),
        }
    }

    /// Create a template not found error
    pub fn template_not_found(name: impl Into<String>) -> Self {
        Self::TemplateNotFound { name: name.into() }
    }
}

//! Error types for webgme-setup-projects

use thiserror::Error;

/// Result type alias using webgme-setup-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Project scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Target directory already exists
    #[error("Project already exists at: {path}")]
    ProjectExists { path: String },

    /// Directory is already a project
    #[error("A webgme project already exists in {path}")]
    RegistryExists { path: String },

    /// Existing package.json is not a JSON object
    #[error("Invalid package.json at {path}: {message}")]
    InvalidPackageJson { path: String, message: String },

    /// Template rendering error
    #[error("Template rendering failed: {message}")]
    TemplateRenderError { message: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Template error from Tera
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error(transparent)]
    Core(#[from] webgme_setup_core::Error),
}

impl Error {
    /// Create a project exists error
    pub fn project_exists(path: impl Into<String>) -> Self {
        Self::ProjectExists { path: path.into() }
    }

    /// Create a registry exists error
    pub fn registry_exists(path: impl Into<String>) -> Self {
        Self::RegistryExists { path: path.into() }
    }

    /// Create an invalid package.json error
    pub fn invalid_package_json(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPackageJson {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a template render error
    pub fn template_render_error(message: impl Into<String>) -> Self {
        Self::TemplateRenderError {
            message: message.into(),
        }
    }
}

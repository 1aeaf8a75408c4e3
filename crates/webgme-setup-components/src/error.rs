//! Error types for webgme-setup-components

use thiserror::Error;

/// Result type alias using webgme-setup-components's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Component management error types
#[derive(Error, Debug)]
pub enum Error {
    /// `add` called without a component name or project
    #[error("Usage: webgme add {kind} [{kind}] [project]")]
    AddUsage { kind: String },

    /// Component name is not a valid identifier
    #[error("Invalid {kind} name: {name}. Must start with a letter, '_' or '$' and contain only letters, digits, '_' or '$'")]
    InvalidName { kind: String, name: String },

    /// Name already registered for the kind
    #[error("{kind} '{name}' already exists")]
    AlreadyRegistered { kind: String, name: String },

    /// Name not registered for the kind
    #[error("{name} is not a registered {kind}")]
    NotRegistered { kind: String, name: String },

    /// Package manager exited unsuccessfully
    #[error("Could not find project!")]
    InstallFailed,

    /// Installed package has neither a registry nor a framework config
    #[error("Did not recognize the project as a WebGME project")]
    UnrecognizedProject { package: String },

    /// Installed package does not provide the component
    #[error("{package} does not contain {name}")]
    MissingComponent { package: String, name: String },

    /// Command not found
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// Seeds are created from an exported project file
    #[error("A seed is created from an existing project export. Pass it with --file")]
    SeedFileRequired,

    /// Seed file does not exist
    #[error("Seed file not found: {path}")]
    SeedFileNotFound { path: String },

    /// Template rendering error
    #[error("Template rendering failed: {message}")]
    TemplateRenderError { message: String },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Template error from Tera
    #[error("Template error: {0}")]
    Tera(#[from] tera::Error),

    /// Regex error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error(transparent)]
    Core(#[from] webgme_setup_core::Error),
}

impl Error {
    /// Create an add usage error
    pub fn add_usage(kind: impl Into<String>) -> Self {
        Self::AddUsage { kind: kind.into() }
    }

    /// Create an invalid name error
    pub fn invalid_name(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::InvalidName {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create an already registered error
    pub fn already_registered(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::AlreadyRegistered {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create a not registered error
    pub fn not_registered(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::NotRegistered {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create an unrecognized project error
    pub fn unrecognized_project(package: impl Into<String>) -> Self {
        Self::UnrecognizedProject {
            package: package.into(),
        }
    }

    /// Create a missing component error
    pub fn missing_component(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::MissingComponent {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a seed file not found error
    pub fn seed_file_not_found(path: impl Into<String>) -> Self {
        Self::SeedFileNotFound { path: path.into() }
    }

    /// Create a template render error
    pub fn template_render_error(message: impl Into<String>) -> Self {
        Self::TemplateRenderError {
            message: message.into(),
        }
    }
}

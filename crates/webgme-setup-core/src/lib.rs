//! # webgme-setup-core
//!
//! Core library for the webgme setup CLI providing:
//! - The component registry document (`webgme-setup.json`)
//! - Project root discovery
//! - Component kinds and their naming in the registry and framework config
//! - Package-name parsing for install specs
//! - Rendering of the generated `config/config.webgme.js`

pub mod error;
pub mod kind;
pub mod package;
pub mod project;
pub mod registry;
pub mod render;

pub use error::{Error, Result};
pub use kind::ComponentKind;
pub use project::{find_project_root, Project};
pub use registry::{ComponentEntry, DependencyEntry, RegistryGroup, SetupRegistry, REGISTRY_FILE};

/// WebGME version new projects depend on
pub const WEBGME_VERSION: &str = "^2.42.1";

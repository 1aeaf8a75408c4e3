//! # webgme-setup-components
//!
//! Component management for the webgme setup CLI:
//! - [`ComponentManager`]: `ls`, `new`, `add` and `rm` for one component kind
//! - [`PackageInstaller`]: seam around the package manager, with [`NpmInstaller`]
//! - [`DependencyLocator`]: finds a component inside an installed package
//! - Boilerplate for newly created components
//!
//! Every change to the registry is followed by a regeneration of
//! `config/config.webgme.js`.

pub mod boilerplate;
pub mod error;
pub mod installer;
pub mod locator;
pub mod manager;
pub mod visualizers;

pub use error::{Error, Result};
pub use installer::{InstallStatus, NpmInstaller, PackageInstaller};
pub use locator::DependencyLocator;
pub use manager::{ComponentListing, ComponentManager, NewComponentOptions, Removal, SaveLocation};

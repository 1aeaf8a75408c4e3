//! # webgme-setup-projects
//!
//! Project scaffolding for the webgme setup CLI providing:
//! - `init`: directory layout, registry and generated framework config
//! - Embedded boilerplate (`app.js`, editable config, test fixture, ...)
//! - `package.json` creation and merging
//!
//! # Example
//!
//! ```no_run
//! use camino::Utf8Path;
//! use webgme_setup_projects::{init_project, InitOptions};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = InitOptions::new(Utf8Path::new("/tmp")).with_name("MyDomain");
//! let report = init_project(&options)?;
//! println!("Created {}", report.project_dir);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod init;
pub mod package_json;
pub mod templates;

pub use error::{Error, Result};
pub use init::{init_project, InitOptions, InitReport};
pub use templates::{ProjectTemplates, ProjectVars};

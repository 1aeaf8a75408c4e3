//! Utility functions shared across CLI commands

use anyhow::{anyhow, Context, Result};
use camino::Utf8PathBuf;

use webgme_setup_core::Project;

/// Current working directory as a UTF-8 path
pub fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    Utf8PathBuf::try_from(cwd)
        .map_err(|e| anyhow!("Current directory is not valid UTF-8: {}", e.into_path_buf().display()))
}

/// Project containing the current directory
pub fn current_project() -> Result<Project> {
    Ok(Project::discover(&current_dir()?)?)
}

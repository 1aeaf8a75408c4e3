//! `webgme config` command handler

use anyhow::Result;

use crate::output;
use crate::utils::current_project;

/// Regenerate the framework config from the registry
pub fn run() -> Result<()> {
    let project = current_project()?;
    let path = project.update_framework_config()?;
    output::success(&format!("Wrote {}", path));
    Ok(())
}

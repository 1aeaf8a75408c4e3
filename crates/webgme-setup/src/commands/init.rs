//! `webgme init` command handler

use anyhow::Result;

use webgme_setup_projects::{init_project, InitOptions};

use crate::cli::InitArgs;
use crate::output;
use crate::utils::current_dir;

/// Create a project in `<cwd>/<name>`, or in the cwd itself
pub fn run(args: InitArgs) -> Result<()> {
    let mut options = InitOptions::new(current_dir()?);
    if let Some(name) = args.name {
        options = options.with_name(name);
    }

    let report = init_project(&options)?;

    for path in &report.skipped {
        output::info(&format!("Kept existing {}", path));
    }
    output::kv("Location", report.project_dir.as_str());
    output::kv("Files", &report.created.len().to_string());
    output::success("Project created. Run `npm install` to fetch webgme.");

    Ok(())
}

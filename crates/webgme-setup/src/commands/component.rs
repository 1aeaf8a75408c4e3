//! `ls`, `new`, `add` and `rm` command handlers

use anyhow::Result;
use dialoguer::Confirm;

use webgme_setup_components::{ComponentManager, NewComponentOptions, NpmInstaller};
use webgme_setup_core::{ComponentKind, RegistryGroup};

use crate::cli::{AddArgs, LsArgs, NewArgs, RmArgs};
use crate::output;
use crate::utils::current_project;

fn manager(kind: &str) -> Result<ComponentManager> {
    let kind: ComponentKind = kind.parse()?;
    Ok(ComponentManager::new(kind, current_project()?)?)
}

/// List local and third party components
pub fn list(args: LsArgs) -> Result<()> {
    let listing = manager(&args.kind)?.list()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        println!("{}", listing);
    }

    Ok(())
}

/// Create a component from boilerplate
pub fn create(args: NewArgs) -> Result<()> {
    let manager = manager(&args.kind)?;

    let mut options = NewComponentOptions::default();
    if let Some(file) = args.file {
        options = options.with_seed_file(file);
    }

    let entry = manager.create(&args.name, &options)?;
    for (kind, path) in &entry.paths {
        output::kv(kind, path.as_str());
    }
    output::success(&format!("Created {} {}", manager.kind(), args.name));

    Ok(())
}

/// Install a project with npm and register one of its components
pub async fn add(args: AddArgs, npm: &str) -> Result<()> {
    let kind: ComponentKind = args.kind.parse()?;
    let manager =
        ComponentManager::with_installer(kind, current_project()?, NpmInstaller::new(npm))?;

    let entry = manager
        .add(args.name.as_deref(), args.project.as_deref())
        .await?;
    output::success(&format!(
        "Added {} from {} ({})",
        args.name.as_deref().unwrap_or_default(),
        entry.project,
        entry.path
    ));

    Ok(())
}

/// Remove a component, asking before local files are deleted
pub fn remove(args: RmArgs) -> Result<()> {
    let manager = manager(&args.kind)?;

    if !args.yes && manager.lookup(&args.name)? == Some(RegistryGroup::Components) {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {} and delete its files?", args.name))
            .default(false)
            .interact()?;

        if !confirmed {
            output::info("Cancelled");
            return Ok(());
        }
    }

    let removal = manager.remove(&args.name)?;
    for path in &removal.removed_paths {
        output::kv("Deleted", path.as_str());
    }
    output::success(&format!("Removed the {}!", removal.name));

    Ok(())
}

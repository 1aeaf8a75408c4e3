//! Locating a component inside an installed package.
//!
//! A package is recognized either by its own `webgme-setup.json`, which
//! records the component's source path directly, or by a
//! `config/config.webgme.js` whose base paths are searched for a directory
//! named after the component.

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use std::fs;
use tracing::debug;

use webgme_setup_core::project::FRAMEWORK_CONFIG_FILE;
use webgme_setup_core::{ComponentKind, SetupRegistry, REGISTRY_FILE};

use crate::error::{Error, Result};

/// Finds components of one kind inside installed packages
#[derive(Debug, Clone)]
pub struct DependencyLocator {
    kind: ComponentKind,
    project_root: Utf8PathBuf,
}

impl DependencyLocator {
    /// Locator for packages installed under `project_root/node_modules`
    pub fn new(kind: ComponentKind, project_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            kind,
            project_root: project_root.into(),
        }
    }

    /// Root directory of an installed package
    pub fn dependency_root(&self, package: &str) -> Utf8PathBuf {
        self.project_root
            .join("node_modules")
            .join(package.to_lowercase())
    }

    /// Directory of `name` inside `package`, relative to the project root
    pub fn locate(&self, package: &str, name: &str) -> Result<Utf8PathBuf> {
        let dependency_root = self.dependency_root(package);
        let registry_path = dependency_root.join(REGISTRY_FILE);
        let config_path = dependency_root.join(FRAMEWORK_CONFIG_FILE);

        let found = if registry_path.is_file() {
            debug!("Reading component paths from {}", registry_path);
            self.from_registry(&registry_path, name)?
        } else if config_path.is_file() {
            debug!("Reading component paths from {}", config_path);
            self.from_framework_config(&dependency_root, &config_path, name)?
        } else {
            return Err(Error::unrecognized_project(package));
        };

        let component_path = found.ok_or_else(|| Error::missing_component(package, name))?;

        let mut absolute = if component_path.is_absolute() {
            component_path
        } else {
            dependency_root.join(component_path)
        };
        if !absolute.exists() {
            return Err(Error::missing_component(package, name));
        }
        if !absolute.is_dir() {
            if let Some(parent) = absolute.parent() {
                absolute = parent.to_path_buf();
            }
        }

        if let Ok(relative) = absolute.strip_prefix(&self.project_root) {
            return Ok(relative.to_path_buf());
        }
        Ok(absolute)
    }

    fn from_registry(&self, registry_path: &Utf8Path, name: &str) -> Result<Option<Utf8PathBuf>> {
        let registry = SetupRegistry::load(registry_path)?;
        Ok(registry
            .components_of(self.kind)
            .and_then(|group| group.get(name))
            .and_then(|entry| entry.src())
            .map(Utf8Path::to_path_buf))
    }

    fn from_framework_config(
        &self,
        dependency_root: &Utf8Path,
        config_path: &Utf8Path,
        name: &str,
    ) -> Result<Option<Utf8PathBuf>> {
        let content = fs::read_to_string(config_path)?;

        let mut candidates = match self.kind.base_paths_key() {
            Some(key) => base_paths(&content, key)?,
            None => Vec::new(),
        };
        // Packages that never registered the kind still follow the src layout
        candidates.push(Utf8PathBuf::from("src").join(self.kind.group()));

        Ok(candidates
            .into_iter()
            .map(|base| {
                if base.is_absolute() {
                    base
                } else {
                    dependency_root.join(base)
                }
            })
            .find(|base| base.join(name).exists())
            .map(|base| base.join(name)))
    }
}

/// Values pushed onto `config.<key>` in a framework config
pub fn base_paths(content: &str, key: &str) -> Result<Vec<Utf8PathBuf>> {
    let pattern = format!(
        r#"config\.{}\.push\(\s*['"]([^'"]+)['"]\s*\)"#,
        regex::escape(key)
    );
    let re = Regex::new(&pattern)?;

    Ok(re
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| Utf8PathBuf::from(m.as_str().trim_start_matches("./")))
        .collect())
}

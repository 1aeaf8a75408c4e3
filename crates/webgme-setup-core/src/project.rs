//! Project root discovery and project-level file locations

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::registry::{SetupRegistry, REGISTRY_FILE};
use crate::render::FrameworkConfigRenderer;

/// Generated framework config, relative to the project root
pub const FRAMEWORK_CONFIG_FILE: &str = "config/config.webgme.js";

/// Find the project root in `start` or any parent directory
pub fn find_project_root(start: &Utf8Path) -> Option<Utf8PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        if dir.join(REGISTRY_FILE).is_file() {
            return Some(dir.to_owned());
        }
        current = dir.parent();
    }

    None
}

/// A webgme project rooted at the directory holding `webgme-setup.json`
#[derive(Debug, Clone)]
pub struct Project {
    root: Utf8PathBuf,
}

impl Project {
    /// Use `root` as the project root without checking for a registry
    pub fn at(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Find the project containing `start`
    pub fn discover(start: &Utf8Path) -> Result<Self> {
        let root = find_project_root(start).ok_or(Error::ProjectNotFound)?;
        debug!("Found project root: {}", root);
        Ok(Self { root })
    }

    /// Project root directory
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Path of the registry document
    pub fn registry_path(&self) -> Utf8PathBuf {
        self.root.join(REGISTRY_FILE)
    }

    /// Path of the generated framework config
    pub fn framework_config_path(&self) -> Utf8PathBuf {
        self.root.join(FRAMEWORK_CONFIG_FILE)
    }

    /// Directory the package manager installs into
    pub fn node_modules_dir(&self) -> Utf8PathBuf {
        self.root.join("node_modules")
    }

    /// Database name for the project: directory name, lowercased, dots
    /// replaced with underscores
    pub fn app_name(&self) -> String {
        app_name_for(&self.root)
    }

    /// Load the registry document
    pub fn load_registry(&self) -> Result<SetupRegistry> {
        SetupRegistry::load(&self.registry_path())
    }

    /// Overwrite the registry document
    pub fn save_registry(&self, registry: &SetupRegistry) -> Result<()> {
        registry.save(&self.registry_path())
    }

    /// Regenerate `config/config.webgme.js` from the registry on disk
    pub fn update_framework_config(&self) -> Result<Utf8PathBuf> {
        let registry = self.load_registry()?;
        self.write_framework_config(&registry)
    }

    /// Write `config/config.webgme.js` for the given registry
    pub fn write_framework_config(&self, registry: &SetupRegistry) -> Result<Utf8PathBuf> {
        let renderer = FrameworkConfigRenderer::new()?;
        let content = renderer.render(registry, &self.app_name())?;

        let path = self.framework_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        info!("Updated {}", FRAMEWORK_CONFIG_FILE);

        Ok(path)
    }
}

/// App name derived from a project directory
pub fn app_name_for(root: &Utf8Path) -> String {
    root.file_name()
        .map(|name| name.to_lowercase().replace('.', "_"))
        .unwrap_or_else(|| "webgme".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn utf8(path: &std::path::Path) -> Utf8PathBuf {
        Utf8PathBuf::try_from(path.to_path_buf()).unwrap()
    }

    #[test]
    fn test_app_name() {
        assert_eq!(app_name_for(Utf8Path::new("/tmp/Init.Project")), "init_project");
        assert_eq!(app_name_for(Utf8Path::new("/tmp/BasicProject")), "basicproject");
    }

    #[test]
    fn test_find_project_root_from_nested_dir() {
        let dir = tempdir().unwrap();
        let root = utf8(dir.path());
        SetupRegistry::with_all_groups()
            .save(&root.join(REGISTRY_FILE))
            .unwrap();

        let nested = root.join("src").join("plugins");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), Some(root.clone()));
        assert_eq!(Project::discover(&nested).unwrap().root(), root);
    }

    #[test]
    fn test_discover_without_project() {
        let dir = tempdir().unwrap();
        let err = Project::discover(&utf8(dir.path())).unwrap_err();
        assert!(matches!(err, Error::ProjectNotFound));
        assert_eq!(
            err.to_string(),
            "Could not find a project in current or any parent directories"
        );
    }

    #[test]
    fn test_update_framework_config_writes_file() {
        let dir = tempdir().unwrap();
        let root = utf8(dir.path()).join("My.App");
        std::fs::create_dir_all(&root).unwrap();

        let project = Project::at(&root);
        project
            .save_registry(&SetupRegistry::with_all_groups())
            .unwrap();

        let path = project.update_framework_config().unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("mongodb://127.0.0.1:27017/my_app"));
    }
}

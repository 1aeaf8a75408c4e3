//! The component registry document (`webgme-setup.json`)
//!
//! ```json
//! {
//!   "components": {
//!     "plugins": { "MyPlugin": { "src": "src/plugins/MyPlugin", "test": "test/plugins/MyPlugin" } }
//!   },
//!   "dependencies": {
//!     "plugins": { "Other": { "project": "webgme-other", "path": "node_modules/webgme-other/src/plugins/Other" } }
//!   }
//! }
//! ```
//!
//! Both groups are keyed by the pluralized component kind, then by component
//! name. Writes overwrite the whole file.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use tracing::debug;

use crate::error::{Error, Result};
use crate::kind::ComponentKind;

/// Registry file name at the project root
pub const REGISTRY_FILE: &str = "webgme-setup.json";

/// Locally authored component: paths keyed by path kind (`src`, `test`, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    #[serde(flatten)]
    pub paths: BTreeMap<String, Utf8PathBuf>,
}

impl ComponentEntry {
    /// Create an entry with only a source path
    pub fn with_src(src: impl Into<Utf8PathBuf>) -> Self {
        let mut paths = BTreeMap::new();
        paths.insert("src".to_string(), src.into());
        Self { paths }
    }

    /// Add another path kind
    pub fn with_path(mut self, kind: impl Into<String>, path: impl Into<Utf8PathBuf>) -> Self {
        self.paths.insert(kind.into(), path.into());
        self
    }

    /// Source path, if recorded
    pub fn src(&self) -> Option<&Utf8Path> {
        self.paths.get("src").map(|p| p.as_path())
    }

    /// Test path, if recorded
    pub fn test(&self) -> Option<&Utf8Path> {
        self.paths.get("test").map(|p| p.as_path())
    }
}

/// Component installed from a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEntry {
    /// Package providing the component
    pub project: String,
    /// Component location relative to the project root
    pub path: Utf8PathBuf,
}

/// Top-level grouping of the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryGroup {
    /// Locally authored components
    Components,
    /// Externally installed components
    Dependencies,
}

impl RegistryGroup {
    /// Key of the group in the document
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Components => "components",
            Self::Dependencies => "dependencies",
        }
    }
}

impl fmt::Display for RegistryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Group<T> = BTreeMap<String, BTreeMap<String, T>>;

/// Parsed registry document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupRegistry {
    #[serde(default)]
    pub components: Group<ComponentEntry>,

    #[serde(default)]
    pub dependencies: Group<DependencyEntry>,
}

impl SetupRegistry {
    /// Empty registry with a group for every known component kind
    pub fn with_all_groups() -> Self {
        let mut registry = Self::default();
        for kind in ComponentKind::all() {
            registry.ensure_group(kind);
        }
        registry
    }

    /// Load the registry from a file
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let registry: Self = serde_json::from_str(&content)
            .map_err(|e| Error::invalid_registry(path.as_str(), e.to_string()))?;
        debug!(
            "Loaded registry from {} ({} local, {} third party)",
            path,
            registry.components.values().map(BTreeMap::len).sum::<usize>(),
            registry.dependencies.values().map(BTreeMap::len).sum::<usize>()
        );
        Ok(registry)
    }

    /// Save the registry, pretty-printed
    pub fn save(&self, path: &Utf8Path) -> Result<()> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        fs::write(path, content)?;
        debug!("Saved registry to {}", path);
        Ok(())
    }

    /// Make sure both top-level groups have an entry for the kind.
    ///
    /// Returns true if anything was added.
    pub fn ensure_group(&mut self, kind: ComponentKind) -> bool {
        let group = kind.group().to_string();
        let mut changed = false;
        if !self.components.contains_key(&group) {
            self.components.insert(group.clone(), BTreeMap::new());
            changed = true;
        }
        if !self.dependencies.contains_key(&group) {
            self.dependencies.insert(group, BTreeMap::new());
            changed = true;
        }
        changed
    }

    /// Local components of a kind
    pub fn components_of(&self, kind: ComponentKind) -> Option<&BTreeMap<String, ComponentEntry>> {
        self.components.get(kind.group())
    }

    /// Installed dependencies of a kind
    pub fn dependencies_of(
        &self,
        kind: ComponentKind,
    ) -> Option<&BTreeMap<String, DependencyEntry>> {
        self.dependencies.get(kind.group())
    }

    /// Names of local components of a kind, sorted
    pub fn component_names(&self, kind: ComponentKind) -> Vec<String> {
        self.components_of(kind)
            .map(|group| group.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Names of installed dependencies of a kind, sorted
    pub fn dependency_names(&self, kind: ComponentKind) -> Vec<String> {
        self.dependencies_of(kind)
            .map(|group| group.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Find which group holds a name, local components first
    pub fn locate(&self, kind: ComponentKind, name: &str) -> Option<RegistryGroup> {
        if self
            .components_of(kind)
            .is_some_and(|group| group.contains_key(name))
        {
            Some(RegistryGroup::Components)
        } else if self
            .dependencies_of(kind)
            .is_some_and(|group| group.contains_key(name))
        {
            Some(RegistryGroup::Dependencies)
        } else {
            None
        }
    }

    /// Insert or replace a local component
    pub fn insert_component(&mut self, kind: ComponentKind, name: &str, entry: ComponentEntry) {
        self.components
            .entry(kind.group().to_string())
            .or_default()
            .insert(name.to_string(), entry);
    }

    /// Insert or replace an installed dependency
    pub fn insert_dependency(&mut self, kind: ComponentKind, name: &str, entry: DependencyEntry) {
        self.dependencies
            .entry(kind.group().to_string())
            .or_default()
            .insert(name.to_string(), entry);
    }

    /// Remove a local component, returning its entry
    pub fn remove_component(&mut self, kind: ComponentKind, name: &str) -> Option<ComponentEntry> {
        self.components
            .get_mut(kind.group())
            .and_then(|group| group.remove(name))
    }

    /// Remove an installed dependency, returning its entry
    pub fn remove_dependency(
        &mut self,
        kind: ComponentKind,
        name: &str,
    ) -> Option<DependencyEntry> {
        self.dependencies
            .get_mut(kind.group())
            .and_then(|group| group.remove(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_with_all_groups() {
        let registry = SetupRegistry::with_all_groups();
        for kind in ComponentKind::all() {
            assert!(registry.components.contains_key(kind.group()));
            assert!(registry.dependencies.contains_key(kind.group()));
        }
    }

    #[test]
    fn test_parse_document() {
        let json = r#"{
            "components": {
                "plugins": {
                    "MyPlugin": { "src": "src/plugins/MyPlugin", "test": "test/plugins/MyPlugin" }
                }
            },
            "dependencies": {
                "plugins": {
                    "Other": { "project": "webgme-other", "path": "node_modules/webgme-other/src/plugins/Other" }
                }
            }
        }"#;

        let registry: SetupRegistry = serde_json::from_str(json).unwrap();
        let entry = &registry.components["plugins"]["MyPlugin"];
        assert_eq!(entry.src(), Some(Utf8Path::new("src/plugins/MyPlugin")));
        assert_eq!(entry.test(), Some(Utf8Path::new("test/plugins/MyPlugin")));
        assert_eq!(registry.dependencies["plugins"]["Other"].project, "webgme-other");
    }

    #[test]
    fn test_locate_prefers_components() {
        let mut registry = SetupRegistry::with_all_groups();
        registry.insert_component(
            ComponentKind::Plugin,
            "Shared",
            ComponentEntry::with_src("src/plugins/Shared"),
        );
        registry.insert_dependency(
            ComponentKind::Plugin,
            "Shared",
            DependencyEntry {
                project: "pkg".to_string(),
                path: "node_modules/pkg/src/plugins/Shared".into(),
            },
        );

        assert_eq!(
            registry.locate(ComponentKind::Plugin, "Shared"),
            Some(RegistryGroup::Components)
        );
        assert_eq!(registry.locate(ComponentKind::AddOn, "Shared"), None);
    }

    #[test]
    fn test_ensure_group_reports_changes() {
        let mut registry = SetupRegistry::default();
        assert!(registry.ensure_group(ComponentKind::Layout));
        assert!(!registry.ensure_group(ComponentKind::Layout));
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let dir = tempdir().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join(REGISTRY_FILE)).unwrap();

        SetupRegistry::with_all_groups().save(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.lines().count() > 3);
        assert!(content.ends_with('\n'));

        let loaded = SetupRegistry::load(&path).unwrap();
        assert_eq!(loaded, SetupRegistry::with_all_groups());
    }

    #[test]
    fn test_load_rejects_malformed_document() {
        let dir = tempdir().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join(REGISTRY_FILE)).unwrap();
        std::fs::write(&path, "stuff").unwrap();

        let err = SetupRegistry::load(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidRegistry { .. }));
    }
}

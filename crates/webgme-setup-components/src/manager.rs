//! Component manager: `ls`, `new`, `add` and `rm` for one component kind.
//!
//! Every operation that changes the registry saves it and regenerates the
//! framework config before returning.

use camino::{Utf8Path, Utf8PathBuf};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::fs;
use tracing::{debug, info, warn};

use webgme_setup_core::package::package_name;
use webgme_setup_core::{
    ComponentEntry, ComponentKind, DependencyEntry, Project, RegistryGroup, SetupRegistry,
};

use crate::boilerplate::{self, BoilerplateRenderer, ComponentVars};
use crate::error::{Error, Result};
use crate::installer::{NpmInstaller, PackageInstaller};
use crate::locator::DependencyLocator;
use crate::visualizers::{VisualizerDescriptor, VisualizerDescriptors};

const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_$][A-Za-z0-9_$]*$";

/// Extension of exported seed projects
const SEED_EXTENSION: &str = "webgmex";

/// Top-level tree a component file lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveLocation {
    Src,
    Test,
}

impl SaveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Src => "src",
            Self::Test => "test",
        }
    }
}

/// Output of `ls`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentListing {
    pub group: String,
    pub local: Vec<String>,
    pub third_party: Vec<String>,
}

impl fmt::Display for ComponentListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Detected {}: {}", self.group, names_or_none(&self.local))?;
        write!(
            f,
            "Third party {}: {}",
            self.group,
            names_or_none(&self.third_party)
        )
    }
}

fn names_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "<none>".to_string()
    } else {
        names.join(" ")
    }
}

/// Options for `new`
#[derive(Debug, Clone, Default)]
pub struct NewComponentOptions {
    /// Exported project to create a seed from
    pub seed_file: Option<Utf8PathBuf>,
}

impl NewComponentOptions {
    pub fn with_seed_file(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.seed_file = Some(path.into());
        self
    }
}

/// Outcome of `rm`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub name: String,
    pub group: RegistryGroup,
    /// Local paths deleted from disk
    pub removed_paths: Vec<Utf8PathBuf>,
}

/// Manages the components of one kind in a project
pub struct ComponentManager<I: PackageInstaller = NpmInstaller> {
    kind: ComponentKind,
    project: Project,
    installer: I,
}

impl ComponentManager<NpmInstaller> {
    /// Manager using the default npm installer
    pub fn new(kind: ComponentKind, project: Project) -> Result<Self> {
        Self::with_installer(kind, project, NpmInstaller::default())
    }
}

impl<I: PackageInstaller> ComponentManager<I> {
    /// Manager with a custom installer. Adds every missing kind group to
    /// the registry.
    pub fn with_installer(kind: ComponentKind, project: Project, installer: I) -> Result<Self> {
        let mut registry = project.load_registry()?;
        let mut changed = false;
        for known in ComponentKind::all() {
            changed |= registry.ensure_group(known);
        }
        if changed {
            debug!("Adding missing groups to the registry");
            project.save_registry(&registry)?;
        }

        Ok(Self {
            kind,
            project,
            installer,
        })
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Local and third party components of the kind
    pub fn list(&self) -> Result<ComponentListing> {
        let registry = self.project.load_registry()?;
        Ok(ComponentListing {
            group: self.kind.group().to_string(),
            local: registry.component_names(self.kind),
            third_party: registry.dependency_names(self.kind),
        })
    }

    /// Which registry group holds `name`, local components first
    pub fn lookup(&self, name: &str) -> Result<Option<RegistryGroup>> {
        Ok(self.project.load_registry()?.locate(self.kind, name))
    }

    /// Create a local component from boilerplate and register it
    pub fn create(&self, name: &str, options: &NewComponentOptions) -> Result<ComponentEntry> {
        validate_name(self.kind, name)?;
        if self.lookup(name)?.is_some() {
            return Err(Error::already_registered(self.kind.as_str(), name));
        }

        let entry = match self.kind {
            ComponentKind::Seed => self.create_seed(name, options.seed_file.as_deref())?,
            kind => {
                let renderer = BoilerplateRenderer::new()?;
                let vars = ComponentVars::new(kind, name);
                for file in boilerplate::files_for(kind, name) {
                    let path = self.save_location(file.location)?.join(&file.path);
                    if let Some(parent) = path.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::write(&path, renderer.render(&file, &vars)?)?;
                    debug!("Created {}", path);
                }
                boilerplate::entry_for(kind, name)
            }
        };

        info!("Created new {} at {}", self.kind, display_src(&entry));
        self.register(name, entry.clone())?;

        if self.kind == ComponentKind::Visualizer {
            self.upsert_descriptor(name)?;
        }

        Ok(entry)
    }

    fn create_seed(&self, name: &str, seed_file: Option<&Utf8Path>) -> Result<ComponentEntry> {
        let source = seed_file.ok_or(Error::SeedFileRequired)?;
        if !source.is_file() {
            return Err(Error::seed_file_not_found(source.as_str()));
        }

        let dir = self.save_location(SaveLocation::Src)?.join(name);
        fs::create_dir_all(&dir)?;
        let target = dir.join(format!("{}.{}", name, SEED_EXTENSION));
        fs::copy(source, &target)?;
        debug!("Copied {} to {}", source, target);

        Ok(ComponentEntry::with_src(
            Utf8PathBuf::from(SaveLocation::Src.as_str())
                .join(self.kind.group())
                .join(name),
        ))
    }

    /// Install `project` with the package manager and register `name` from it
    pub async fn add(&self, name: Option<&str>, project: Option<&str>) -> Result<DependencyEntry> {
        let name = name.filter(|s| !s.trim().is_empty());
        let project = project.filter(|s| !s.trim().is_empty());
        let (Some(name), Some(spec)) = (name, project) else {
            return Err(Error::add_usage(self.kind.as_str()));
        };

        let package = package_name(spec);
        info!("Adding {} from {}", name, package);
        info!("{} install {} --save", self.installer.program(), spec);

        let status = self.installer.install(self.project.root(), spec).await?;
        match status.code {
            Some(code) => info!("{} exited with: {}", self.installer.program(), code),
            None => warn!("{} was terminated by a signal", self.installer.program()),
        }
        if !status.success() {
            return Err(Error::InstallFailed);
        }

        let locator = DependencyLocator::new(self.kind, self.project.root());
        let path = locator.locate(&package, name)?;
        let entry = DependencyEntry {
            project: package,
            path,
        };

        let mut registry = self.project.load_registry()?;
        registry.insert_dependency(self.kind, name, entry.clone());
        self.commit(&registry)?;

        if self.kind == ComponentKind::Visualizer {
            self.upsert_descriptor(name)?;
        }

        Ok(entry)
    }

    /// Remove `name` from the registry, deleting local files
    pub fn remove(&self, name: &str) -> Result<Removal> {
        let mut registry = self.project.load_registry()?;
        let group = registry
            .locate(self.kind, name)
            .ok_or_else(|| Error::not_registered(self.kind.as_str(), name))?;

        // Registry and descriptors are updated before any file is deleted
        let mut descriptors = match self.kind {
            ComponentKind::Visualizer => Some(VisualizerDescriptors::load(self.project.root())?),
            _ => None,
        };

        let local_paths: Vec<Utf8PathBuf> = match group {
            RegistryGroup::Components => registry
                .remove_component(self.kind, name)
                .map(|entry| entry.paths.into_values().collect())
                .unwrap_or_default(),
            RegistryGroup::Dependencies => {
                registry.remove_dependency(self.kind, name);
                Vec::new()
            }
        };

        self.commit(&registry)?;
        if let Some(descriptors) = descriptors.as_mut() {
            if descriptors.remove(name) {
                descriptors.save()?;
            }
        }
        debug!("Removed {} from {}", name, group);

        let mut removed_paths = Vec::new();
        for path in local_paths {
            if self.delete_path(&path)? {
                removed_paths.push(path);
            }
        }

        Ok(Removal {
            name: name.to_string(),
            group,
            removed_paths,
        })
    }

    /// Store a local component entry
    pub fn register(&self, name: &str, entry: ComponentEntry) -> Result<()> {
        let mut registry = self.project.load_registry()?;
        registry.insert_component(self.kind, name, entry);
        self.commit(&registry)
    }

    /// `<root>/<src|test>/<group>`, created if missing
    pub fn save_location(&self, location: SaveLocation) -> Result<Utf8PathBuf> {
        let dir = self
            .project
            .root()
            .join(location.as_str())
            .join(self.kind.group());
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    fn commit(&self, registry: &SetupRegistry) -> Result<()> {
        self.project.save_registry(registry)?;
        self.project.write_framework_config(registry)?;
        Ok(())
    }

    fn upsert_descriptor(&self, name: &str) -> Result<()> {
        let mut descriptors = VisualizerDescriptors::load(self.project.root())?;
        descriptors.upsert(VisualizerDescriptor::for_panel(
            name,
            format!("panels/{}/{}Panel", name, name),
        ));
        descriptors.save()
    }

    /// Delete a recorded path; false if it was already gone
    fn delete_path(&self, path: &Utf8Path) -> Result<bool> {
        let absolute = self.project.root().join(path);
        if absolute.is_dir() {
            fs::remove_dir_all(&absolute)?;
        } else if absolute.exists() {
            fs::remove_file(&absolute)?;
        } else {
            debug!("{} does not exist, skipping", absolute);
            return Ok(false);
        }
        debug!("Deleted {}", absolute);
        Ok(true)
    }
}

fn validate_name(kind: ComponentKind, name: &str) -> Result<()> {
    let re = Regex::new(IDENTIFIER_PATTERN)?;
    if re.is_match(name) {
        Ok(())
    } else {
        Err(Error::invalid_name(kind.as_str(), name))
    }
}

fn display_src(entry: &ComponentEntry) -> String {
    entry
        .src()
        .map(|src| src.to_string())
        .unwrap_or_else(|| "<unknown>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        for name in ["MyPlugin", "_private", "$dollar", "a1"] {
            assert!(validate_name(ComponentKind::Plugin, name).is_ok(), "{}", name);
        }
        for name in ["1abc", "my-plugin", "", "with space", "dot.name"] {
            assert!(validate_name(ComponentKind::Plugin, name).is_err(), "{}", name);
        }
    }

    #[test]
    fn test_listing_display() {
        let listing = ComponentListing {
            group: "plugins".to_string(),
            local: vec!["A".to_string(), "B".to_string()],
            third_party: Vec::new(),
        };
        assert_eq!(
            listing.to_string(),
            "Detected plugins: A B\nThird party plugins: <none>"
        );
    }

    #[test]
    fn test_save_location_str() {
        assert_eq!(SaveLocation::Src.as_str(), "src");
        assert_eq!(SaveLocation::Test.as_str(), "test");
    }
}

//! Template context for the generated framework config

use camino::Utf8Path;
use serde::Serialize;

use crate::kind::ComponentKind;
use crate::registry::SetupRegistry;

/// Name/path pair for requirejs mappings and REST routers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedPath {
    pub name: String,
    pub path: String,
}

/// Everything `config.webgme.js.tera` needs
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrameworkConfigContext {
    pub app_name: String,
    pub plugin_paths: Vec<String>,
    pub addon_paths: Vec<String>,
    pub decorator_paths: Vec<String>,
    pub layout_paths: Vec<String>,
    pub panel_paths: Vec<String>,
    pub seed_paths: Vec<String>,
    pub has_addons: bool,
    pub has_visualizers: bool,
    pub requirejs_paths: Vec<NamedPath>,
    pub routers: Vec<NamedPath>,
}

impl FrameworkConfigContext {
    /// Collect the paths of every registered component
    pub fn from_registry(registry: &SetupRegistry, app_name: &str) -> Self {
        let parents = |kind| unique(component_paths(registry, kind).iter().map(|p| parent(p)));

        let seed_paths = unique(
            component_paths(registry, ComponentKind::Seed)
                .iter()
                .map(|p| slashed(p)),
        );

        let has_addons = !component_paths(registry, ComponentKind::AddOn).is_empty();
        let has_local_visualizers = registry
            .components_of(ComponentKind::Visualizer)
            .is_some_and(|group| !group.is_empty());
        let has_visualizers =
            !component_paths(registry, ComponentKind::Visualizer).is_empty();

        let mut requirejs_paths = Vec::new();
        if has_local_visualizers {
            requirejs_paths.push(NamedPath {
                name: "panels".to_string(),
                path: "./src/visualizers/panels".to_string(),
            });
            requirejs_paths.push(NamedPath {
                name: "widgets".to_string(),
                path: "./src/visualizers/widgets".to_string(),
            });
        }
        if let Some(deps) = registry.dependencies_of(ComponentKind::Visualizer) {
            for (name, dep) in deps {
                requirejs_paths.push(NamedPath {
                    name: format!("panels/{}", name),
                    path: format!("./{}", slashed(&dep.path)),
                });
            }
        }

        let mut routers = Vec::new();
        if let Some(local) = registry.components_of(ComponentKind::Router) {
            for (name, entry) in local {
                if let Some(src) = entry.src() {
                    routers.push(router_mount(name, src));
                }
            }
        }
        if let Some(deps) = registry.dependencies_of(ComponentKind::Router) {
            for (name, dep) in deps {
                routers.push(router_mount(name, &dep.path));
            }
        }

        Self {
            app_name: app_name.to_string(),
            plugin_paths: parents(ComponentKind::Plugin),
            addon_paths: parents(ComponentKind::AddOn),
            decorator_paths: parents(ComponentKind::Decorator),
            layout_paths: parents(ComponentKind::Layout),
            panel_paths: parents(ComponentKind::Visualizer),
            seed_paths,
            has_addons,
            has_visualizers,
            requirejs_paths,
            routers,
        }
    }
}

/// Source paths of local components followed by dependency paths
fn component_paths(registry: &SetupRegistry, kind: ComponentKind) -> Vec<&Utf8Path> {
    let local = registry
        .components_of(kind)
        .into_iter()
        .flat_map(|group| group.values())
        .filter_map(|entry| entry.src());
    let deps = registry
        .dependencies_of(kind)
        .into_iter()
        .flat_map(|group| group.values())
        .map(|dep| dep.path.as_path());
    local.chain(deps).collect()
}

fn router_mount(name: &str, path: &Utf8Path) -> NamedPath {
    NamedPath {
        name: format!("routers/{}", name),
        path: format!("{}/{}.js", slashed(path), name),
    }
}

fn parent(path: &Utf8Path) -> String {
    path.parent().map(slashed).unwrap_or_default()
}

/// Paths in the generated file always use forward slashes
fn slashed(path: &Utf8Path) -> String {
    path.as_str().replace('\\', "/")
}

fn unique(paths: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for path in paths {
        if !path.is_empty() && !out.contains(&path) {
            out.push(path);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ComponentEntry, DependencyEntry};

    #[test]
    fn test_seed_paths_are_not_trimmed() {
        let mut registry = SetupRegistry::with_all_groups();
        registry.insert_component(
            ComponentKind::Seed,
            "test",
            ComponentEntry::with_src("src/seeds/test"),
        );

        let context = FrameworkConfigContext::from_registry(&registry, "app");
        assert_eq!(context.seed_paths, vec!["src/seeds/test".to_string()]);
    }

    #[test]
    fn test_dependency_visualizer_requirejs_mapping() {
        let mut registry = SetupRegistry::with_all_groups();
        registry.insert_dependency(
            ComponentKind::Visualizer,
            "Chart",
            DependencyEntry {
                project: "webgme-chart".to_string(),
                path: "node_modules/webgme-chart/src/visualizers/panels/Chart".into(),
            },
        );

        let context = FrameworkConfigContext::from_registry(&registry, "app");
        assert!(context.has_visualizers);
        assert_eq!(
            context.requirejs_paths,
            vec![NamedPath {
                name: "panels/Chart".to_string(),
                path: "./node_modules/webgme-chart/src/visualizers/panels/Chart".to_string(),
            }]
        );
        assert_eq!(
            context.panel_paths,
            vec!["node_modules/webgme-chart/src/visualizers/panels".to_string()]
        );
    }
}

//! Component kinds known to the registry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A plugin-like unit the registry can track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Server/browser side model interpreter
    Plugin,
    /// Long running model listener
    AddOn,
    /// Node decorator for the model editor
    Decorator,
    /// Panel and widget pair
    Visualizer,
    /// UI layout
    Layout,
    /// REST router mounted on the server
    Router,
    /// Seed project export
    Seed,
}

impl ComponentKind {
    /// Get all component kinds
    pub fn all() -> Vec<Self> {
        vec![
            Self::Plugin,
            Self::AddOn,
            Self::Decorator,
            Self::Visualizer,
            Self::Layout,
            Self::Router,
            Self::Seed,
        ]
    }

    /// Name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plugin => "plugin",
            Self::AddOn => "addon",
            Self::Decorator => "decorator",
            Self::Visualizer => "visualizer",
            Self::Layout => "layout",
            Self::Router => "router",
            Self::Seed => "seed",
        }
    }

    /// Pluralized key used for the kind's group in the registry
    pub fn group(&self) -> &'static str {
        match self {
            Self::Plugin => "plugins",
            Self::AddOn => "addOns",
            Self::Decorator => "decorators",
            Self::Visualizer => "visualizers",
            Self::Layout => "layouts",
            Self::Router => "routers",
            Self::Seed => "seeds",
        }
    }

    /// Name of the kind's section in the framework config
    pub fn framework_name(&self) -> &'static str {
        match self {
            Self::Plugin => "plugin",
            Self::AddOn => "addOn",
            Self::Decorator => "decorator",
            Self::Visualizer => "visualizer",
            Self::Layout => "layout",
            Self::Router => "rest",
            Self::Seed => "seedProjects",
        }
    }

    /// Framework config array listing directories that contain components
    /// of this kind. Routers are mounted individually and have none.
    pub fn base_paths_key(&self) -> Option<&'static str> {
        match self {
            Self::Plugin => Some("plugin.basePaths"),
            Self::AddOn => Some("addOn.basePaths"),
            Self::Decorator => Some("visualization.decoratorPaths"),
            Self::Visualizer => Some("visualization.panelPaths"),
            Self::Layout => Some("visualization.layout.basePaths"),
            Self::Router => None,
            Self::Seed => Some("seedProjects.basePaths"),
        }
    }

    /// Whether `new` scaffolds a test directory for this kind
    pub fn has_tests(&self) -> bool {
        matches!(self, Self::Plugin | Self::Router)
    }

    /// Get description for the kind
    pub fn description(&self) -> &'static str {
        match self {
            Self::Plugin => "Model interpreter run on demand",
            Self::AddOn => "Server side listener attached to a project branch",
            Self::Decorator => "Custom node rendering in the model editor",
            Self::Visualizer => "Panel and widget shown in the visualizer selector",
            Self::Layout => "Arrangement of panels in the UI",
            Self::Router => "REST endpoint mounted by the server",
            Self::Seed => "Project export used to create new projects",
        }
    }

    /// Parse from string, accepting plural and dashed spellings
    pub fn from_str_with_aliases(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let normalized = lower.replace(['-', '_'], "");

        Self::all().into_iter().find(|kind| {
            kind.as_str() == normalized
                || kind.group().to_lowercase() == normalized
                || (*kind == Self::Seed && normalized == "seedproject")
        })
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with_aliases(s).ok_or_else(|| {
            let available = Self::all()
                .iter()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Error::unknown_component_kind(s, available)
        })
    }
}

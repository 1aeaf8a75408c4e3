//! Visualizer descriptors (`src/visualizers/Visualizers.json`).
//!
//! The framework reads this list to populate the visualizer selector. It is
//! kept in sync with the visualizers in the registry.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;

use crate::error::Result;

/// Descriptor file, relative to the project root
pub const DESCRIPTORS_FILE: &str = "src/visualizers/Visualizers.json";

/// One entry of the descriptor list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizerDescriptor {
    pub id: String,
    pub title: String,
    pub panel: String,
    #[serde(rename = "DEBUG_ONLY", default)]
    pub debug_only: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VisualizerDescriptor {
    /// Descriptor for a panel named after the visualizer
    pub fn for_panel(name: &str, panel: impl Into<String>) -> Self {
        Self {
            id: name.to_string(),
            title: name.to_string(),
            panel: panel.into(),
            debug_only: false,
            extra: Map::new(),
        }
    }
}

/// The descriptor list of a project
#[derive(Debug)]
pub struct VisualizerDescriptors {
    path: Utf8PathBuf,
    entries: Vec<VisualizerDescriptor>,
}

impl VisualizerDescriptors {
    /// Load the project's descriptors; a missing file is an empty list
    pub fn load(project_root: &Utf8Path) -> Result<Self> {
        let path = project_root.join(DESCRIPTORS_FILE);
        let entries = if path.is_file() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            Vec::new()
        };
        Ok(Self { path, entries })
    }

    pub fn entries(&self) -> &[VisualizerDescriptor] {
        &self.entries
    }

    /// Add a descriptor, replacing one with the same id
    pub fn upsert(&mut self, descriptor: VisualizerDescriptor) {
        match self.entries.iter_mut().find(|d| d.id == descriptor.id) {
            Some(existing) => *existing = descriptor,
            None => self.entries.push(descriptor),
        }
    }

    /// Remove the descriptor with `id`; true if one was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|d| d.id != id);
        self.entries.len() != before
    }

    /// Write the list back
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut content = serde_json::to_string_pretty(&self.entries)?;
        content.push('\n');
        fs::write(&self.path, content)?;
        Ok(())
    }
}

//! Boilerplate for newly created components.
//!
//! Each kind maps to a set of embedded Tera templates, written below the
//! kind's `src/<group>` (and `test/<group>`) directories.

use camino::Utf8PathBuf;
use chrono::Local;
use rust_embed::RustEmbed;
use serde::Serialize;
use tera::{Context, Tera};

use webgme_setup_core::{ComponentEntry, ComponentKind};

use crate::error::{Error, Result};
use crate::manager::SaveLocation;

#[derive(RustEmbed)]
#[folder = "templates/"]
struct ComponentTemplates;

/// A file to generate for a new component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoilerplateFile {
    /// Embedded template name
    pub template: &'static str,
    /// Which tree the file goes into
    pub location: SaveLocation,
    /// Path relative to `<location>/<group>`
    pub path: Utf8PathBuf,
}

impl BoilerplateFile {
    fn new(template: &'static str, location: SaveLocation, path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            template,
            location,
            path: path.into(),
        }
    }
}

/// Template variables for component boilerplate
#[derive(Debug, Clone, Serialize)]
pub struct ComponentVars {
    pub name: String,
    pub kind: String,
    pub group: String,
    pub css_class: String,
    pub date: String,
    pub year: String,
}

impl ComponentVars {
    pub fn new(kind: ComponentKind, name: &str) -> Self {
        let now = Local::now();
        Self {
            name: name.to_string(),
            kind: kind.as_str().to_string(),
            group: kind.group().to_string(),
            css_class: css_class(name),
            date: now.format("%Y-%m-%d").to_string(),
            year: now.format("%Y").to_string(),
        }
    }
}

/// Files generated by `new` for a kind. Seeds are copied, not generated.
pub fn files_for(kind: ComponentKind, name: &str) -> Vec<BoilerplateFile> {
    let dir = Utf8PathBuf::from(name);
    match kind {
        ComponentKind::Plugin => vec![
            BoilerplateFile::new(
                "plugin/plugin.js.tera",
                SaveLocation::Src,
                dir.join(format!("{}.js", name)),
            ),
            BoilerplateFile::new(
                "plugin/metadata.json.tera",
                SaveLocation::Src,
                dir.join("metadata.json"),
            ),
            BoilerplateFile::new(
                "plugin/plugin.spec.js.tera",
                SaveLocation::Test,
                dir.join(format!("{}.spec.js", name)),
            ),
        ],
        ComponentKind::AddOn => vec![BoilerplateFile::new(
            "addon/addon.js.tera",
            SaveLocation::Src,
            dir.join(format!("{}.js", name)),
        )],
        ComponentKind::Decorator => vec![BoilerplateFile::new(
            "decorator/decorator.js.tera",
            SaveLocation::Src,
            dir.join(format!("{}.js", name)),
        )],
        ComponentKind::Visualizer => vec![
            BoilerplateFile::new(
                "visualizer/panel.js.tera",
                SaveLocation::Src,
                Utf8PathBuf::from("panels")
                    .join(name)
                    .join(format!("{}Panel.js", name)),
            ),
            BoilerplateFile::new(
                "visualizer/widget.js.tera",
                SaveLocation::Src,
                Utf8PathBuf::from("widgets")
                    .join(name)
                    .join(format!("{}Widget.js", name)),
            ),
        ],
        ComponentKind::Layout => vec![BoilerplateFile::new(
            "layout/layout.js.tera",
            SaveLocation::Src,
            dir.join(format!("{}.js", name)),
        )],
        ComponentKind::Router => vec![
            BoilerplateFile::new(
                "router/router.js.tera",
                SaveLocation::Src,
                dir.join(format!("{}.js", name)),
            ),
            BoilerplateFile::new(
                "router/router.spec.js.tera",
                SaveLocation::Test,
                dir.join(format!("{}.spec.js", name)),
            ),
        ],
        ComponentKind::Seed => Vec::new(),
    }
}

/// Registry entry for a new component, paths relative to the project root
pub fn entry_for(kind: ComponentKind, name: &str) -> ComponentEntry {
    let src = Utf8PathBuf::from("src").join(kind.group());

    match kind {
        ComponentKind::Visualizer => ComponentEntry::with_src(src.join("panels").join(name))
            .with_path("widget", src.join("widgets").join(name)),
        _ => {
            let entry = ComponentEntry::with_src(src.join(name));
            if kind.has_tests() {
                entry.with_path("test", Utf8PathBuf::from("test").join(kind.group()).join(name))
            } else {
                entry
            }
        }
    }
}

/// Registry of the embedded component templates
#[derive(Debug)]
pub struct BoilerplateRenderer {
    tera: Tera,
}

impl BoilerplateRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        for file in ComponentTemplates::iter() {
            if let Some(content) = ComponentTemplates::get(&file) {
                let content_str = std::str::from_utf8(content.data.as_ref()).map_err(|_| {
                    Error::template_render_error(format!("Invalid UTF-8 in template: {}", file))
                })?;
                tera.add_raw_template(&file, content_str)?;
            }
        }

        Ok(Self { tera })
    }

    pub fn render(&self, file: &BoilerplateFile, vars: &ComponentVars) -> Result<String> {
        let context = Context::from_serialize(vars)?;
        self.tera
            .render(file.template, &context)
            .map_err(|e| Error::template_render_error(format!("{}: {}", file.template, e)))
    }
}

/// `MyViz` -> `my-viz`
fn css_class(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

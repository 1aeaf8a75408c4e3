//! Rendering of the generated framework config (`config/config.webgme.js`)
//!
//! The file is regenerated from the registry after every change and must
//! never be edited by hand.

mod context;

pub use context::{FrameworkConfigContext, NamedPath};

use rust_embed::RustEmbed;
use tera::Tera;
use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::SetupRegistry;

/// Embedded framework config templates
#[derive(RustEmbed)]
#[folder = "templates/"]
struct FrameworkTemplates;

const CONFIG_TEMPLATE: &str = "config.webgme.js.tera";

/// Template registry for the generated framework config
pub struct FrameworkConfigRenderer {
    tera: Tera,
}

impl FrameworkConfigRenderer {
    /// Create a renderer with the embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        for file in FrameworkTemplates::iter() {
            if let Some(content) = FrameworkTemplates::get(&file) {
                let content_str = std::str::from_utf8(content.data.as_ref())
                    .map_err(|_| Error::template_not_found(file.to_string()))?;
                tera.add_raw_template(&file, content_str)?;
            }
        }

        if !tera.get_template_names().any(|name| name == CONFIG_TEMPLATE) {
            return Err(Error::template_not_found(CONFIG_TEMPLATE));
        }

        Ok(Self { tera })
    }

    /// Render the framework config for a registry
    pub fn render(&self, registry: &SetupRegistry, app_name: &str) -> Result<String> {
        let context = FrameworkConfigContext::from_registry(registry, app_name);
        self.render_context(&context)
    }

    /// Render the framework config from a prepared context
    pub fn render_context(&self, context: &FrameworkConfigContext) -> Result<String> {
        debug!("Rendering framework config for app: {}", context.app_name);
        let tera_context = tera::Context::from_serialize(context)?;
        Ok(self.tera.render(CONFIG_TEMPLATE, &tera_context)?)
    }
}

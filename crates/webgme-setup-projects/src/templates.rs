//! Embedded project boilerplate rendered with Tera.
//!
//! Every file under `templates/` is written into a new project at the same
//! relative path, except `gitignore` which becomes `.gitignore`.

use rust_embed::RustEmbed;
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "templates/"]
struct ProjectFiles;

/// Variables available to every project template
#[derive(Debug, Clone, Serialize)]
pub struct ProjectVars {
    /// Directory name as given by the user
    pub project_name: String,
    /// Database-safe name (see `Project::app_name`)
    pub app_name: String,
    pub webgme_version: String,
    pub node_version: String,
}

impl ProjectVars {
    /// Variables for a project named `project_name`
    pub fn new(project_name: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            app_name: app_name.into(),
            webgme_version: webgme_setup_core::WEBGME_VERSION.to_string(),
            node_version: "18".to_string(),
        }
    }
}

/// Registry of the embedded project boilerplate
#[derive(Debug)]
pub struct ProjectTemplates {
    tera: Tera,
}

impl ProjectTemplates {
    /// Load the embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        for file in ProjectFiles::iter() {
            if let Some(content) = ProjectFiles::get(&file) {
                let content_str = std::str::from_utf8(content.data.as_ref()).map_err(|_| {
                    Error::template_render_error(format!("Invalid UTF-8 in template: {}", file))
                })?;
                tera.add_raw_template(&file, content_str)?;
            }
        }

        Ok(Self { tera })
    }

    /// Template names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tera.get_template_names().map(String::from).collect();
        names.sort();
        names
    }

    /// Path a template is written to inside the project
    pub fn output_path(name: &str) -> String {
        match name {
            "gitignore" => ".gitignore".to_string(),
            other => other.to_string(),
        }
    }

    /// Render one template
    pub fn render(&self, name: &str, vars: &ProjectVars) -> Result<String> {
        let context = Context::from_serialize(vars)?;
        self.tera
            .render(name, &context)
            .map_err(|e| Error::template_render_error(format!("{}: {}", name, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_templates_present() {
        let templates = ProjectTemplates::new().unwrap();
        let names = templates.names();

        for expected in [
            "README.md",
            "app.js",
            "config/config.default.js",
            "config/index.js",
            "gitignore",
            "test/globals.js",
        ] {
            assert!(names.contains(&expected.to_string()), "missing {}", expected);
        }
    }

    #[test]
    fn test_output_path_renames_gitignore() {
        assert_eq!(ProjectTemplates::output_path("gitignore"), ".gitignore");
        assert_eq!(ProjectTemplates::output_path("app.js"), "app.js");
    }

    #[test]
    fn test_render_substitutes_names() {
        let templates = ProjectTemplates::new().unwrap();
        let vars = ProjectVars::new("My.Domain", "my_domain");

        let readme = templates.render("README.md", &vars).unwrap();
        assert!(readme.starts_with("# My.Domain"));

        let config = templates.render("config/config.test.js", &vars).unwrap();
        assert!(config.contains("mongodb://127.0.0.1:27017/my_domain_tests"));
    }
}

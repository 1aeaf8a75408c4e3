//! Project initialization

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tracing::{debug, info};

use webgme_setup_core::project::app_name_for;
use webgme_setup_core::{Project, SetupRegistry, REGISTRY_FILE};

use crate::error::{Error, Result};
use crate::package_json::write_package_json;
use crate::templates::{ProjectTemplates, ProjectVars};

/// Directories every project starts with
const PROJECT_DIRS: &[&str] = &["src", "test", "config"];

/// Options for initializing a project
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Directory `name` is resolved against (usually the cwd)
    pub base_dir: Utf8PathBuf,
    /// New directory to create; `None` initializes `base_dir` itself
    pub name: Option<String>,
}

impl InitOptions {
    /// Initialize `base_dir` itself
    pub fn new(base_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            name: None,
        }
    }

    /// Create a new directory `name` inside `base_dir`
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Directory the project is created in
    pub fn target_dir(&self) -> Utf8PathBuf {
        match &self.name {
            Some(name) => self.base_dir.join(name),
            None => self.base_dir.clone(),
        }
    }
}

/// Outcome of a successful init
#[derive(Debug, Clone)]
pub struct InitReport {
    pub project_dir: Utf8PathBuf,
    /// Files written, relative to the project directory
    pub created: Vec<Utf8PathBuf>,
    /// Boilerplate left alone because it already existed
    pub skipped: Vec<Utf8PathBuf>,
}

/// Initialize a new project.
///
/// Fails without writing anything if the named directory exists, or, when
/// initializing in place, if the directory already holds a registry.
pub fn init_project(options: &InitOptions) -> Result<InitReport> {
    let project_dir = options.target_dir();

    if options.name.is_some() {
        if project_dir.exists() {
            return Err(Error::project_exists(project_dir.as_str()));
        }
    } else if project_dir.join(REGISTRY_FILE).exists() {
        return Err(Error::registry_exists(project_dir.as_str()));
    }

    info!("Creating new project in {}", project_dir);
    fs::create_dir_all(&project_dir)?;

    let mut report = InitReport {
        project_dir: project_dir.clone(),
        created: Vec::new(),
        skipped: Vec::new(),
    };

    for dir in PROJECT_DIRS {
        fs::create_dir_all(project_dir.join(dir))?;
    }

    let project_name = project_dir
        .file_name()
        .map(str::to_string)
        .unwrap_or_else(|| "webgme-project".to_string());
    let vars = ProjectVars::new(project_name.clone(), app_name_for(&project_dir));

    write_boilerplate(&project_dir, &vars, &mut report)?;

    write_package_json(&project_dir, &project_name)?;
    report.created.push(Utf8PathBuf::from("package.json"));

    let project = Project::at(&project_dir);
    let registry = SetupRegistry::with_all_groups();
    project.save_registry(&registry)?;
    report.created.push(Utf8PathBuf::from(REGISTRY_FILE));

    let config_path = project.write_framework_config(&registry)?;
    report.created.push(relative_to(&config_path, &project_dir));

    Ok(report)
}

fn write_boilerplate(
    project_dir: &Utf8Path,
    vars: &ProjectVars,
    report: &mut InitReport,
) -> Result<()> {
    let templates = ProjectTemplates::new()?;

    for name in templates.names() {
        let relative = Utf8PathBuf::from(ProjectTemplates::output_path(&name));
        let path = project_dir.join(&relative);

        if path.exists() {
            debug!("Keeping existing {}", relative);
            report.skipped.push(relative);
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, templates.render(&name, vars)?)?;
        report.created.push(relative);
    }

    Ok(())
}

fn relative_to(path: &Utf8Path, base: &Utf8Path) -> Utf8PathBuf {
    path.strip_prefix(base)
        .map(Utf8Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

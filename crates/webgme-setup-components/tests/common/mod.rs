//! Shared helpers for component manager tests
//!
//! `MockInstaller` stands in for npm: it records every install and lays out
//! a package under `node_modules` the way a real install would.

#![allow(dead_code)]

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use webgme_setup_components::{InstallStatus, PackageInstaller, Result};
use webgme_setup_core::Project;
use webgme_setup_projects::{init_project, InitOptions};

/// What the mock leaves in `node_modules/<package>` after installing
#[derive(Clone, Debug)]
pub enum MockPackage {
    /// Package with its own `webgme-setup.json`
    WithRegistry {
        package: String,
        group: String,
        name: String,
        src: String,
    },
    /// Package with only a `config/config.webgme.js`
    WithFrameworkConfig {
        package: String,
        config: String,
        dirs: Vec<String>,
    },
    /// Package that is not a webgme project
    Plain { package: String },
    /// Install fails with an exit code and writes nothing
    Failure { code: i32 },
}

/// Recorded install call
#[derive(Clone, Debug)]
pub struct MockInstall {
    pub project_root: Utf8PathBuf,
    pub spec: String,
}

/// Package installer for tests
#[derive(Clone)]
pub struct MockInstaller {
    package: MockPackage,
    installs: Arc<Mutex<Vec<MockInstall>>>,
}

impl MockInstaller {
    pub fn new(package: MockPackage) -> Self {
        Self {
            package,
            installs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn installs(&self) -> Vec<MockInstall> {
        self.installs.lock().unwrap().clone()
    }
}

#[async_trait]
impl PackageInstaller for MockInstaller {
    fn program(&self) -> &str {
        "mock-npm"
    }

    async fn install(&self, project_root: &Utf8Path, spec: &str) -> Result<InstallStatus> {
        self.installs.lock().unwrap().push(MockInstall {
            project_root: project_root.to_path_buf(),
            spec: spec.to_string(),
        });

        let node_modules = project_root.join("node_modules");
        match &self.package {
            MockPackage::WithRegistry {
                package,
                group,
                name,
                src,
            } => {
                let root = node_modules.join(package);
                fs::create_dir_all(root.join(src))?;
                let registry = serde_json::json!({
                    "components": { group: { name: { "src": src } } },
                    "dependencies": {}
                });
                fs::write(
                    root.join("webgme-setup.json"),
                    serde_json::to_string_pretty(&registry)?,
                )?;
            }
            MockPackage::WithFrameworkConfig {
                package,
                config,
                dirs,
            } => {
                let root = node_modules.join(package);
                fs::create_dir_all(root.join("config"))?;
                fs::write(root.join("config/config.webgme.js"), config)?;
                for dir in dirs {
                    fs::create_dir_all(root.join(dir))?;
                }
            }
            MockPackage::Plain { package } => {
                let root = node_modules.join(package);
                fs::create_dir_all(&root)?;
                fs::write(root.join("index.js"), "module.exports = {};\n")?;
            }
            MockPackage::Failure { code } => return Ok(InstallStatus::exited(*code)),
        }

        Ok(InstallStatus::exited(0))
    }
}

/// Fresh project in a temporary directory
pub fn temp_project() -> (TempDir, Project) {
    let dir = TempDir::new().unwrap();
    let base = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
    let report = init_project(&InitOptions::new(&base).with_name("TestProject")).unwrap();
    (dir, Project::at(report.project_dir))
}

pub fn read_json(path: &Utf8Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

//! Integration tests for project initialization
//!
//! These tests run `init_project` against temporary directories and check
//! the resulting layout.

use camino::Utf8PathBuf;
use tempfile::TempDir;
use webgme_setup_core::{Project, SetupRegistry, WEBGME_VERSION};
use webgme_setup_projects::{init_project, Error, InitOptions};

fn temp_base() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
    (dir, path)
}

fn read_json(path: &Utf8PathBuf) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_init_creates_named_project() {
    let (_dir, base) = temp_base();
    let report = init_project(&InitOptions::new(&base).with_name("Init.Project")).unwrap();

    let project = base.join("Init.Project");
    assert_eq!(report.project_dir, project);
    assert!(project.is_dir());

    for dir in ["src", "test", "config"] {
        assert!(project.join(dir).is_dir(), "missing {}", dir);
    }
    for file in [
        "webgme-setup.json",
        "package.json",
        "app.js",
        ".gitignore",
        "README.md",
        "test/globals.js",
        "config/config.default.js",
        "config/config.webgme.js",
        "config/index.js",
    ] {
        assert!(project.join(file).is_file(), "missing {}", file);
    }
}

#[test]
fn test_init_uses_app_name_in_mongo_uri() {
    let (_dir, base) = temp_base();
    init_project(&InitOptions::new(&base).with_name("Init.Project")).unwrap();

    let config = std::fs::read_to_string(base.join("Init.Project/config/config.webgme.js")).unwrap();
    assert!(config.contains("config.mongo.uri = 'mongodb://127.0.0.1:27017/init_project';"));
}

#[test]
fn test_init_names_package_and_adds_webgme() {
    let (_dir, base) = temp_base();
    init_project(&InitOptions::new(&base).with_name("Init.Project")).unwrap();

    let pkg = read_json(&base.join("Init.Project/package.json"));
    assert_eq!(pkg["name"], "init.project");
    assert_eq!(pkg["dependencies"]["webgme"], WEBGME_VERSION);
}

#[test]
fn test_init_writes_pretty_registry_with_all_groups() {
    let (_dir, base) = temp_base();
    init_project(&InitOptions::new(&base).with_name("Pretty")).unwrap();

    let path = base.join("Pretty/webgme-setup.json");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.lines().count() > 3);

    let registry = SetupRegistry::load(&path).unwrap();
    assert_eq!(registry, SetupRegistry::with_all_groups());
}

#[test]
fn test_init_fails_if_named_dir_exists() {
    let (_dir, base) = temp_base();
    std::fs::create_dir_all(base.join("Taken")).unwrap();

    let err = init_project(&InitOptions::new(&base).with_name("Taken")).unwrap_err();
    assert!(matches!(err, Error::ProjectExists { .. }));
    assert!(!base.join("Taken/webgme-setup.json").exists());
}

#[test]
fn test_init_in_place() {
    let (_dir, base) = temp_base();
    init_project(&InitOptions::new(&base)).unwrap();

    assert!(base.join("webgme-setup.json").is_file());
    assert!(Project::discover(&base.join("src")).is_ok());
}

#[test]
fn test_init_in_place_fails_if_registry_exists() {
    let (_dir, base) = temp_base();
    std::fs::write(base.join("webgme-setup.json"), "stuff").unwrap();

    let err = init_project(&InitOptions::new(&base)).unwrap_err();
    assert!(matches!(err, Error::RegistryExists { .. }));
    assert!(!base.join("app.js").exists());
}

#[test]
fn test_init_in_non_empty_dir_keeps_existing_files() {
    let (_dir, base) = temp_base();
    std::fs::write(base.join("temp"), "stuff").unwrap();
    std::fs::write(base.join("app.js"), "// mine").unwrap();

    let report = init_project(&InitOptions::new(&base)).unwrap();

    assert!(base.join("webgme-setup.json").is_file());
    assert_eq!(std::fs::read_to_string(base.join("app.js")).unwrap(), "// mine");
    assert!(report.skipped.contains(&Utf8PathBuf::from("app.js")));
}

#[test]
fn test_init_merges_existing_package_json() {
    let (_dir, base) = temp_base();
    let existing = serde_json::json!({
        "merged": true,
        "devDependencies": { "lodash": "1.1.1" },
        "dependencies": { "lodash": "1.1.1" }
    });
    std::fs::write(base.join("package.json"), existing.to_string()).unwrap();

    init_project(&InitOptions::new(&base)).unwrap();

    let pkg = read_json(&base.join("package.json"));
    assert_eq!(pkg["merged"], true);
    assert_eq!(pkg["dependencies"]["lodash"], "1.1.1");
    assert_eq!(pkg["devDependencies"]["lodash"], "1.1.1");
    assert!(pkg["dependencies"]["webgme"].is_string());
}

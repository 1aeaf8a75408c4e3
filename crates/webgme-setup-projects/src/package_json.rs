//! `package.json` creation and merging.
//!
//! An existing file wins: only keys that are missing are filled in.

use camino::Utf8Path;
use serde_json::{Map, Value};
use std::fs;
use tracing::debug;

use crate::error::{Error, Result};

const START_SCRIPT: &str = "node app.js";
const TEST_SCRIPT: &str = "node ./node_modules/mocha/bin/mocha -R dot --timeout 10000 -r test/globals.js --recursive test";

const DEV_DEPENDENCIES: &[(&str, &str)] = &[("chai", "^4.3.10"), ("mocha", "^10.2.0")];

/// Merge the project defaults into an existing `package.json` value
pub fn merge_package_json(existing: Option<Value>, name: &str) -> Result<Value> {
    let mut pkg = match existing {
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(Error::invalid_package_json(
                "package.json",
                format!("expected an object, found {}", type_name(&other)),
            ))
        }
        None => Map::new(),
    };

    insert_missing(&mut pkg, "name", Value::String(name.to_lowercase()));
    insert_missing(&mut pkg, "version", Value::String("1.0.0".to_string()));

    let scripts = object_entry(&mut pkg, "scripts")?;
    insert_missing(scripts, "start", Value::String(START_SCRIPT.to_string()));
    insert_missing(scripts, "test", Value::String(TEST_SCRIPT.to_string()));

    let deps = object_entry(&mut pkg, "dependencies")?;
    insert_missing(
        deps,
        "webgme",
        Value::String(webgme_setup_core::WEBGME_VERSION.to_string()),
    );

    let dev_deps = object_entry(&mut pkg, "devDependencies")?;
    for (dep, version) in DEV_DEPENDENCIES {
        insert_missing(dev_deps, dep, Value::String(version.to_string()));
    }

    Ok(Value::Object(pkg))
}

/// Read, merge and write `package.json` in `dir`
pub fn write_package_json(dir: &Utf8Path, name: &str) -> Result<Value> {
    let path = dir.join("package.json");

    let existing = if path.exists() {
        debug!("Merging existing {}", path);
        let content = fs::read_to_string(&path)?;
        Some(
            serde_json::from_str(&content)
                .map_err(|e| Error::invalid_package_json(path.as_str(), e.to_string()))?,
        )
    } else {
        None
    };

    let merged = merge_package_json(existing, name).map_err(|e| match e {
        Error::InvalidPackageJson { message, .. } => {
            Error::invalid_package_json(path.as_str(), message)
        }
        other => other,
    })?;

    let mut content = serde_json::to_string_pretty(&merged)?;
    content.push('\n');
    fs::write(&path, content)?;

    Ok(merged)
}

fn insert_missing(map: &mut Map<String, Value>, key: &str, value: Value) {
    if !map.contains_key(key) {
        map.insert(key.to_string(), value);
    }
}

fn object_entry<'a>(map: &'a mut Map<String, Value>, key: &str) -> Result<&'a mut Map<String, Value>> {
    let entry = map
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    match entry {
        Value::Object(inner) => Ok(inner),
        other => Err(Error::invalid_package_json(
            "package.json",
            format!("\"{}\" must be an object, found {}", key, type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_package_json() {
        let pkg = merge_package_json(None, "Init.Project").unwrap();

        assert_eq!(pkg["name"], "init.project");
        assert_eq!(pkg["dependencies"]["webgme"], webgme_setup_core::WEBGME_VERSION);
        assert_eq!(pkg["scripts"]["start"], "node app.js");
        assert!(pkg["devDependencies"]["mocha"].is_string());
    }

    #[test]
    fn test_merge_preserves_existing_values() {
        let existing = json!({
            "name": "keep-me",
            "merged": true,
            "dependencies": { "lodash": "1.1.1" },
            "devDependencies": { "lodash": "1.1.1", "mocha": "^5.0.0" },
            "scripts": { "start": "node server.js" }
        });

        let pkg = merge_package_json(Some(existing), "ignored").unwrap();

        assert_eq!(pkg["name"], "keep-me");
        assert_eq!(pkg["merged"], true);
        assert_eq!(pkg["dependencies"]["lodash"], "1.1.1");
        assert!(pkg["dependencies"]["webgme"].is_string());
        assert_eq!(pkg["devDependencies"]["lodash"], "1.1.1");
        assert_eq!(pkg["devDependencies"]["mocha"], "^5.0.0");
        assert_eq!(pkg["scripts"]["start"], "node server.js");
        assert!(pkg["scripts"]["test"].is_string());
    }

    #[test]
    fn test_merge_rejects_non_object() {
        let err = merge_package_json(Some(json!([1, 2])), "x").unwrap_err();
        assert!(matches!(err, Error::InvalidPackageJson { .. }));
    }

    #[test]
    fn test_merge_rejects_non_object_dependencies() {
        let err = merge_package_json(Some(json!({ "dependencies": "none" })), "x").unwrap_err();
        assert!(err.to_string().contains("\"dependencies\" must be an object"));
    }
}

//! Parsed `package.json` contents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// A script entry from a package manifest, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestScript {
    /// Script name, e.g. "build".
    pub name: String,

    /// Command the script runs.
    pub command: String,
}

/// The subset of a `package.json` used for analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawManifest")]
pub struct PackageManifest {
    /// Scripts in the order they appear in the manifest.
    pub scripts: Vec<ManifestScript>,

    /// Names of runtime dependencies.
    pub dependencies: BTreeSet<String>,

    /// Names of development dependencies.
    pub dev_dependencies: BTreeSet<String>,

    /// Whether the manifest declares workspaces.
    pub workspaces: bool,
}

impl PackageManifest {
    /// Returns true if a script with the given name exists.
    #[must_use]
    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.iter().any(|script| script.name == name)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawManifest {
    #[serde(default)]
    scripts: Map<String, Value>,
    #[serde(default)]
    dependencies: Map<String, Value>,
    #[serde(default)]
    dev_dependencies: Map<String, Value>,
    #[serde(default)]
    workspaces: Value,
}

impl From<RawManifest> for PackageManifest {
    fn from(raw: RawManifest) -> Self {
        let scripts = raw
            .scripts
            .into_iter()
            .map(|(name, command)| ManifestScript {
                command: match command {
                    Value::String(command) => command,
                    other => other.to_string(),
                },
                name,
            })
            .collect();

        Self {
            scripts,
            dependencies: raw.dependencies.into_iter().map(|(name, _)| name).collect(),
            dev_dependencies: raw
                .dev_dependencies
                .into_iter()
                .map(|(name, _)| name)
                .collect(),
            workspaces: is_truthy(&raw.workspaces),
        }
    }
}

/// `workspaces` may be an array, an object or a glob string.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

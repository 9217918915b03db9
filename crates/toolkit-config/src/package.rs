//! Package build metadata read from `package.json`.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Library output format requested for package builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    /// CommonJS output that also works as the default export target
    #[default]
    All,
    Commonjs2,
    Module,
}

/// Metadata describing the package being built
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Source entry of the package
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Main output file of the package
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<PathBuf>,

    #[serde(default)]
    pub package_type: PackageType,

    /// Explicit bundler target for the package build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_name: Option<String>,

    /// Dependency names left out of package bundles
    #[serde(default)]
    pub externals: Vec<String>,
}

impl PackageConfig {
    /// A build is a package build when both `source` and `main` are declared.
    pub fn is_package(&self) -> bool {
        self.source.is_some() && self.main.is_some()
    }

    /// Build from a parsed `package.json` document.
    ///
    /// `dependencies` are listed before `peerDependencies`; names are not
    /// deduplicated.
    pub fn from_package_json(value: &Value) -> Result<Self, serde_json::Error> {
        let raw = RawPackageJson::deserialize(value)?;
        let toolkit = raw.toolkit.unwrap_or_default();

        let externals = raw
            .dependencies
            .into_keys()
            .chain(raw.peer_dependencies.into_keys())
            .collect();

        Ok(Self {
            name: raw.name,
            source: raw.source,
            main: raw.main,
            package_type: toolkit.library_type,
            target: toolkit.target,
            library_name: toolkit.library_name,
            externals,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawPackageJson {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    source: Option<PathBuf>,
    #[serde(default)]
    main: Option<PathBuf>,
    #[serde(default)]
    dependencies: IndexMap<String, Value>,
    #[serde(default, rename = "peerDependencies")]
    peer_dependencies: IndexMap<String, Value>,
    #[serde(default, rename = "10up-toolkit")]
    toolkit: Option<PackageToolkitFields>,
}

/// Package-related keys of the toolkit field
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageToolkitFields {
    #[serde(default)]
    library_type: PackageType,
    #[serde(default)]
    library_name: Option<String>,
    #[serde(default)]
    target: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn package_requires_source_and_main() {
        let mut config = PackageConfig {
            source: Some(PathBuf::from("src/index.js")),
            ..Default::default()
        };
        assert!(!config.is_package());

        config.main = Some(PathBuf::from("dist/index.js"));
        assert!(config.is_package());

        config.source = None;
        assert!(!config.is_package());
    }

    #[test]
    fn reads_package_json_fields() {
        let value = json!({
            "name": "@acme/widgets",
            "source": "src/index.js",
            "main": "dist/index.js",
            "dependencies": { "lodash": "^4.0.0", "classnames": "^2.0.0" },
            "peerDependencies": { "react": "^18.0.0" },
            "10up-toolkit": { "libraryType": "module", "libraryName": "AcmeWidgets" }
        });

        let config = PackageConfig::from_package_json(&value).unwrap();
        assert_eq!(config.name.as_deref(), Some("@acme/widgets"));
        assert_eq!(config.package_type, PackageType::Module);
        assert_eq!(config.library_name.as_deref(), Some("AcmeWidgets"));
        assert_eq!(config.externals, ["lodash", "classnames", "react"]);
        assert!(config.is_package());
    }

    #[test]
    fn missing_toolkit_field_defaults_to_all() {
        let config = PackageConfig::from_package_json(&json!({ "name": "theme" })).unwrap();
        assert_eq!(config.package_type, PackageType::All);
        assert!(config.externals.is_empty());
        assert!(!config.is_package());
    }
}

//! File-based config discovery
//!
//! Finds the project's `package.json` and layers its toolkit settings over
//! the defaults. Priority: environment > `package.json` > defaults.

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::build_files::BuildFiles;
use crate::error::{ConfigError, Result};
use crate::package::PackageConfig;
use crate::project::ProjectConfig;

/// `package.json` field holding project settings
pub const TOOLKIT_FIELD: &str = "10up-toolkit";

/// Prefix of environment variables overriding project settings
/// (`TOOLKIT_USE_SCRIPT_MODULES=true` sets `useScriptModules`).
pub const ENV_PREFIX: &str = "TOOLKIT_";

/// Everything the config assembler needs, loaded from one project root
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub root: PathBuf,
    pub project: ProjectConfig,
    pub package: PackageConfig,
    pub build_files: BuildFiles,
    pub module_build_files: BuildFiles,
}

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use toolkit_config::ConfigDiscovery;
///
/// let loaded = ConfigDiscovery::new(".").load().unwrap();
/// println!("{} script entries", loaded.build_files.len());
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
    use_env: bool,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            use_env: true,
        }
    }

    /// Ignore `TOOLKIT_*` environment overrides
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Locate `package.json` in the root directory
    pub fn find(&self) -> Option<PathBuf> {
        let path = self.root.join("package.json");
        path.is_file().then_some(path)
    }

    /// Load project, package and build-file configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the root has no `package.json`.
    pub fn load(&self) -> Result<LoadedConfig> {
        let path = self.find().ok_or_else(|| ConfigError::NotFound {
            root: self.root.clone(),
        })?;
        debug!(path = %path.display(), "loading package.json");

        let content = fs::read_to_string(&path)?;
        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidPackageJson {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let project = self.project_config(&parsed)?;
        let package = PackageConfig::from_package_json(&parsed).map_err(|e| {
            ConfigError::InvalidPackageJson {
                path: path.clone(),
                message: e.to_string(),
            }
        })?;

        let build_files = BuildFiles::resolve(&self.root, &project.entry);
        let module_build_files = BuildFiles::resolve(&self.root, &project.module_entry);
        debug!(
            scripts = build_files.len(),
            modules = module_build_files.len(),
            is_package = package.is_package(),
            "resolved build files"
        );

        Ok(LoadedConfig {
            root: self.root.clone(),
            project,
            package,
            build_files,
            module_build_files,
        })
    }

    fn project_config(&self, package_json: &Value) -> Result<ProjectConfig> {
        let toolkit = package_json.get(TOOLKIT_FIELD).filter(|v| !v.is_null());

        let mut figment = Figment::from(Serialized::defaults(ProjectConfig::default()));
        if let Some(field) = toolkit {
            figment = figment.merge(Serialized::defaults(field.clone()));
        }
        if self.use_env {
            figment = figment.merge(
                Env::prefixed(ENV_PREFIX)
                    .map(|key| env_key(key.as_str()).into())
                    .lowercase(false),
            );
        }

        let mut project: ProjectConfig = figment.extract().map_err(|e| invalid(e.to_string()))?;

        // figment dictionaries are sorted; entry maps keep declaration order
        if let Some(field) = toolkit {
            for (key, slot) in [
                ("entry", &mut project.entry),
                ("moduleEntry", &mut project.module_entry),
            ] {
                if let Some(map) = field.get(key) {
                    *slot = IndexMap::<String, PathBuf>::deserialize(map)
                        .map_err(|e| invalid(format!("{key}: {e}")))?;
                }
            }
        }

        Ok(project)
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::InvalidValue {
        field: TOOLKIT_FIELD.to_string(),
        message,
    }
}

/// Settings whose names keep an acronym in capitals
const ACRONYM_KEYS: &[(&str, &str)] = &[("blockCss", "blockCSS")];

/// `PATHS__DIST_DIR` to `paths.distDir`, `FILENAMES__BLOCK_CSS` to
/// `filenames.blockCSS`
fn env_key(key: &str) -> String {
    key.split("__")
        .map(|segment| {
            let name = camel_case(segment);
            ACRONYM_KEYS
                .iter()
                .find(|(camel, _)| *camel == name)
                .map_or(name.clone(), |(_, actual)| actual.to_string())
        })
        .collect::<Vec<_>>()
        .join(".")
}

fn camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper = false;
    for c in snake.to_ascii_lowercase().chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Discover and load config from the current directory
pub fn discover() -> Result<LoadedConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

//! User-controlled project settings.
//!
//! These live under the `10up-toolkit` field of the project's `package.json`
//! and are merged over the defaults below.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::helpers::{
    default_block_css_filename, default_block_filename, default_blocks_dir,
    default_copy_assets_dir, default_css_filename, default_dev_server_port, default_dist_dir,
    default_js_chunk_filename, default_js_filename, default_true,
};

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Script entry points, chunk name to project-relative source path
    #[serde(default)]
    pub entry: IndexMap<String, PathBuf>,

    /// Entry points for the script-module build
    #[serde(default)]
    pub module_entry: IndexMap<String, PathBuf>,

    /// Output filename patterns
    #[serde(default)]
    pub filenames: Filenames,

    /// Project directory layout
    #[serde(default)]
    pub paths: Paths,

    /// Emit source maps in production builds too
    #[serde(default)]
    pub sourcemap: bool,

    /// Produce an additional ES module build alongside the script build
    #[serde(default)]
    pub use_script_modules: bool,

    /// Discover block assets from `block.json` files under `paths.blocksDir`
    #[serde(default = "default_true")]
    pub use_block_assets: bool,

    /// Let the dependency-extraction plugin externalize WordPress packages
    #[serde(default = "default_true")]
    pub wp_dependency_externals: bool,

    #[serde(default)]
    pub dev_server: bool,

    #[serde(default = "default_dev_server_port")]
    pub dev_server_port: u16,

    /// Hot module replacement (development only)
    #[serde(default)]
    pub hot: bool,

    /// Attach the bundle analyzer
    #[serde(default)]
    pub analyze: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            entry: IndexMap::new(),
            module_entry: IndexMap::new(),
            filenames: Filenames::default(),
            paths: Paths::default(),
            sourcemap: false,
            use_script_modules: false,
            use_block_assets: true,
            wp_dependency_externals: true,
            dev_server: false,
            dev_server_port: default_dev_server_port(),
            hot: false,
            analyze: false,
            public_path: None,
        }
    }
}

/// Output filename patterns, in bundler template syntax
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filenames {
    #[serde(default = "default_js_filename")]
    pub js: String,

    #[serde(default = "default_js_chunk_filename")]
    pub js_chunk: String,

    #[serde(default = "default_css_filename")]
    pub css: String,

    /// Pattern for chunks whose source lives in a block directory
    #[serde(default = "default_block_filename")]
    pub block: String,

    #[serde(default = "default_block_css_filename", rename = "blockCSS")]
    pub block_css: String,
}

impl Default for Filenames {
    fn default() -> Self {
        Self {
            js: default_js_filename(),
            js_chunk: default_js_chunk_filename(),
            css: default_css_filename(),
            block: default_block_filename(),
            block_css: default_block_css_filename(),
        }
    }
}

/// Project-relative directories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paths {
    #[serde(default = "default_blocks_dir")]
    pub blocks_dir: PathBuf,

    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    #[serde(default = "default_copy_assets_dir")]
    pub copy_assets_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            blocks_dir: default_blocks_dir(),
            dist_dir: default_dist_dir(),
            copy_assets_dir: default_copy_assets_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_filenames_keep_other_defaults() {
        let config: ProjectConfig = serde_json::from_value(json!({
            "filenames": { "block": "blocks/[name]/editor.js" }
        }))
        .unwrap();

        assert_eq!(config.filenames.block, "blocks/[name]/editor.js");
        assert_eq!(config.filenames.js, "js/[name].js");
        assert_eq!(config.filenames.block_css, "blocks/[name].css");
    }

    #[test]
    fn camel_case_keys_are_recognized() {
        let config: ProjectConfig = serde_json::from_value(json!({
            "useScriptModules": true,
            "useBlockAssets": false,
            "paths": { "blocksDir": "./src/blocks/" }
        }))
        .unwrap();

        assert!(config.use_script_modules);
        assert!(!config.use_block_assets);
        assert_eq!(config.paths.blocks_dir, PathBuf::from("./src/blocks/"));
    }

    #[test]
    fn entry_order_is_preserved() {
        let config: ProjectConfig = serde_json::from_value(json!({
            "entry": { "zeta": "./z.js", "alpha": "./a.js", "mid": "./m.js" }
        }))
        .unwrap();

        let names: Vec<_> = config.entry.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }
}

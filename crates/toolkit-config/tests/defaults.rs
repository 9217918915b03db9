//! Tests for default values.

use std::path::PathBuf;

use toolkit_config::{BuildFiles, Filenames, Mode, PackageConfig, PackageType, Paths, ProjectConfig};

#[test]
fn project_config_defaults() {
    let config = ProjectConfig::default();
    assert!(config.entry.is_empty());
    assert!(config.module_entry.is_empty());
    assert!(!config.sourcemap);
    assert!(!config.use_script_modules);
    assert!(config.use_block_assets);
    assert!(config.wp_dependency_externals);
    assert!(!config.dev_server);
    assert_eq!(config.dev_server_port, 8000);
    assert!(!config.hot);
    assert!(!config.analyze);
    assert!(config.public_path.is_none());
}

#[test]
fn filenames_defaults() {
    let filenames = Filenames::default();
    assert_eq!(filenames.js, "js/[name].js");
    assert_eq!(filenames.js_chunk, "js/[name].[contenthash].chunk.js");
    assert_eq!(filenames.css, "css/[name].css");
    assert_eq!(filenames.block, "blocks/[name].js");
    assert_eq!(filenames.block_css, "blocks/[name].css");
}

#[test]
fn paths_defaults() {
    let paths = Paths::default();
    assert_eq!(paths.blocks_dir, PathBuf::from("./includes/blocks/"));
    assert_eq!(paths.dist_dir, PathBuf::from("./dist/"));
    assert_eq!(paths.copy_assets_dir, PathBuf::from("./assets/"));
}

#[test]
fn empty_object_deserializes_to_defaults() {
    let config: ProjectConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.filenames, Filenames::default());
    assert_eq!(config.paths, Paths::default());
    assert!(config.use_block_assets);
}

#[test]
fn package_config_defaults() {
    let package = PackageConfig::default();
    assert!(!package.is_package());
    assert_eq!(package.package_type, PackageType::All);
    assert!(package.externals.is_empty());
}

#[test]
fn mode_defaults_to_development() {
    assert_eq!(Mode::default(), Mode::Development);
    assert!(!Mode::default().is_production());
}

#[test]
fn build_files_default_is_empty() {
    assert!(BuildFiles::default().is_empty());
}

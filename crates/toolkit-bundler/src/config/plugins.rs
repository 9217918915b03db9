//! Plugin descriptors.
//!
//! Each descriptor names a bundler plugin and carries the options it is
//! constructed with. `CopyBlockManifests` is the one plugin this crate can
//! run itself (see [`PluginDescriptor::copy_block_manifests`]).

use std::path::PathBuf;

use serde::Serialize;

use super::context::{BuildContext, BuildType};
use super::entry::chunk_sources;
use super::output::{ChunkFilenameSelector, OutputFilename};
use crate::manifest::{self, ManifestError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "plugin", rename_all_fields = "camelCase")]
pub enum PluginDescriptor {
    /// Extracts imported stylesheets into standalone files. Block styles
    /// land next to their block's compiled scripts.
    MiniCssExtract { filename: OutputFilename },

    /// Externalizes WordPress packages and writes `*.asset.php` files
    DependencyExtraction {
        output_format: String,
        output_module: bool,
        inject_polyfill: bool,
    },

    /// Copies `block.json` files, transformed for compiled assets
    CopyBlockManifests { from: PathBuf, to: PathBuf },

    /// Copies static assets matching `patterns` relative to `context`
    CopyAssets {
        context: PathBuf,
        patterns: Vec<String>,
        to: String,
    },

    /// Removes the empty scripts emitted for style-only entries
    CleanExtractedDeps,

    ReactRefresh,

    BundleAnalyzer,

    Eslint { extensions: Vec<String> },

    Stylelint { files: String },
}

impl PluginDescriptor {
    pub fn name(&self) -> &'static str {
        match self {
            PluginDescriptor::MiniCssExtract { .. } => "MiniCssExtract",
            PluginDescriptor::DependencyExtraction { .. } => "DependencyExtraction",
            PluginDescriptor::CopyBlockManifests { .. } => "CopyBlockManifests",
            PluginDescriptor::CopyAssets { .. } => "CopyAssets",
            PluginDescriptor::CleanExtractedDeps => "CleanExtractedDeps",
            PluginDescriptor::ReactRefresh => "ReactRefresh",
            PluginDescriptor::BundleAnalyzer => "BundleAnalyzer",
            PluginDescriptor::Eslint { .. } => "Eslint",
            PluginDescriptor::Stylelint { .. } => "Stylelint",
        }
    }

    /// Run a `CopyBlockManifests` descriptor. Other plugins are left to the
    /// bundler and return `None`.
    pub fn copy_block_manifests(&self) -> Option<Result<Vec<PathBuf>, ManifestError>> {
        match self {
            PluginDescriptor::CopyBlockManifests { from, to } => {
                Some(manifest::copy_block_manifests(from, to))
            }
            _ => None,
        }
    }
}

pub fn plugins(ctx: &BuildContext) -> Vec<PluginDescriptor> {
    let project = &ctx.project;
    let mut plugins = Vec::new();

    if !ctx.is_module {
        plugins.push(PluginDescriptor::MiniCssExtract {
            filename: OutputFilename::PerChunk(ChunkFilenameSelector::new(
                chunk_sources(ctx, BuildType::Script),
                &project.filenames.block_css,
                &project.filenames.css,
            )),
        });
    }

    if project.wp_dependency_externals && !ctx.is_package {
        plugins.push(PluginDescriptor::DependencyExtraction {
            output_format: "php".to_string(),
            output_module: ctx.is_module,
            inject_polyfill: false,
        });
    }

    if project.use_block_assets && !ctx.is_package && !ctx.is_module {
        plugins.push(PluginDescriptor::CopyBlockManifests {
            from: ctx.blocks_dir(),
            to: ctx.dist_dir().join("blocks"),
        });
    }

    if !ctx.is_package && !ctx.is_module {
        plugins.push(PluginDescriptor::CopyAssets {
            context: ctx.project_path(&project.paths.copy_assets_dir),
            patterns: vec!["fonts/**/*".to_string(), "images/**/*".to_string()],
            to: "[path][name][ext]".to_string(),
        });
    }

    if !ctx.is_module {
        plugins.push(PluginDescriptor::CleanExtractedDeps);
    }

    if project.hot && !ctx.is_production() && !ctx.is_module {
        plugins.push(PluginDescriptor::ReactRefresh);
    }

    if project.analyze {
        plugins.push(PluginDescriptor::BundleAnalyzer);
    }

    if !ctx.is_production() {
        plugins.push(PluginDescriptor::Eslint {
            extensions: ["js", "jsx", "ts", "tsx"].map(String::from).to_vec(),
        });
        if !ctx.is_module {
            plugins.push(PluginDescriptor::Stylelint {
                files: "**/*.(s(c|a)ss|css)".to_string(),
            });
        }
    }

    plugins
}

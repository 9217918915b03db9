use std::path::PathBuf;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use toolkit_config::BuildFiles;
use tracing::debug;

use super::context::{BuildContext, BuildType};
use crate::blocks::block_build_files;

/// Entry map handed to the bundler
pub type EntryPoints = IndexMap<String, PathBuf>;

/// Entry points bound to one build type, produced on demand.
///
/// Entries are recomputed on every call so block assets added during a
/// watch session are picked up. Serializing resolves them.
#[derive(Debug, Clone)]
pub struct EntryBinding {
    build_type: BuildType,
    context: Arc<BuildContext>,
}

impl EntryBinding {
    pub fn new(build_type: BuildType, context: Arc<BuildContext>) -> Self {
        Self {
            build_type,
            context,
        }
    }

    pub fn build_type(&self) -> BuildType {
        self.build_type
    }

    pub fn resolve(&self) -> EntryPoints {
        entry_points(&self.context, self.build_type)
    }
}

impl Serialize for EntryBinding {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.resolve().serialize(serializer)
    }
}

/// Entries for one build type.
///
/// Packages have a single entry (their `source`) in the script build and
/// none in the module build.
pub fn entry_points(ctx: &BuildContext, build_type: BuildType) -> EntryPoints {
    if ctx.is_package {
        let mut entries = EntryPoints::new();
        if let (BuildType::Script, Some(source)) = (build_type, &ctx.package.source) {
            let name = ctx.package.name.clone().unwrap_or_else(|| "main".to_string());
            entries.insert(name, ctx.project_path(source));
        }
        return entries;
    }

    let entries = chunk_sources(ctx, build_type).into_inner();
    debug!(?build_type, count = entries.len(), "resolved entry points");
    entries
}

/// Source path of every chunk a build type emits: the configured build
/// files followed by discovered block assets.
pub fn chunk_sources(ctx: &BuildContext, build_type: BuildType) -> BuildFiles {
    let mut sources = ctx.build_files(build_type).clone();
    if ctx.project.use_block_assets && !ctx.is_package {
        sources.extend(block_build_files(&ctx.blocks_dir(), build_type));
    }
    sources
}

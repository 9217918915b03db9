use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use toolkit_config::{BuildFiles, PackageType};

use super::context::{BuildContext, BuildType};
use super::entry::chunk_sources;

/// `/block/`, `/blocks/`, `\block\` or `\blocks\` anywhere in a path
static BLOCK_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/blocks?/|\\blocks?\\").expect("block segment pattern"));

/// Whether a chunk source lives in a block directory.
pub fn is_block_source(source: &Path) -> bool {
    BLOCK_SEGMENT.is_match(&source.to_string_lossy())
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub clean: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<OutputFilename>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_filename: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_path: Option<String>,

    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub module: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_format: Option<ChunkFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub library: Option<LibraryConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkFormat {
    Module,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LibraryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type")]
    pub kind: LibraryType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryType {
    #[default]
    Commonjs2,
    Module,
}

impl From<PackageType> for LibraryType {
    fn from(package_type: PackageType) -> Self {
        match package_type {
            PackageType::All | PackageType::Commonjs2 => LibraryType::Commonjs2,
            PackageType::Module => LibraryType::Module,
        }
    }
}

/// Output filename: a fixed pattern, or one chosen per emitted chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OutputFilename {
    Pattern(String),
    PerChunk(ChunkFilenameSelector),
}

impl OutputFilename {
    /// Pattern used for the chunk named `chunk_name`.
    pub fn for_chunk(&self, chunk_name: &str) -> &str {
        match self {
            OutputFilename::Pattern(pattern) => pattern,
            OutputFilename::PerChunk(selector) => selector.select(chunk_name),
        }
    }
}

/// Picks the block pattern for chunks whose source lives in a block
/// directory and the default pattern for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkFilenameSelector {
    chunk_sources: BuildFiles,
    block: String,
    default: String,
}

impl ChunkFilenameSelector {
    pub fn new(
        chunk_sources: BuildFiles,
        block: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            chunk_sources,
            block: block.into(),
            default: default.into(),
        }
    }

    /// Unknown chunks get the default pattern.
    pub fn select(&self, chunk_name: &str) -> &str {
        match self.chunk_sources.get(chunk_name) {
            Some(source) if is_block_source(source) => &self.block,
            _ => &self.default,
        }
    }
}

pub fn output(ctx: &BuildContext) -> OutputConfig {
    if ctx.is_package {
        return package_output(ctx);
    }

    let filenames = &ctx.project.filenames;
    OutputConfig {
        clean: true,
        path: Some(ctx.dist_dir()),
        filename: Some(OutputFilename::PerChunk(ChunkFilenameSelector::new(
            chunk_sources(ctx, BuildType::Script),
            &filenames.block,
            &filenames.js,
        ))),
        chunk_filename: Some(filenames.js_chunk.clone()),
        public_path: ctx.project.public_path.clone(),
        ..OutputConfig::default()
    }
}

fn package_output(ctx: &BuildContext) -> OutputConfig {
    let main = ctx
        .package
        .main
        .as_deref()
        .map(|main| ctx.project_path(main));

    OutputConfig {
        clean: true,
        path: main
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf),
        filename: main
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| OutputFilename::Pattern(name.to_string_lossy().into_owned())),
        library: Some(LibraryConfig {
            name: ctx.package.library_name.clone(),
            kind: ctx.package.package_type.into(),
        }),
        ..OutputConfig::default()
    }
}

/// Output of the module build: ES module chunks, never cleaning the
/// directory the script build writes to.
///
/// `path` and `publicPath` are taken from the script build on purpose, so
/// both builds write into the same directory.
pub fn module_output(ctx: &BuildContext, base: &OutputConfig) -> OutputConfig {
    let filenames = &ctx.project.filenames;
    OutputConfig {
        clean: false,
        path: base.path.clone(),
        filename: Some(OutputFilename::PerChunk(ChunkFilenameSelector::new(
            chunk_sources(ctx, BuildType::Module),
            &filenames.block,
            &filenames.js,
        ))),
        public_path: base.public_path.clone(),
        module: true,
        chunk_format: Some(ChunkFormat::Module),
        library: Some(LibraryConfig {
            kind: LibraryType::Module,
            ..base.library.clone().unwrap_or_default()
        }),
        ..OutputConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> ChunkFilenameSelector {
        let mut files = BuildFiles::new();
        files.insert("card", "/p/includes/blocks/card/view.js");
        files.insert("single", "/p/includes/block/single/view.js");
        files.insert("windows", r"C:\p\includes\blocks\card\view.js");
        files.insert("frontend", "/p/assets/js/frontend.js");
        files.insert("blockish", "/p/assets/js/blocks.js");
        ChunkFilenameSelector::new(files, "blocks/[name].js", "js/[name].js")
    }

    #[test]
    fn block_sources_use_block_pattern() {
        let selector = selector();
        assert_eq!(selector.select("card"), "blocks/[name].js");
        assert_eq!(selector.select("single"), "blocks/[name].js");
        assert_eq!(selector.select("windows"), "blocks/[name].js");
    }

    #[test]
    fn other_sources_use_default_pattern() {
        let selector = selector();
        assert_eq!(selector.select("frontend"), "js/[name].js");
        assert_eq!(selector.select("blockish"), "js/[name].js");
        assert_eq!(selector.select("unknown"), "js/[name].js");
    }

    #[test]
    fn fixed_pattern_ignores_chunk() {
        let filename = OutputFilename::Pattern("index.js".to_string());
        assert_eq!(filename.for_chunk("anything"), "index.js");
    }

    #[test]
    fn package_type_maps_to_library_type() {
        assert_eq!(LibraryType::from(PackageType::All), LibraryType::Commonjs2);
        assert_eq!(LibraryType::from(PackageType::Commonjs2), LibraryType::Commonjs2);
        assert_eq!(LibraryType::from(PackageType::Module), LibraryType::Module);
    }
}

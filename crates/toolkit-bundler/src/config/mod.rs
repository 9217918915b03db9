//! Bundler configuration assembly.
//!
//! One pure sub-builder per concern turns a [`BuildContext`] into a slice of
//! the configuration; [`assemble`] only composes the slices.

mod assemble;
mod context;
mod dev_server;
mod entry;
mod optimization;
mod output;
mod plugins;
mod resolve;
mod rules;
mod target;

use serde::{Serialize, Serializer};
use toolkit_config::Mode;

pub use assemble::{assemble, base_config};
pub use context::{BuildContext, BuildType, DEFAULT_TARGETS};
pub use dev_server::{dev_server, DevMiddleware, DevServerConfig};
pub use entry::{chunk_sources, entry_points, EntryBinding, EntryPoints};
pub use optimization::{
    optimization, performance, stats, OptimizationConfig, PerformanceConfig, PerformanceHint,
    SplitChunks, StatsConfig,
};
pub use output::{
    is_block_source, module_output, output, ChunkFilenameSelector, ChunkFormat, LibraryConfig,
    LibraryType, OutputConfig, OutputFilename,
};
pub use plugins::{plugins, PluginDescriptor};
pub use resolve::{externals, resolve, Externals, ResolveConfig, RESOLVE_EXTENSIONS};
pub use rules::{
    module_rules, Loader, ModuleRules, Rule, CSS_TEST, FONT_TEST, IMAGE_TEST, SASS_TEST,
    SCRIPT_TEST, SVG_TEST,
};
pub use target::{target, Target};

/// One bundler configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    #[serde(serialize_with = "or_false")]
    pub devtool: Option<Devtool>,

    pub mode: Mode,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<EntryBinding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerConfig>,

    pub output: OutputConfig,
    pub target: Target,
    pub resolve: ResolveConfig,
    pub externals: Externals,
    pub performance: PerformanceConfig,
    pub module: ModuleRules,
    pub plugins: Vec<PluginDescriptor>,
    pub stats: StatsConfig,
    pub optimization: OptimizationConfig,
    pub experiments: Experiments,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Devtool {
    #[serde(rename = "source-map")]
    SourceMap,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experiments {
    pub output_module: bool,
}

/// The assembler's result: the script build alone, or the script build
/// followed by the module build.
///
/// Serializes as a single object or as a two-element array.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AssembledConfig {
    Single(Box<BundlerConfig>),
    Pair(Box<[BundlerConfig; 2]>),
}

impl AssembledConfig {
    pub fn configs(&self) -> &[BundlerConfig] {
        match self {
            AssembledConfig::Single(config) => std::slice::from_ref(config.as_ref()),
            AssembledConfig::Pair(configs) => configs.as_slice(),
        }
    }

    pub fn script(&self) -> &BundlerConfig {
        &self.configs()[0]
    }

    pub fn module(&self) -> Option<&BundlerConfig> {
        match self {
            AssembledConfig::Single(_) => None,
            AssembledConfig::Pair(configs) => Some(&configs[1]),
        }
    }

    pub fn is_pair(&self) -> bool {
        matches!(self, AssembledConfig::Pair(_))
    }

    /// Pretty JSON as consumed by the bundler. Entries are resolved here.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Serialize `None` as `false`, the bundler's "disabled" value.
fn or_false<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_bool(false),
    }
}

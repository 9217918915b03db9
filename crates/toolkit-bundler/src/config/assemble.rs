use std::sync::Arc;

use tracing::{debug, info};

use super::context::{BuildContext, BuildType};
use super::dev_server::dev_server;
use super::entry::EntryBinding;
use super::optimization::{optimization, performance, stats};
use super::output::{module_output, output};
use super::plugins::plugins;
use super::resolve::{externals, resolve};
use super::rules::module_rules;
use super::target::target;
use super::{AssembledConfig, BundlerConfig, Devtool, Experiments};
use toolkit_config::PackageType;

/// Configuration shared by both builds, without entries.
pub fn base_config(ctx: &BuildContext) -> BundlerConfig {
    let source_maps = !ctx.is_production() || ctx.project.sourcemap;

    BundlerConfig {
        devtool: source_maps.then_some(Devtool::SourceMap),
        mode: ctx.mode,
        entry: None,
        dev_server: dev_server(ctx),
        output: output(ctx),
        target: target(ctx),
        resolve: resolve(ctx),
        externals: externals(ctx),
        performance: performance(ctx),
        module: module_rules(ctx),
        plugins: plugins(ctx),
        stats: stats(ctx),
        optimization: optimization(ctx),
        experiments: Experiments {
            output_module: ctx.package.package_type == PackageType::Module,
        },
    }
}

/// Assemble the bundler configuration.
///
/// Returns the script build alone, or the script and module builds when
/// `useScriptModules` is enabled. Inputs are not validated; the bundler
/// reports malformed settings.
///
/// # Example
///
/// ```
/// use toolkit_bundler::config::{assemble, BuildContext};
/// use toolkit_config::{BuildFiles, Mode, PackageConfig, ProjectConfig};
///
/// let ctx = BuildContext::new(
///     "/project",
///     ProjectConfig::default(),
///     PackageConfig::default(),
///     BuildFiles::new(),
///     BuildFiles::new(),
///     Mode::Production,
/// );
/// let assembled = assemble(ctx);
/// assert!(!assembled.is_pair());
/// ```
pub fn assemble(ctx: BuildContext) -> AssembledConfig {
    let ctx = Arc::new(ctx);
    info!(
        mode = %ctx.mode,
        is_package = ctx.is_package,
        script_modules = ctx.project.use_script_modules,
        "assembling bundler configuration"
    );

    let base = base_config(&ctx);
    let script = BundlerConfig {
        entry: Some(EntryBinding::new(BuildType::Script, Arc::clone(&ctx))),
        ..base.clone()
    };

    if !ctx.project.use_script_modules {
        return AssembledConfig::Single(Box::new(script));
    }

    let module_ctx = ctx.as_module();
    debug!("assembling module build");
    let module = BundlerConfig {
        entry: Some(EntryBinding::new(BuildType::Module, Arc::clone(&ctx))),
        plugins: plugins(&module_ctx),
        dev_server: dev_server(&module_ctx),
        module: module_rules(&module_ctx),
        target: target(&module_ctx),
        experiments: Experiments {
            output_module: true,
        },
        output: module_output(&ctx, &base.output),
        ..base
    };

    AssembledConfig::Pair(Box::new([script, module]))
}

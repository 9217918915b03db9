use serde::Serialize;

use super::context::BuildContext;
use super::or_false;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceConfig {
    pub max_asset_size: u64,
    pub max_entrypoint_size: u64,
    #[serde(serialize_with = "or_false")]
    pub hints: Option<PerformanceHint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceHint {
    Warning,
}

pub fn performance(ctx: &BuildContext) -> PerformanceConfig {
    PerformanceConfig {
        max_asset_size: 100_000,
        max_entrypoint_size: 400_000,
        hints: ctx.is_production().then_some(PerformanceHint::Warning),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsConfig {
    pub preset: String,
    pub colors: bool,
}

pub fn stats(ctx: &BuildContext) -> StatsConfig {
    let preset = if ctx.is_production() {
        "errors-warnings"
    } else {
        "minimal"
    };
    StatsConfig {
        preset: preset.to_string(),
        colors: true,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationConfig {
    pub minimize: bool,
    pub concatenate_modules: bool,
    #[serde(serialize_with = "or_false")]
    pub split_chunks: Option<SplitChunks>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitChunks {
    pub chunks: String,
}

pub fn optimization(ctx: &BuildContext) -> OptimizationConfig {
    OptimizationConfig {
        minimize: ctx.is_production(),
        concatenate_modules: ctx.is_production(),
        // a package ships exactly the file named by `main`
        split_chunks: (!ctx.is_package).then(|| SplitChunks {
            chunks: "async".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use toolkit_config::{BuildFiles, Mode, PackageConfig, ProjectConfig};

    fn ctx(mode: Mode) -> BuildContext {
        BuildContext::new(
            "/project",
            ProjectConfig::default(),
            PackageConfig::default(),
            BuildFiles::new(),
            BuildFiles::new(),
            mode,
        )
    }

    #[test]
    fn hints_only_in_production() {
        let dev = serde_json::to_value(performance(&ctx(Mode::Development))).unwrap();
        assert_eq!(dev["hints"], false);
        let prod = serde_json::to_value(performance(&ctx(Mode::Production))).unwrap();
        assert_eq!(prod["hints"], "warning");
        assert_eq!(prod["maxEntrypointSize"], 400_000);
    }

    #[test]
    fn stats_preset_follows_mode() {
        assert_eq!(stats(&ctx(Mode::Production)).preset, "errors-warnings");
        assert_eq!(stats(&ctx(Mode::Development)).preset, "minimal");
    }

    #[test]
    fn production_minimizes() {
        let value = serde_json::to_value(optimization(&ctx(Mode::Production))).unwrap();
        assert_eq!(
            value,
            json!({
                "minimize": true,
                "concatenateModules": true,
                "splitChunks": { "chunks": "async" }
            })
        );
    }
}

use serde::Serialize;

use super::context::BuildContext;

/// Bundler `target` setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Target {
    Single(String),
    Multiple(Vec<String>),
}

pub fn target(ctx: &BuildContext) -> Target {
    if ctx.is_module {
        return Target::Multiple(vec!["web".to_string(), "es2020".to_string()]);
    }

    match (&ctx.package.target, ctx.is_package) {
        (Some(target), true) => Target::Single(target.clone()),
        _ => Target::Single(format!("browserslist:{}", ctx.default_targets.join(", "))),
    }
}

use indexmap::IndexMap;
use serde::Serialize;

use super::context::BuildContext;

/// Extensions tried, in order, for extensionless imports
pub const RESOLVE_EXTENSIONS: &[&str] = &[".tsx", ".ts", ".jsx", ".js", ".mjs", ".json"];

#[derive(Debug, Clone, Default, Serialize)]
pub struct ResolveConfig {
    pub extensions: Vec<String>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub alias: IndexMap<String, String>,
}

pub fn resolve(ctx: &BuildContext) -> ResolveConfig {
    let mut alias = IndexMap::new();
    if !ctx.is_package {
        alias.insert("lodash-es".to_string(), "lodash".to_string());
    }

    ResolveConfig {
        extensions: RESOLVE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        alias,
    }
}

/// Modules left out of the bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Externals {
    /// Module request to global variable
    Globals(IndexMap<String, String>),
    /// Request patterns (regular expressions) resolved at runtime
    Patterns(Vec<String>),
}

pub fn externals(ctx: &BuildContext) -> Externals {
    if ctx.is_package {
        return Externals::Patterns(
            ctx.package
                .externals
                .iter()
                .map(|name| format!("^{}(/.*)?$", regex::escape(name)))
                .collect(),
        );
    }

    let mut globals = IndexMap::new();
    // WordPress packages are externalized by the dependency extraction plugin
    if !ctx.project.wp_dependency_externals {
        globals.insert("jquery".to_string(), "jQuery".to_string());
    }
    Externals::Globals(globals)
}

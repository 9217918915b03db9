use serde::Serialize;
use serde_json::{json, Value};

use super::context::BuildContext;

/// Bundler `module` setting
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModuleRules {
    pub rules: Vec<Rule>,
}

impl ModuleRules {
    /// First rule whose test pattern equals `test`.
    pub fn find(&self, test: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.test == test)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Rule {
    /// Regular expression matched against the module path
    pub test: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(rename = "use", skip_serializing_if = "Vec::is_empty")]
    pub loaders: Vec<Loader>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<Value>,
}

impl Rule {
    fn new(test: &str) -> Self {
        Self {
            test: test.to_string(),
            exclude: None,
            kind: None,
            loaders: Vec::new(),
            generator: None,
        }
    }

    fn asset(test: &str, filename: &str) -> Self {
        Self {
            kind: Some("asset/resource".to_string()),
            generator: Some(json!({ "filename": filename })),
            ..Self::new(test)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Loader {
    pub loader: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl Loader {
    fn new(loader: &str, options: Option<Value>) -> Self {
        Self {
            loader: loader.to_string(),
            options,
        }
    }
}

pub const SCRIPT_TEST: &str = r"\.(js|jsx|ts|tsx|mjs)$";
pub const CSS_TEST: &str = r"\.css$";
pub const SASS_TEST: &str = r"\.s[ac]ss$";
pub const SVG_TEST: &str = r"\.svg$";
pub const FONT_TEST: &str = r"\.(woff|woff2|eot|ttf|otf)$";
pub const IMAGE_TEST: &str = r"\.(png|jpe?g|gif|webp|avif)$";

pub fn module_rules(ctx: &BuildContext) -> ModuleRules {
    let mut script_options = json!({ "cacheDirectory": true });
    if ctx.is_module {
        script_options["targets"] = json!({ "esmodules": true });
    }

    let mut rules = vec![Rule {
        exclude: Some("node_modules".to_string()),
        loaders: vec![Loader::new("babel-loader", Some(script_options))],
        ..Rule::new(SCRIPT_TEST)
    }];

    // the module build emits scripts only
    if !ctx.is_module {
        rules.push(Rule {
            loaders: style_loaders(ctx),
            ..Rule::new(CSS_TEST)
        });

        let mut sass = style_loaders(ctx);
        sass.push(Loader::new(
            "sass-loader",
            Some(json!({ "sourceMap": style_source_maps(ctx) })),
        ));
        rules.push(Rule {
            loaders: sass,
            ..Rule::new(SASS_TEST)
        });
    }

    rules.push(Rule {
        loaders: vec![Loader::new("@svgr/webpack", None)],
        ..Rule::new(SVG_TEST)
    });
    rules.push(Rule::asset(FONT_TEST, "fonts/[name].[hash][ext]"));
    rules.push(Rule::asset(IMAGE_TEST, "images/[name].[hash][ext]"));

    ModuleRules { rules }
}

fn style_source_maps(ctx: &BuildContext) -> bool {
    !ctx.is_production() || ctx.project.sourcemap
}

fn style_loaders(ctx: &BuildContext) -> Vec<Loader> {
    let source_map = style_source_maps(ctx);
    vec![
        Loader::new("mini-css-extract-plugin/loader", None),
        Loader::new(
            "css-loader",
            Some(json!({ "sourceMap": source_map, "url": false })),
        ),
        Loader::new(
            "postcss-loader",
            Some(json!({ "sourceMap": source_map })),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
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
    fn tests_are_valid_patterns() {
        for test in [SCRIPT_TEST, CSS_TEST, SASS_TEST, SVG_TEST, FONT_TEST, IMAGE_TEST] {
            assert!(Regex::new(test).is_ok(), "{test}");
        }
        assert!(Regex::new(SASS_TEST).unwrap().is_match("style.scss"));
        assert!(Regex::new(SCRIPT_TEST).unwrap().is_match("view.tsx"));
    }

    #[test]
    fn script_build_has_style_rules() {
        let rules = module_rules(&ctx(Mode::Development));
        assert!(rules.find(CSS_TEST).is_some());
        let sass = rules.find(SASS_TEST).unwrap();
        assert_eq!(sass.loaders.last().unwrap().loader, "sass-loader");
    }

    #[test]
    fn module_build_targets_esmodules_without_styles() {
        let rules = module_rules(&ctx(Mode::Production).as_module());
        assert!(rules.find(CSS_TEST).is_none());
        assert!(rules.find(SASS_TEST).is_none());

        let script = rules.find(SCRIPT_TEST).unwrap();
        let options = script.loaders[0].options.as_ref().unwrap();
        assert_eq!(options["targets"]["esmodules"], true);
    }
}

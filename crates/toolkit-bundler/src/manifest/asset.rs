//! Asset references declared in block manifests.

use std::fmt;

use serde_json::Value;

/// Prefix marking an asset value as a file relative to the manifest
pub const LOCAL_PREFIX: &str = "file:";

/// Manifest fields holding script references
pub const SCRIPT_FIELDS: &[&str] = &[
    "script",
    "editorScript",
    "viewScript",
    "viewScriptModule",
    "scriptModule",
];

/// Manifest fields holding style references
pub const STYLE_FIELDS: &[&str] = &["style", "editorStyle", "viewStyle"];

/// A single asset value from a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetRef<'a> {
    /// A file next to the manifest (`file:./index.ts`); holds the path
    /// without the prefix.
    Local(&'a str),
    /// A handle registered elsewhere (`wp-block-library`).
    Registered(&'a str),
}

impl<'a> AssetRef<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.strip_prefix(LOCAL_PREFIX) {
            Some(path) => AssetRef::Local(path),
            None => AssetRef::Registered(raw),
        }
    }

    pub fn local_path(&self) -> Option<&'a str> {
        match self {
            AssetRef::Local(path) => Some(path),
            AssetRef::Registered(_) => None,
        }
    }
}

impl fmt::Display for AssetRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetRef::Local(path) => write!(f, "{LOCAL_PREFIX}{path}"),
            AssetRef::Registered(handle) => f.write_str(handle),
        }
    }
}

/// Which family of manifest fields an asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Script,
    Style,
}

impl AssetKind {
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            AssetKind::Script => SCRIPT_FIELDS,
            AssetKind::Style => STYLE_FIELDS,
        }
    }

    /// Source extensions rewritten for this kind, longest first.
    fn source_extensions(self) -> &'static [&'static str] {
        match self {
            AssetKind::Script => &[".tsx", ".ts"],
            AssetKind::Style => &[".sass", ".scss"],
        }
    }

    fn output_extension(self) -> &'static str {
        match self {
            AssetKind::Script => ".js",
            AssetKind::Style => ".css",
        }
    }

    /// Path with its source extension swapped for the compiled one, or
    /// `None` when the extension is not one this kind compiles.
    pub fn compiled_path(self, path: &str) -> Option<String> {
        self.source_extensions().iter().find_map(|ext| {
            path.strip_suffix(ext)
                .map(|stem| format!("{stem}{}", self.output_extension()))
        })
    }

    /// Rewrite a manifest value of this kind.
    ///
    /// Strings and string elements of arrays are rewritten when they are
    /// local references with a source extension. Anything else is returned
    /// unchanged.
    pub fn rewrite(self, value: &Value) -> Value {
        match value {
            Value::String(raw) => Value::String(self.rewrite_str(raw)),
            Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(raw) => Value::String(self.rewrite_str(raw)),
                        other => other.clone(),
                    })
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    fn rewrite_str(self, raw: &str) -> String {
        match AssetRef::parse(raw) {
            AssetRef::Local(path) => match self.compiled_path(path) {
                Some(compiled) => AssetRef::Local(&compiled).to_string(),
                None => raw.to_string(),
            },
            AssetRef::Registered(_) => raw.to_string(),
        }
    }
}

/// Normalize a single value or a list into a list of values.
pub fn as_list(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
        None => Vec::new(),
    }
}

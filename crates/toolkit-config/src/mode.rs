//! Build mode selection.

use serde::{Deserialize, Serialize};

/// Environment variable consulted for the production flag.
pub const NODE_ENV: &str = "NODE_ENV";

/// Bundler mode, propagated to every configuration slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    /// Read the mode from `NODE_ENV`.
    pub fn from_env() -> Self {
        Self::from_node_env(std::env::var(NODE_ENV).ok().as_deref())
    }

    /// Only the exact value `production` selects production mode.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("production") => Mode::Production,
            _ => Mode::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Mode::Production
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(format!("Invalid mode: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_production_value_selects_production() {
        assert_eq!(Mode::from_node_env(Some("production")), Mode::Production);
        assert_eq!(Mode::from_node_env(Some("development")), Mode::Development);
        assert_eq!(Mode::from_node_env(Some("PRODUCTION")), Mode::Development);
        assert_eq!(Mode::from_node_env(None), Mode::Development);
    }

    #[test]
    fn parses_short_names() {
        assert_eq!("prod".parse::<Mode>().unwrap(), Mode::Production);
        assert_eq!("Development".parse::<Mode>().unwrap(), Mode::Development);
        assert!("staging".parse::<Mode>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(Mode::Production).unwrap(),
            serde_json::json!("production")
        );
    }
}

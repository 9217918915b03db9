//! Miette rendering for CLI errors.

use miette::Report;
use toolkit_config::ConfigError;

use super::CliError;

pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::NotFound { root }) => miette::miette!(
            help = "Run inside a project directory or pass --root <DIR>",
            "No package.json found in {}",
            root.display()
        ),
        CliError::Config(ConfigError::InvalidValue { field, message }) => miette::miette!(
            help = "Check the \"10up-toolkit\" field in package.json and TOOLKIT_* variables",
            "Invalid configuration in '{}': {}",
            field,
            message
        ),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Check the path and try again",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn not_found_report_mentions_root_flag() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::NotFound {
            root: PathBuf::from("/project"),
        }));
        assert!(report.to_string().contains("/project"));
        let help = report.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("--root"));
    }
}

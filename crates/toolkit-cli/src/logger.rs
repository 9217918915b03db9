//! Logging setup for the `toolkit` binary.
//!
//! Libraries only emit `tracing` events; this module installs the subscriber.
//!
//! ```rust,no_run
//! use toolkit_cli::logger::init_logger;
//!
//! init_logger(false, false, false);
//! tracing::info!("assembling configuration");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "toolkit=debug,toolkit_bundler=debug,toolkit_config=debug,toolkit_cli=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "toolkit=info,toolkit_bundler=info,toolkit_config=info,toolkit_cli=info";

/// Initialize the tracing subscriber.
///
/// Level selection, first match wins:
/// 1. `--verbose`: DEBUG for toolkit crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`
/// 4. INFO for toolkit crates
///
/// Logs go to stderr so command output on stdout stays machine readable.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    init_logger_with_filter(filter, no_color);
}

/// Initialize the subscriber with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Whether stderr output should be colored.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_parse() {
        for directives in [VERBOSE_FILTER, QUIET_FILTER, DEFAULT_FILTER] {
            assert!(EnvFilter::try_new(directives).is_ok(), "{directives}");
        }
    }
}

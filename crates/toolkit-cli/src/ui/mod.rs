//! Status messages on stderr.
//!
//! ```no_run
//! use toolkit_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Copied 3 block manifests");
//! ```

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);

/// Decide once whether messages are colored. `--no-color` always wins.
pub fn init_colors(no_color: bool) {
    COLORS.store(
        !no_color && crate::logger::should_use_colors(),
        Ordering::Relaxed,
    );
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

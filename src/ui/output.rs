//! Diagnostics on stderr, gated by verbosity.
//!
//! stdout is reserved for the sidebar (or JSON); everything here goes to
//! stderr so it never mixes with machine-readable output.

use std::path::Path;

use navtree::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::style::{paint, Tone};
use crate::ui::theme::{icon, icons, icons_ascii};

/// Printed with `-v` and above
pub fn verbose(ui: &UiContext, message: impl AsRef<str>) {
    if ui.is_verbose() {
        eprintln!("{}", message.as_ref());
    }
}

/// Printed with `-vv` and above
pub fn debug(ui: &UiContext, message: impl AsRef<str>) {
    if ui.is_debug() {
        eprintln!("{}", paint(message.as_ref(), Tone::Dim, ui.color));
    }
}

/// Printed unless quiet
pub fn warn(ui: &UiContext, message: impl AsRef<str>) {
    if ui.is_quiet() {
        return;
    }
    let prefix = icon(ui.unicode, icons::WARNING, icons_ascii::WARNING);
    eprintln!(
        "{}",
        paint(&format!("{} {}", prefix, message.as_ref()), Tone::Warning, ui.color)
    );
}

/// Always printed
pub fn error(ui: &UiContext, err: &anyhow::Error) {
    let prefix = icon(ui.unicode, icons::ERROR, icons_ascii::ERROR);
    eprintln!(
        "{}",
        paint(&format!("{} Error: {}", prefix, err), Tone::Error, ui.color)
    );
    for cause in err.chain().skip(1) {
        eprintln!("  caused by: {}", cause);
    }
}

pub fn print_config_warnings(ui: &UiContext, path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        match w.line {
            Some(line) => warn(
                ui,
                format!("Unknown config key '{}' in {}:{}", w.key, path.display(), line),
            ),
            None => warn(
                ui,
                format!("Unknown config key '{}' in {}", w.key, path.display()),
            ),
        }

        if let Some(suggestion) = &w.suggestion {
            if !ui.is_quiet() {
                eprintln!("   Did you mean '{}'?", suggestion);
            }
        }
    }
}

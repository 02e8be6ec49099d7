//! Messages for the user. Warnings and errors go to stderr.

use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::style::{Color, Stylize, style};
use crossterm::tty::IsTty;

pub const PARANOID_NOTICE: &str =
    "Paranoid mode active. Use --show-password to display the password.";

pub const CLIPBOARD_COPIED: &str = "*** -COPIED TO CLIPBOARD- ***";

static QUIET: AtomicBool = AtomicBool::new(false);

/// Suppress warnings and non-essential notices.
pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn paint(msg: &str, color: Color) -> String {
    if std::io::stderr().is_tty() {
        style(msg).with(color).to_string()
    } else {
        msg.to_string()
    }
}

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{}", paint(msg, Color::Yellow));
    }
}

/// Red error on stderr. Never suppressed.
pub fn error(msg: &str) {
    eprintln!("{}", paint(msg, Color::Red));
}

pub fn mlock_failed() {
    warn("Warning: mlock failed - password buffer may be swapped to disk.");
    warn("Fix: ulimit -l unlimited, or setcap cap_ipc_lock=ep on binary");
}

pub fn settings_saved(path: &std::path::Path) {
    if !quiet() {
        eprintln!("Defaults saved \u{2192} {}", path.display());
    }
}

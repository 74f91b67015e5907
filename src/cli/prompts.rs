//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning to stderr (yellow). Suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error to stderr (red). Errors are never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Confirm clipboard copy. Suppressed in quiet mode.
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("Copied {count} password(s) to clipboard.");
    }
}

/// Print a clipboard failure to stderr. Errors are never suppressed.
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to fall back to terminal output when no clipboard is
/// available. Quiet or non-interactive runs fall back without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("No clipboard available. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }

    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

/// Report file output. Suppressed in quiet mode.
pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        println!("{count} password(s) \u{2192} {path}");
    }
}

/// Confirm that `--save` persisted the current flags. Suppressed in quiet mode.
pub fn settings_saved() {
    if !quiet::enabled() {
        println!("Settings saved as defaults.");
    }
}

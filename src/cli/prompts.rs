//! User-facing warnings, errors and prompts.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::terminal::{RED, RESET, YELLOW};

/// Suppresses warnings and confirmations, never errors or passwords.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// stdin is a tty.
pub fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

fn skip_prompt() -> bool {
    quiet() || !is_interactive()
}

/// Yellow, on stderr; suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red, on stderr; always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn strength_unavailable(err: &dyn std::fmt::Display) {
    warn(&format!("Warning: {err}; password printed without a strength rating"));
}

pub fn class_kept(class: &str) {
    warn(&format!("Warning: at least one character class must stay enabled; keeping {class}"));
}

pub fn clipboard_copied(count: usize) {
    if !quiet() {
        println!("*** {count} password(s) copied to clipboard ***");
    }
}

pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}

/// Clipboard unavailable: print to the terminal instead? Non-interactive and
/// quiet runs fall back without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        return true;
    }

    eprintln!("Aborted.");
    false
}

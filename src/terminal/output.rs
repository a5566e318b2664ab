//! Terminal output utilities.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

use clearpass::pass::Severity;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to a sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => RED,
        Severity::Medium => YELLOW,
        Severity::High => GREEN,
    }
}

/// Meter with `filled` of `max` cells lit.
pub fn meter(filled: u8, max: u8, color: &str) -> String {
    let filled = filled.min(max) as usize;
    format!(
        "{color}{}{RESET}{DIM}{}{RESET}",
        "█".repeat(filled),
        "░".repeat(max as usize - filled)
    )
}

use clearpass::pass::charset::DEFAULT_SYMBOLS;
use clearpass::settings::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};

use crate::terminal::Frame;

pub fn print_help() {
    let mut frame = Frame::new();
    frame
        .top("clearpass")
        .center("Password generator without look-alike characters")
        .line("")
        .line("MODES:")
        .line("  1) Interactive: run without arguments. Toggle classes, change")
        .line("     the length and copy passwords from a live screen.")
        .line("  2) Client: pass flags (e.g. -l 20 -n 5) to print passwords.")
        .line("")
        .line("USAGE:")
        .line("  clearpass [OPTIONS]")
        .line("")
        .line("OPTIONS:")
        .line(" Password:")
        .opt(
            "  -l, --length <N>",
            &format!("Characters per password, {MIN_LENGTH}-{MAX_LENGTH} (default: {DEFAULT_LENGTH})"),
        )
        .opt("  -n, --number <N>", "How many passwords to generate (default: 1)")
        .opt("      --no-lower", "Leave out lowercase letters")
        .opt("      --no-upper", "Leave out uppercase letters")
        .opt("      --no-numbers", "Leave out digits")
        .opt(
            "  -s, --symbols [CHARS]",
            &format!("Add symbols (default set: {DEFAULT_SYMBOLS}). Use --symbols=CHARS for sets starting with '-'"),
        )
        .opt("      --no-symbols", "Leave out symbols (default)")
        .opt("      --seed <N>", "Seed the generator for reproducible output")
        .line("")
        .line(" Output:")
        .opt("  -S, --strength", "Show the zxcvbn strength rating after each password")
        .opt("  -b, --board", "Copy to clipboard instead of printing")
        .opt("  -q, --quiet", "Suppress warnings")
        .line("")
        .line(" Info:")
        .opt("  -h, --help", "Display this help message")
        .opt("  -v, --version", "Display version")
        .line("")
        .line("Look-alike glyphs l, o, I, O and 0 are never used.")
        .line("At least one character class always stays enabled.")
        .line("")
        .line("EXAMPLES:")
        .line("  clearpass -l 16           One password, 16 characters")
        .line("  clearpass -l 20 -n 3 -S   Three passwords with strength ratings")
        .line("  clearpass -s '#$%'        Letters, digits and #, $, %")
        .bottom();
    let _ = frame.print();
}

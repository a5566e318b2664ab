use std::env;

mod cli;
mod exits;
mod terminal;
mod tui;

use clearpass::{Settings, logging};

#[cfg(target_os = "linux")]
fn deny_core_dumps() {
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

#[cfg(not(target_os = "linux"))]
fn deny_core_dumps() {}

fn main() {
    exits::reset_terminal();
    exits::install_handlers();
    deny_core_dumps();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 if cli::prompts::is_interactive() => {
            // Diagnostics would draw over the screen; RUST_LOG still opts in.
            logging::init("off");
            tui::run(Settings::default());
        }
        _ => cli::run(args),
    }
}

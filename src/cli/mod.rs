//! One-shot command-line mode.

mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use help::print_help;
pub use parse::{ParseError, parse};

/// Parse `args`, generate, and exit non-zero on failure.
pub fn run(args: Vec<String>) {
    let mut context = match Context::new(args) {
        Ok(context) => context,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try `clearpass --help`");
            std::process::exit(2);
        }
    };

    if let Err(Done::Failed) = context.run() {
        std::process::exit(1);
    }
}

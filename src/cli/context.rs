//! CLI context: bundles settings, flags, and clipboard state.

use std::fmt::Display;
use std::io::Write;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroizing;

use clearpass::pass::{self, CharClass, CustomSymbols, Toggle, Zxcvbn};
use clearpass::{Error, Settings, logging};

use super::{CliFlags, ParseError, print_help, prompts};

/// Why the run stopped before the end.
#[derive(Debug, PartialEq, Eq)]
pub enum Done {
    /// Nothing left to do (help, version, aborted prompt).
    Early,
    /// An error was already reported to the user.
    Failed,
}

fn fail(err: &dyn Display) -> Done {
    prompts::error(&format!("Error: {err}"));
    Done::Failed
}

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    pub clipboard: Option<ClipboardContext>,
}

impl Context {
    pub fn new(args: Vec<String>) -> Result<Self, ParseError> {
        let flags = super::parse(&args)?;
        Ok(Self {
            settings: Settings::default(),
            flags,
            clipboard: None,
        })
    }

    /// Run CLI. `Err(Done::Early)` is a normal exit.
    pub fn run(&mut self) -> Result<(), Done> {
        prompts::set_quiet(self.flags.quiet);
        logging::init(if self.flags.quiet { "off" } else { "warn" });

        match self.execute() {
            Err(Done::Early) => Ok(()),
            result => result,
        }
    }

    fn execute(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        self.apply_flags()?;
        self.open_clipboard()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done::Early);
        }
        if self.flags.version {
            println!("clearpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done::Early);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), Done> {
        let settings = &mut self.settings;

        if let Some(raw) = &self.flags.length {
            settings.pass_length = settings
                .bounds
                .parse(raw)
                .map_err(|e| fail(&Error::from(e)))?;
        }
        if let Some(number) = self.flags.number {
            if number == 0 {
                return Err(fail(&"number of passwords must be at least 1"));
            }
            settings.number_of_passwords = number;
        }
        settings.seed = self.flags.seed;
        settings.show_strength = self.flags.strength;

        let classes = &mut settings.classes;
        if let Some(text) = &self.flags.custom_symbols {
            classes.set_symbols(CustomSymbols::parse(text));
        }
        if self.flags.symbols {
            classes.set(CharClass::Symbols, true);
        }

        let disabled = [
            (self.flags.no_lower, CharClass::Lowercase),
            (self.flags.no_upper, CharClass::Uppercase),
            (self.flags.no_numbers, CharClass::Numbers),
            (self.flags.no_symbols, CharClass::Symbols),
        ];
        for (off, class) in disabled {
            if off && classes.set(class, false) == Toggle::Rejected {
                prompts::class_kept(class.name());
            }
        }

        settings.to_clipboard = self.flags.clipboard;
        Ok(())
    }

    fn open_clipboard(&mut self) -> Result<(), Done> {
        if !self.settings.to_clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(ctx) => self.clipboard = Some(ctx),
            Err(e) => {
                tracing::debug!(error = %e, "clipboard unavailable");
                if !prompts::clipboard_fallback_prompt() {
                    return Err(Done::Early);
                }
                self.settings.to_clipboard = false;
            }
        }
        Ok(())
    }

    /// Generate passwords to the terminal or the clipboard.
    pub fn generate_output(&mut self) -> Result<(), Done> {
        let settings = &self.settings;
        let pool = pass::build_pool(&settings.classes);
        let mut rng = pass::random_source(settings.seed);
        let mut collected = Zeroizing::new(String::new());
        let mut warned = false;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        for _ in 0..settings.number_of_passwords {
            let mut line = if settings.show_strength {
                let generated =
                    pass::generate_password(&pool, settings.pass_length, &mut *rng, &Zxcvbn)
                        .map_err(|e| report(&e))?;
                let mut line = generated.password;
                match generated.strength {
                    Ok(strength) => line.push_str(&format!("  {strength}")),
                    Err(e) if !warned => {
                        prompts::strength_unavailable(&e);
                        warned = true;
                    }
                    Err(_) => {}
                }
                line
            } else {
                pass::generate(&pool, settings.pass_length, &mut *rng).map_err(|e| report(&e))?
            };
            line.push('\n');

            if settings.to_clipboard {
                collected.push_str(&line);
            } else if out.write_all(line.as_bytes()).is_err() {
                // Closed pipe: nothing more to write to.
                return Ok(());
            }
        }
        drop(out);

        if let Some(ctx) = self.clipboard.as_mut() {
            let contents = collected.trim_end_matches('\n').to_string();
            match ctx.set_contents(contents) {
                Ok(()) => prompts::clipboard_copied(settings.number_of_passwords),
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
        }
        Ok(())
    }
}

fn report(err: &Error) -> Done {
    match err {
        Error::EmptyPool => {
            prompts::error(&format!("Error: {err}"));
            prompts::error("Enable another class or give symbols with -s <CHARS>");
            Done::Failed
        }
        _ => fail(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(list: &[&str]) -> Context {
        let args = std::iter::once("clearpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        Context::new(args).unwrap()
    }

    #[test]
    fn flags_shape_the_config() {
        let mut ctx = context(&["-l", "20", "--no-lower", "-s", "#!"]);
        ctx.apply_flags().unwrap();
        let classes = &ctx.settings.classes;
        assert_eq!(ctx.settings.pass_length, 20);
        assert!(!classes.is_enabled(CharClass::Lowercase));
        assert!(classes.is_enabled(CharClass::Symbols));
        assert_eq!(classes.symbols().to_string(), "#!");
    }

    #[test]
    fn disabling_everything_keeps_the_last_class() {
        let mut ctx = context(&["-q", "--no-lower", "--no-upper", "--no-numbers"]);
        prompts::set_quiet(true);
        ctx.apply_flags().unwrap();
        let on: Vec<_> = ctx.settings.classes.enabled_classes().collect();
        assert_eq!(on, [CharClass::Numbers]);
    }

    #[test]
    fn out_of_bounds_length_fails() {
        let mut ctx = context(&["-l", "500"]);
        assert_eq!(ctx.apply_flags(), Err(Done::Failed));
        let mut ctx = context(&["-l", "0"]);
        assert_eq!(ctx.apply_flags(), Err(Done::Failed));
    }

    #[test]
    fn zero_passwords_fails() {
        let mut ctx = context(&["-n", "0"]);
        assert_eq!(ctx.apply_flags(), Err(Done::Failed));
        let mut ctx = context(&["-n", "2"]);
        ctx.apply_flags().unwrap();
        assert_eq!(ctx.settings.number_of_passwords, 2);
    }
}

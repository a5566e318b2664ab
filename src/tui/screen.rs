//! Screen state and drawing.

use std::io;
use std::time::{Duration, Instant};

use copypasta::{ClipboardContext, ClipboardProvider};

use clearpass::pass::strength::{entropy_bits, entropy_label};
use clearpass::pass::{CharClass, CharacterPool, ClassConfig, Generated, Password, Strength, charset};
use clearpass::settings::LengthBounds;
use clearpass::{Error, Result};

use crate::terminal::{BOLD, DIM, Frame, GREEN, RED, RESET, YELLOW, meter, severity_color};

/// How long "Copied!" replaces the password.
pub const COPIED_FOR: Duration = Duration::from_millis(1000);

const SYMBOLS_SHOWN: usize = 40;

pub enum Status {
    Info(String),
    Warn(String),
    Error(String),
}

/// What the screen needs from the session to draw itself.
pub struct View<'a> {
    pub config: &'a ClassConfig,
    pub pool: &'a CharacterPool,
    pub length: usize,
    pub bounds: LengthBounds,
}

#[derive(Default)]
pub struct Screen {
    password: Option<Password>,
    strength: Option<Strength>,
    pub status: Option<Status>,
    copied_until: Option<Instant>,
    clipboard: Option<ClipboardContext>,
}

impl Screen {
    /// Take the result of a session operation.
    pub fn show(&mut self, result: Result<Generated>) {
        match result {
            Ok(generated) => {
                self.password = Some(generated.password);
                self.status = None;
                match generated.strength {
                    Ok(strength) => self.strength = Some(strength),
                    Err(e) => {
                        self.strength = None;
                        self.status = Some(Status::Warn(e.to_string()));
                    }
                }
            }
            Err(Error::EmptyPool) => {
                self.password = None;
                self.strength = None;
                self.status = Some(Status::Error(
                    "empty character pool: add symbols with (e) or enable another class".into(),
                ));
            }
            Err(e) => self.status = Some(Status::Error(e.to_string())),
        }
    }

    /// Copy the current password. Ignored while "Copied!" is showing.
    pub fn copy(&mut self, now: Instant) {
        if self.copied_until.is_some() {
            return;
        }
        let Some(password) = self.password.as_ref() else {
            return;
        };

        if self.clipboard.is_none() {
            match ClipboardContext::new() {
                Ok(ctx) => self.clipboard = Some(ctx),
                Err(e) => {
                    self.status = Some(Status::Error(format!("Clipboard unavailable: {e}")));
                    return;
                }
            }
        }
        let Some(ctx) = self.clipboard.as_mut() else {
            return;
        };

        match ctx.set_contents(password.as_str().to_owned()) {
            Ok(()) => self.copied_until = Some(now + COPIED_FOR),
            Err(e) => self.status = Some(Status::Error(format!("Clipboard error: {e}"))),
        }
    }

    pub fn copied(&self) -> bool {
        self.copied_until.is_some()
    }

    /// Drop the "Copied!" indicator once its time is up.
    pub fn expire(&mut self, now: Instant) {
        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }

    /// Next moment the screen changes on its own.
    pub fn deadline(&self) -> Option<Instant> {
        self.copied_until
    }

    pub fn frame(&self, view: &View<'_>) -> Frame {
        let mut frame = Frame::new();
        frame.top("clearpass").line("");

        match (&self.password, self.copied()) {
            (_, true) => frame.center(&format!("{BOLD}{GREEN}Copied!{RESET}")),
            (Some(password), false) => frame.center(&format!("{BOLD}{}{RESET}", password.as_str())),
            (None, false) => frame.center(&format!("{DIM}(no password){RESET}")),
        };
        frame.line("");

        match &self.strength {
            Some(strength) => frame.line(&format!(
                "Strength  {} {}",
                meter(strength.meter, Strength::METER_MAX, severity_color(strength.severity)),
                strength
            )),
            None => frame.line(&format!("Strength  {DIM}unavailable{RESET}")),
        };
        let bits = entropy_bits(view.length, view.pool.len());
        frame.line(&format!(
            "Entropy   {bits:.1} bits ({}) • pool {} chars",
            entropy_label(bits),
            view.pool.len()
        ));

        frame.rule().line(&format!(
            "Length    {BOLD}{:>2}{RESET}   (-) shorter  (+) longer  (L) type   [{}-{}]",
            view.length, view.bounds.min, view.bounds.max
        ));
        frame.line("");
        for (key, class) in ['l', 'u', 'n', 's'].into_iter().zip(CharClass::ALL) {
            let mark = if view.config.is_enabled(class) { "x" } else { " " };
            frame.line(&format!(
                "[{mark}] ({key}) {:<10} {DIM}{}{RESET}",
                class.name(),
                class_chars(view.config, class)
            ));
        }

        frame
            .rule()
            .line("(r) new password   (c) copy   (e) edit symbols   (d) default symbols")
            .line("(q) quit")
            .bottom();

        if let Some(status) = &self.status {
            let line = match status {
                Status::Info(msg) => msg.clone(),
                Status::Warn(msg) => format!("{YELLOW}{msg}{RESET}"),
                Status::Error(msg) => format!("{RED}{msg}{RESET}"),
            };
            frame.text(&line);
        }
        frame
    }

    pub fn draw(&self, view: &View<'_>) -> io::Result<()> {
        self.frame(view).render()
    }
}

fn class_chars(config: &ClassConfig, class: CharClass) -> String {
    match class {
        CharClass::Lowercase => charset::LOWERCASE.to_string(),
        CharClass::Uppercase => charset::UPPERCASE.to_string(),
        CharClass::Numbers => charset::NUMBERS.to_string(),
        CharClass::Symbols => {
            let symbols = config.symbols().to_string();
            if symbols.is_empty() {
                "(none)".to_string()
            } else if symbols.chars().count() > SYMBOLS_SHOWN {
                let head: String = symbols.chars().take(SYMBOLS_SHOWN - 1).collect();
                format!("{head}…")
            } else {
                symbols
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::terminal::{BOX_WIDTH, display_width};
    use clearpass::Settings;
    use clearpass::pass::{Score, Session};

    fn session() -> Session<impl clearpass::pass::StrengthEstimator, StdRng> {
        Session::new(&Settings::default(), |_: &str| Score::new(3), StdRng::seed_from_u64(11))
    }

    fn view<E, R>(s: &Session<E, R>) -> View<'_> {
        View {
            config: s.config(),
            pool: s.pool(),
            length: s.length(),
            bounds: s.bounds(),
        }
    }

    #[test]
    fn frame_lines_fit_the_box() {
        let mut s = session();
        let mut screen = Screen::default();
        screen.show(s.refresh());
        let frame = screen.frame(&view(&s));
        for line in frame.lines() {
            assert_eq!(display_width(line), BOX_WIDTH, "{line:?}");
        }
    }

    #[test]
    fn empty_pool_clears_password() {
        let mut s = session();
        let mut screen = Screen::default();
        screen.show(s.refresh());
        assert!(screen.password.is_some());

        let config = ClassConfig::only(CharClass::Symbols)
            .with_symbols(clearpass::pass::CustomSymbols::parse(""));
        screen.show(s.on_config_change(config));
        assert!(screen.password.is_none());
        assert!(matches!(screen.status, Some(Status::Error(_))));
    }

    #[test]
    fn bad_length_keeps_password() {
        let mut s = session();
        let mut screen = Screen::default();
        screen.show(s.refresh());
        screen.show(s.set_length_str("x"));
        assert!(screen.password.is_some());
        assert!(matches!(screen.status, Some(Status::Error(_))));
    }

    #[test]
    fn copied_indicator_expires() {
        let mut screen = Screen::default();
        let now = Instant::now();
        screen.copied_until = Some(now + COPIED_FOR);
        screen.expire(now + Duration::from_millis(999));
        assert!(screen.copied());
        screen.expire(now + COPIED_FOR);
        assert!(!screen.copied());
    }
}

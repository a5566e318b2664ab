//! Interactive screen: every key press is a control change that rebuilds
//! the pool and shows a fresh password.

mod input;
mod screen;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event};

use clearpass::Settings;
use clearpass::pass::{self, CharClass, Session, StrengthEstimator, Toggle, Zxcvbn};
use rand::Rng;

use crate::cli::prompts;
use crate::terminal::{RawModeGuard, clear, reset_terminal};
use input::{Action, edit_line};
use screen::{Screen, Status, View};

/// Poll interval while nothing is scheduled.
const IDLE: Duration = Duration::from_secs(60);

/// Run TUI interactive mode.
pub fn run(settings: Settings) {
    let mut session = Session::new(&settings, Zxcvbn, pass::random_source(settings.seed));
    let mut screen = Screen::default();
    screen.show(session.on_config_change(settings.classes.clone()));

    let guard = match RawModeGuard::new() {
        Ok(guard) => guard,
        Err(e) => {
            prompts::error(&format!("Cannot start interactive mode: {e}"));
            return;
        }
    };

    let mut failure = None;
    loop {
        screen.expire(Instant::now());
        let view = View {
            config: session.config(),
            pool: session.pool(),
            length: session.length(),
            bounds: session.bounds(),
        };
        if let Err(e) = screen.draw(&view) {
            tracing::error!(error = %e, "drawing failed");
            failure = Some(e);
            break;
        }

        let timeout = screen
            .deadline()
            .map(|at| at.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE);
        if !event::poll(timeout).unwrap_or(false) {
            continue;
        }
        let key = match event::read() {
            Ok(Event::Key(key)) => key,
            Ok(_) => continue,
            Err(_) => break,
        };

        match input::action(&key) {
            Some(Action::Quit) => break,
            Some(action) => apply(action, &mut session, &mut screen),
            None => {}
        }
    }

    drop(guard);
    reset_terminal();
    clear();
    if let Some(e) = failure {
        prompts::error(&draw_failed(&e));
    }
}

fn draw_failed(e: &std::io::Error) -> String {
    format!("Cannot draw the screen: {e}")
}

fn apply<E: StrengthEstimator, R: Rng>(
    action: Action,
    session: &mut Session<E, R>,
    screen: &mut Screen,
) {
    match action {
        Action::Quit => {}
        Action::Refresh => screen.show(session.refresh()),
        Action::Copy => screen.copy(Instant::now()),
        Action::Toggle(class) => match session.toggle(class) {
            Ok((Toggle::Rejected, generated)) => {
                screen.show(Ok(generated));
                screen.status = Some(Status::Warn(format!(
                    "{} stays on: at least one class is required",
                    class.name()
                )));
            }
            result => screen.show(result.map(|(_, generated)| generated)),
        },
        Action::Longer => {
            if let Some(result) = session.increase_length().transpose() {
                screen.show(result);
            }
        }
        Action::Shorter => {
            if let Some(result) = session.decrease_length().transpose() {
                screen.show(result);
            }
        }
        Action::EditLength => {
            let current = session.length().to_string();
            if let Some(text) = edit_line("Length", &current) {
                screen.show(session.set_length_str(&text));
            }
        }
        Action::EditSymbols => {
            if !session.config().is_enabled(CharClass::Symbols) {
                screen.status = Some(Status::Info("Enable symbols with (s) to edit them".into()));
                return;
            }
            let current = session.config().symbols().to_string();
            if let Some(text) = edit_line("Symbols", &current) {
                screen.show(session.set_custom_symbols(&text));
            }
        }
        Action::ResetSymbols => screen.show(session.reset_symbols()),
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn draw_failure_names_the_cause() {
        let e = io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone");
        assert_eq!(draw_failed(&e), "Cannot draw the screen: terminal gone");
    }
}

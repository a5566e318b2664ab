//! Key bindings and line editing for the interactive screen.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use clearpass::pass::CharClass;

use crate::terminal::flush;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    Copy,
    Toggle(CharClass),
    Longer,
    Shorter,
    EditLength,
    EditSymbols,
    ResetSymbols,
}

/// Map a key press to a screen action.
pub fn action(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }
    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char(' ') => Action::Refresh,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('l') => Action::Toggle(CharClass::Lowercase),
        KeyCode::Char('u') => Action::Toggle(CharClass::Uppercase),
        KeyCode::Char('n') => Action::Toggle(CharClass::Numbers),
        KeyCode::Char('s') => Action::Toggle(CharClass::Symbols),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Up => Action::Longer,
        KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => Action::Shorter,
        KeyCode::Char('L') => Action::EditLength,
        KeyCode::Char('e') => Action::EditSymbols,
        KeyCode::Char('d') => Action::ResetSymbols,
        _ => return None,
    };
    Some(action)
}

/// Single-line editor. Expects raw mode to be on already.
/// Returns `None` when cancelled with Esc or Ctrl+C.
pub fn edit_line(prompt: &str, initial: &str) -> Option<String> {
    let mut input: Vec<char> = initial.chars().collect();
    let mut cursor = input.len();
    let mut drawn = input.len();

    print!("\x1b[?25h");
    redraw(prompt, &input, cursor, drawn);

    let result = loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(_) => break None,
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => break None,
            KeyCode::Esc => break None,
            KeyCode::Enter => break Some(input.iter().collect()),
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left => cursor = cursor.saturating_sub(1),
            KeyCode::Right => cursor = (cursor + 1).min(input.len()),
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        redraw(prompt, &input, cursor, drawn);
        drawn = drawn.max(input.len());
    };

    print!("\x1b[?25l\r\n");
    flush();
    result
}

fn redraw(prompt: &str, input: &[char], cursor: usize, drawn: usize) {
    let text: String = input.iter().collect();
    print!("\r{prompt}: {}", " ".repeat(drawn + 1));
    print!("\r{prompt}: {text}");
    print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
    flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn class_keys_toggle() {
        assert_eq!(
            action(&press(KeyCode::Char('s'))),
            Some(Action::Toggle(CharClass::Symbols))
        );
        assert_eq!(
            action(&press(KeyCode::Char('l'))),
            Some(Action::Toggle(CharClass::Lowercase))
        );
    }

    #[test]
    fn length_keys() {
        assert_eq!(action(&press(KeyCode::Char('+'))), Some(Action::Longer));
        assert_eq!(action(&press(KeyCode::Left)), Some(Action::Shorter));
        assert_eq!(action(&press(KeyCode::Char('L'))), Some(Action::EditLength));
    }

    #[test]
    fn ctrl_c_quits_and_plain_c_copies() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action(&ctrl_c), Some(Action::Quit));
        assert_eq!(action(&press(KeyCode::Char('c'))), Some(Action::Copy));
        assert_eq!(action(&press(KeyCode::Char('z'))), None);
    }
}

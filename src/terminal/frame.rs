//! Box-drawn frames built in memory and written in one go.
//!
//! Lines end in `\r\n` so a frame renders the same in raw and cooked mode.

use std::io::{self, Write};

use unicode_width::UnicodeWidthChar;

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;
const FLAG_COL: usize = 27;

#[derive(Debug, Default)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// `┌─ Title ──────┐`
    pub fn top(&mut self, title: &str) -> &mut Self {
        let line = if title.is_empty() {
            format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
        } else {
            let head = format!("─ {title} ");
            let rest = (BOX_WIDTH - 2).saturating_sub(head.chars().count());
            format!("┌{head}{}┐", "─".repeat(rest))
        };
        self.lines.push(line);
        self
    }

    /// `│ content      │`
    pub fn line(&mut self, content: &str) -> &mut Self {
        let pad = INNER_WIDTH.saturating_sub(display_width(content));
        self.lines.push(format!("│ {content}{} │", " ".repeat(pad)));
        self
    }

    pub fn center(&mut self, content: &str) -> &mut Self {
        let total = INNER_WIDTH.saturating_sub(display_width(content));
        let left = total / 2;
        self.lines.push(format!(
            "│ {}{content}{} │",
            " ".repeat(left),
            " ".repeat(total - left)
        ));
        self
    }

    /// `├──────┤`
    pub fn rule(&mut self) -> &mut Self {
        self.lines.push(format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    pub fn bottom(&mut self) -> &mut Self {
        self.lines.push(format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
        self
    }

    /// Unboxed line below the frame.
    pub fn text(&mut self, content: &str) -> &mut Self {
        self.lines.push(content.to_string());
        self
    }

    /// Help option: flag column plus a word-wrapped description.
    pub fn opt(&mut self, flag: &str, desc: &str) -> &mut Self {
        let desc_col = INNER_WIDTH - FLAG_COL;
        let mut wrapped: Vec<String> = Vec::new();
        for word in desc.split_whitespace() {
            match wrapped.last_mut() {
                Some(line) if line.len() + 1 + word.len() <= desc_col => {
                    line.push(' ');
                    line.push_str(word);
                }
                _ => wrapped.push(word.to_string()),
            }
        }
        if wrapped.is_empty() {
            wrapped.push(String::new());
        }

        for (i, desc) in wrapped.iter().enumerate() {
            let lead = if i == 0 { flag } else { "" };
            self.line(&format!("{lead:<FLAG_COL$}{desc}"));
        }
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\r\n")?;
        }
        out.flush()
    }

    /// Clear the screen and draw the frame.
    pub fn render(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        out.write_all(b"\x1b[2J\x1b[3J\x1b[H")?;
        self.write_to(&mut out)
    }

    /// Draw below whatever is already on screen.
    pub fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }
}

/// Terminal columns, ignoring ANSI escape sequences. Wide glyphs take two.
pub fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += c.width().unwrap_or(0);
        }
    }
    width
}

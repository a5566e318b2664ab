//! Password generation settings.

use crate::error::LengthError;
use crate::pass::ClassConfig;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 50;
pub const DEFAULT_LENGTH: usize = 12;

/// Inclusive bounds of the length control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        }
    }
}

impl LengthBounds {
    /// Reject lengths outside the bounds. Never clamps.
    pub fn check(&self, length: usize) -> Result<usize, LengthError> {
        if length == 0 {
            return Err(LengthError::Zero);
        }
        if length < self.min || length > self.max {
            return Err(LengthError::OutOfRange {
                length,
                min: self.min,
                max: self.max,
            });
        }
        Ok(length)
    }

    pub fn parse(&self, text: &str) -> Result<usize, LengthError> {
        let length = text
            .trim()
            .parse::<usize>()
            .map_err(|_| LengthError::NotNumeric(text.to_string()))?;
        self.check(length)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub bounds: LengthBounds,
    pub classes: ClassConfig,
    /// Fixed seed for reproducible output.
    pub seed: Option<u64>,
    pub show_strength: bool,
    pub to_clipboard: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: DEFAULT_LENGTH,
            number_of_passwords: 1,
            bounds: LengthBounds::default(),
            classes: ClassConfig::default(),
            seed: None,
            show_strength: false,
            to_clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_length_is_in_bounds() {
        let settings = Settings::default();
        assert_eq!(settings.bounds.check(settings.pass_length), Ok(DEFAULT_LENGTH));
    }

    #[test]
    fn check_rejects_without_clamping() {
        let bounds = LengthBounds { min: 4, max: 8 };
        assert_eq!(bounds.check(0), Err(LengthError::Zero));
        assert_eq!(
            bounds.check(3),
            Err(LengthError::OutOfRange { length: 3, min: 4, max: 8 })
        );
        assert_eq!(
            bounds.check(9),
            Err(LengthError::OutOfRange { length: 9, min: 4, max: 8 })
        );
        assert_eq!(bounds.check(8), Ok(8));
    }

    #[test]
    fn parse_rejects_non_numeric() {
        let bounds = LengthBounds::default();
        assert_eq!(bounds.parse(" 16 "), Ok(16));
        assert_eq!(bounds.parse("-3"), Err(LengthError::NotNumeric("-3".into())));
        assert_eq!(bounds.parse("ten"), Err(LengthError::NotNumeric("ten".into())));
    }
}

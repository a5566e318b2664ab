//! Character classes and pool building.

use std::fmt;

/// Lowercase letters without `l` and `o`.
pub const LOWERCASE: &str = "abcdefghijkmnpqrstuvwxyz";
/// Uppercase letters without `I` and `O`.
pub const UPPERCASE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
/// Digits without `0`.
pub const NUMBERS: &str = "123456789";
/// Text the symbol field is reset to.
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()_-+=<>?/[]{},.:;";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Pool order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Lowercase",
            CharClass::Uppercase => "Uppercase",
            CharClass::Numbers => "Numbers",
            CharClass::Symbols => "Symbols",
        }
    }

    fn index(self) -> usize {
        match self {
            CharClass::Lowercase => 0,
            CharClass::Uppercase => 1,
            CharClass::Numbers => 2,
            CharClass::Symbols => 3,
        }
    }
}

/// Deduplicated set of user-supplied symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomSymbols(Vec<char>);

impl CustomSymbols {
    /// Parse free text: whitespace is dropped, repeats keep their first position.
    pub fn parse(text: &str) -> Self {
        let mut chars: Vec<char> = Vec::with_capacity(text.len());
        for c in text.chars().filter(|c| !c.is_whitespace()) {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
        Self(chars)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

impl Default for CustomSymbols {
    fn default() -> Self {
        Self::parse(DEFAULT_SYMBOLS)
    }
}

impl fmt::Display for CustomSymbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Result of switching a class on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Applied,
    /// The last enabled class was asked to turn off; it stays on.
    Rejected,
}

/// Which classes feed the pool. At least one class is always enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassConfig {
    enabled: [bool; 4],
    symbols: CustomSymbols,
}

impl Default for ClassConfig {
    fn default() -> Self {
        Self {
            enabled: [true, true, true, false],
            symbols: CustomSymbols::default(),
        }
    }
}

impl ClassConfig {
    /// Config with exactly one class enabled.
    pub fn only(class: CharClass) -> Self {
        let mut enabled = [false; 4];
        enabled[class.index()] = true;
        Self {
            enabled,
            symbols: CustomSymbols::default(),
        }
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        self.enabled[class.index()]
    }

    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.is_enabled(*c))
    }

    pub fn set(&mut self, class: CharClass, on: bool) -> Toggle {
        if !on && self.is_enabled(class) && self.enabled_classes().count() == 1 {
            return Toggle::Rejected;
        }
        self.enabled[class.index()] = on;
        Toggle::Applied
    }

    pub fn toggle(&mut self, class: CharClass) -> Toggle {
        self.set(class, !self.is_enabled(class))
    }

    pub fn symbols(&self) -> &CustomSymbols {
        &self.symbols
    }

    pub fn set_symbols(&mut self, symbols: CustomSymbols) {
        self.symbols = symbols;
    }

    pub fn with_symbols(mut self, symbols: CustomSymbols) -> Self {
        self.symbols = symbols;
        self
    }
}

/// Characters eligible for selection, in class order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterPool(Vec<char>);

impl CharacterPool {
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }
}

impl From<Vec<char>> for CharacterPool {
    fn from(chars: Vec<char>) -> Self {
        Self(chars)
    }
}

/// Build the pool from the enabled classes.
///
/// Empty only when symbols is the sole class and no custom symbols are set;
/// generation reports that as [`crate::Error::EmptyPool`].
pub fn build(config: &ClassConfig) -> CharacterPool {
    let mut chars: Vec<char> = Vec::new();

    for class in config.enabled_classes() {
        match class {
            CharClass::Lowercase => chars.extend(LOWERCASE.chars()),
            CharClass::Uppercase => chars.extend(UPPERCASE.chars()),
            CharClass::Numbers => chars.extend(NUMBERS.chars()),
            CharClass::Symbols => chars.extend(config.symbols.as_slice()),
        }
    }

    CharacterPool(chars)
}

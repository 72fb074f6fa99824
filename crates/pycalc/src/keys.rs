//! The keypad alphabet
//!
//! Keys are static configuration: each one either appends its text to the
//! display, evaluates it, or clears it.

/// Keypad grid in row-major order
///
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ / ] [ C ]
/// [ 4 ] [ 5 ] [ 6 ] [ * ] [ ( ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ] [ ) ]
/// [ 0 ] [00 ] [ . ] [ + ] [ = ]
/// ```
pub const LAYOUT: [[Key; 5]; 4] = [
    [Key::Digit(7), Key::Digit(8), Key::Digit(9), Key::Divide, Key::Clear],
    [Key::Digit(4), Key::Digit(5), Key::Digit(6), Key::Multiply, Key::OpenParen],
    [Key::Digit(1), Key::Digit(2), Key::Digit(3), Key::Subtract, Key::CloseParen],
    [Key::Digit(0), Key::DoubleZero, Key::Decimal, Key::Add, Key::Equals],
];

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A single keypad key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A digit 0-9
    Digit(u8),
    /// The `00` key
    DoubleZero,
    /// Decimal point
    Decimal,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `=`: evaluate the display
    Equals,
    /// `C`: clear the display
    Clear,
}

/// What pressing a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Append text to the expression
    Append(&'static str),
    /// Replace the expression with its evaluation
    Evaluate,
    /// Empty the display
    Clear,
}

impl Key {
    /// Every key, in keypad order
    #[must_use]
    pub fn all() -> impl Iterator<Item = Key> {
        LAYOUT.into_iter().flatten()
    }

    /// Returns the button label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Digit(d) => DIGITS.get(usize::from(d)).copied().unwrap_or("?"),
            Self::DoubleZero => "00",
            Self::Decimal => ".",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::OpenParen => "(",
            Self::CloseParen => ")",
            Self::Equals => "=",
            Self::Clear => "C",
        }
    }

    /// Returns the handler bound to this key
    #[must_use]
    pub fn handler(self) -> Handler {
        match self {
            Self::Equals => Handler::Evaluate,
            Self::Clear => Handler::Clear,
            _ => Handler::Append(self.label()),
        }
    }

    /// Returns the text appended by this key, `None` for commands
    #[must_use]
    pub fn text(self) -> Option<&'static str> {
        match self.handler() {
            Handler::Append(text) => Some(text),
            Handler::Evaluate | Handler::Clear => None,
        }
    }

    /// Returns true for `=` and `C`
    #[must_use]
    pub const fn is_command(self) -> bool {
        matches!(self, Self::Equals | Self::Clear)
    }

    /// Looks up a key by its button label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().find(|key| key.label() == label)
    }

    /// Maps a typed character to a key
    ///
    /// `c` is accepted for clear alongside `C`. There is no single character
    /// for `00`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '(' => Some(Self::OpenParen),
            ')' => Some(Self::CloseParen),
            '=' => Some(Self::Equals),
            'c' | 'C' => Some(Self::Clear),
            _ => None,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses a string of typed characters into keys
///
/// Returns `None` if any character has no key.
#[must_use]
pub fn parse_keys(input: &str) -> Option<Vec<Key>> {
    input.chars().map(Key::from_char).collect()
}

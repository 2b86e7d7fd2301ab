use crate::error::{CoreError, Result};
use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;

const NUMERIC_CHARS: &str = "0123456789";
/// Digits and uppercase letters without `0`, `O` and `I`, which are easily
/// confused when codes are read aloud or typed by hand.
const ALPHANUMERIC_CHARS: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZ";

const MIN_LENGTH: usize = 2;

/// An ordered set of distinct characters that placeholders draw from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Creates a new `Alphabet` after validating the input.
    ///
    /// Valid alphabets hold at least two characters and no duplicates.
    pub fn new(chars: impl AsRef<str>) -> Result<Self> {
        let chars: Vec<char> = chars.as_ref().chars().collect();
        Self::validate(&chars)?;
        Ok(Self { chars })
    }

    /// The default alphabet for `#` and `#+`.
    pub fn numeric() -> Self {
        Self {
            chars: NUMERIC_CHARS.chars().collect(),
        }
    }

    /// The default alphabet for `*` and `*+`.
    pub fn alphanumeric() -> Self {
        Self {
            chars: ALPHANUMERIC_CHARS.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`: construction rejects short alphabets.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    fn validate(chars: &[char]) -> Result<()> {
        if chars.len() < MIN_LENGTH {
            return Err(CoreError::InvalidAlphabet(format!(
                "must contain at least {} characters, got {}",
                MIN_LENGTH,
                chars.len()
            )));
        }

        let mut seen = HashSet::with_capacity(chars.len());
        if let Some(duplicate) = chars.iter().find(|c| !seen.insert(**c)) {
            return Err(CoreError::InvalidAlphabet(format!(
                "character '{}' appears more than once",
                duplicate
            )));
        }

        Ok(())
    }
}

impl FromStr for Alphabet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

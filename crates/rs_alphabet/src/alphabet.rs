use std::fmt;
use std::convert::Infallible;
use std::str::FromStr;

use log::warn;
use colored::*;

use crate::CharPool;
use crate::{DIGITS, LOWERCASE, UPPERCASE};


/// The set of characters eligible for sampling.
///
/// Letters and digits only toggle their class, so the pattern `"aZ9"`
/// selects all 62 alphanumerics. Any other character is kept as a literal
/// extra, deduplicated in order of first appearance.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Alphabet {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub extras: Vec<char>,
}

impl From<&str> for Alphabet {
    fn from(pattern: &str) -> Self {
        let mut alphabet = Alphabet::default();
        for c in pattern.chars() {
            if c.is_ascii_lowercase() {
                alphabet.lower = true;
            } else if c.is_ascii_uppercase() {
                alphabet.upper = true;
            } else if c.is_ascii_digit() {
                alphabet.digits = true;
            } else if !alphabet.extras.contains(&c) {
                alphabet.extras.push(c);
            }
        }
        alphabet
    }
}

impl FromStr for Alphabet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Alphabet::from(s))
    }
}

/// Renders the shortest pattern that derives the same alphabet.
impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.upper {
            write!(f, "A")?;
        }
        if self.lower {
            write!(f, "a")?;
        }
        if self.digits {
            write!(f, "0")?;
        }
        for c in &self.extras {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl Alphabet {
    /// True if no character at all is eligible.
    pub fn is_empty(&self) -> bool {
        !self.upper && !self.lower && !self.digits && self.extras.is_empty()
    }

    /// Number of characters in the pool this alphabet produces.
    pub fn len(&self) -> usize {
        let mut len = self.extras.len();
        if self.upper {
            len += UPPERCASE.len();
        }
        if self.lower {
            len += LOWERCASE.len();
        }
        if self.digits {
            len += DIGITS.len();
        }
        len
    }

    pub fn chars(&self) -> CharPool {
        CharPool::from(self)
    }

    /// Extras that are whitespace or control characters.
    pub fn invisible_extras(&self) -> impl Iterator<Item = char> + '_ {
        self.extras.iter().copied().filter(|c| c.is_whitespace() || c.is_control())
    }

    /// Warn about extras that are easy to pass by accident through shell quoting.
    pub fn warn_invisible_extras(&self) {
        for c in self.invisible_extras() {
            warn!("{} pattern contains {:?}, it will be part of the alphabet", "WARNING:".red(), c);
        }
    }
}

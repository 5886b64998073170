use std::fmt;
use std::ops::Deref;

use crate::Alphabet;
use crate::{DIGITS, LOWERCASE, UPPERCASE};

/// The concrete, ordered characters of an [`Alphabet`]:
/// `A-Z`, `a-z`, `0-9`, then the extras in order of first appearance.
#[derive(Clone, Hash, Debug, Default, Eq, PartialEq)]
pub struct CharPool(pub Vec<char>);

impl Deref for CharPool {
    type Target = [char];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&Alphabet> for CharPool {
    fn from(alphabet: &Alphabet) -> Self {
        let mut chars = Vec::with_capacity(alphabet.len());
        if alphabet.upper {
            chars.extend(UPPERCASE.chars());
        }
        if alphabet.lower {
            chars.extend(LOWERCASE.chars());
        }
        if alphabet.digits {
            chars.extend(DIGITS.chars());
        }
        chars.extend(&alphabet.extras);
        CharPool(chars)
    }
}

impl fmt::Display for CharPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

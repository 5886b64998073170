use std::fmt;

#[derive(Debug, Eq, PartialEq)]
pub enum GenerateError {
    InvalidAlphabet, // the character pool is empty
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidAlphabet => {
                write!(f, "Invalid alphabet: the pattern selects no characters")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

//! # rs_alphabet
//!
//! Character alphabets derived from short patterns. Every ASCII letter or
//! digit in a pattern switches on its whole class, everything else is
//! taken literally.

mod alphabet;
mod pool;

pub use alphabet::*;
pub use pool::*;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";

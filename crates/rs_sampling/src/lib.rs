//! # rs_sampling
//!
//! Uniform sampling of random strings from a character pool, with an
//! injectable source of randomness.

mod error;
mod source;
mod generator;

pub use error::*;
pub use source::*;
pub use generator::*;

//! # randstr
//!
//! Random strings from pattern-derived alphabets.
//!
//! This crate re-exports the main functionality from its submodules.

pub mod cli;

pub mod alphabet {
    pub use ::rs_alphabet::*;
}

pub mod sampling {
    pub use ::rs_sampling::*;
}

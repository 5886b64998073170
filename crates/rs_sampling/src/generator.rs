use log::debug;

use rs_alphabet::Alphabet;

use crate::GenerateError;
use crate::RandomSource;

/// Draw `length` characters uniformly, with replacement, from `pool`.
///
/// Fails with [`GenerateError::InvalidAlphabet`] if the pool is empty,
/// even for `length == 0`.
pub fn generate<R: RandomSource + ?Sized>(
    length: usize,
    pool: &[char],
    rng: &mut R,
) -> Result<String, GenerateError> {
    if pool.is_empty() {
        return Err(GenerateError::InvalidAlphabet);
    }
    debug!("Sampling {} characters from a pool of {}", length, pool.len());

    Ok((0..length)
        .map(|_| pool[rng.next_index(pool.len())])
        .collect())
}

/// Like [`generate`], building the pool from `alphabet` first.
pub fn generate_from_alphabet<R: RandomSource + ?Sized>(
    length: usize,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let pool = alphabet.chars();
    debug!("Character pool: {}", pool);
    generate(length, &pool, rng)
}

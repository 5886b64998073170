use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Anything that can pick an index uniformly at random.
pub trait RandomSource {
    /// Returns an index in `[0, bound)`. Callers guarantee `bound > 0`.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// A reproducible generator for `Some(seed)`, an OS-seeded one otherwise.
///
/// The sequence for a given seed is stable for a given build; it is not
/// guaranteed to survive an upgrade of `rand`.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            debug!("Seeding from {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => {
            debug!("Seeding from system entropy");
            StdRng::from_os_rng()
        }
    }
}

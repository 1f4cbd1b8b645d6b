use rand::Rng;

use crate::domain::classification::ports::RandomSource;

/// Thread-local RNG behind the sampling port.
#[derive(Debug, Clone, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

use rand::Rng;

/// Uniform random integer source used to pick quickselect pivots.
///
/// Implemented for every [`rand::Rng`], so callers can pass
/// `rand::thread_rng()` or a seeded generator such as `ChaCha8Rng`.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from the inclusive range `[low, high]`.
    fn random(&mut self, low: usize, high: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn random(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..=high)
    }
}

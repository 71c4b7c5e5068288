use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A reproducible random source: the same seed yields the same points.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Replays fixed `next_u64` words so `random::<f64>()` yields exact fractions:
/// `1 << 62` is 0.25 and `1 << 63` is 0.5.
#[cfg(test)]
pub(crate) struct FixedRng(pub(crate) Vec<u64>);

#[cfg(test)]
impl rand::RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0.remove(0)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst)
    }
}

// Minimal PRNG (no external crates).
//
// This is NOT cryptographically secure.
// It only has to hand the testbench a fair, reproducible bit stream.

#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // Avoid a zero state.
        let seed = if seed == 0 { 0x9E3779B97F4A7C15 } else { seed };
        Self { state: seed }
    }

    /// Draw a seed from the system clock, for runs that did not pin one.
    pub fn seed_from_clock() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x9E3779B97F4A7C15)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        // xorshift64*
        // Marsaglia / Vigna family. Simple, fast, decent for stimulus noise.
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// One fair coin flip.
    ///
    /// Takes the top bit of the scrambled output; the low bits of a plain
    /// xorshift are the weak ones.
    #[inline]
    pub fn next_bit(&mut self) -> bool {
        (self.next_u64() >> 63) != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Prng::new(7);
        let mut b = Prng::new(7);
        for _ in 0..256 {
            assert_eq!(a.next_bit(), b.next_bit());
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut zero = Prng::new(0);
        let mut sentinel = Prng::new(0x9E3779B97F4A7C15);
        for _ in 0..64 {
            assert_eq!(zero.next_bit(), sentinel.next_bit());
        }
    }

    #[test]
    fn bit_stream_is_roughly_balanced() {
        let mut rng = Prng::new(42);
        let ones = (0..10_000).filter(|_| rng.next_bit()).count();
        // Fair coin over 10k draws; +-10 sigma band.
        assert!((4500..=5500).contains(&ones), "ones = {ones}");
    }
}

//! RNG module - injectable randomness for tile spawning
//!
//! Every random decision the grid makes (where a tile lands, whether it is a 2
//! or a 4, how many tiles a turn spawns) goes through a [`RandomSource`]. The
//! default source is a small seedable LCG, so a seed replays a game exactly.

/// A source of pseudo-random numbers.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of `next_u32` (multiply-shift), which keeps small
    /// ranges usable with generators whose low bits cycle quickly.
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0, "next_range called with empty range");
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Fair coin
    fn coin_flip(&mut self) -> bool {
        self.next_range(2) == 1
    }

    /// Pick a uniformly random element, `None` if the slice is empty
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let i = self.next_range(items.len() as u32) as usize;
        items.get(i)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..40 {
            for _ in 0..50 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn test_coin_flip_is_not_alternating() {
        // The LCG's lowest bit alternates; the coin must not.
        let mut rng = SimpleRng::new(99);
        let flips: Vec<bool> = (0..64).map(|_| rng.coin_flip()).collect();
        let alternating = flips.windows(2).all(|w| w[0] != w[1]);
        assert!(!alternating);
        assert!(flips.iter().any(|&f| f));
        assert!(flips.iter().any(|&f| !f));
    }

    #[test]
    fn test_choose_covers_every_item() {
        let mut rng = SimpleRng::new(3);
        let items = [10, 20, 30, 40];
        let mut seen = [false; 4];
        for _ in 0..200 {
            let v = *rng.choose(&items).unwrap();
            seen[items.iter().position(|&x| x == v).unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));

        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}

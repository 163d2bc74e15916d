//! Seeded quote selection
//!
//! Selection uses [`SplitMix64`], a small generator whose output stream is
//! fixed by the algorithm itself. The same `(quotes, seed)` pair therefore
//! picks the same quote on every platform and across dependency upgrades,
//! which is what makes `--seed` reproducible.

use crate::core::data::Quote;
use crate::utils::error::{AppError, AppResult};
use rand::{RngCore, SeedableRng};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 (Steele, Lea and Flood) generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Builds a generator from a signed seed; the seed's bits become the state.
    pub fn from_seed_i64(seed: i64) -> Self {
        Self::seed_from_u64(seed as u64)
    }

    /// Draws an unbiased index in `[0, len)`.
    ///
    /// Lemire's multiply-shift with rejection. `len` must be non-zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let range = len as u64;
        let threshold = range.wrapping_neg() % range;
        loop {
            let m = u128::from(self.next_u64()) * u128::from(range);
            if (m as u64) >= threshold {
                return (m >> 64) as usize;
            }
        }
    }
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed),
        }
    }

    // The default implementation expands the seed through PCG32; the state
    // is used directly instead.
    fn seed_from_u64(state: u64) -> Self {
        Self { state }
    }
}

/// Picks one quote deterministically from `quotes` using `seed`.
pub fn select_random(quotes: &[Quote], seed: i64) -> AppResult<Quote> {
    if quotes.is_empty() {
        return Err(AppError::NoQuotes);
    }

    let mut rng = SplitMix64::from_seed_i64(seed);
    let index = rng.gen_index(quotes.len());
    Ok(quotes[index].clone())
}

/// Picks `count` quotes, the i-th one seeded with `base_seed + i`.
///
/// Picks are independent, so the same quote may appear more than once.
pub fn select_many(quotes: &[Quote], base_seed: i64, count: usize) -> AppResult<Vec<Quote>> {
    (0..count)
        .map(|i| select_random(quotes, base_seed.wrapping_add(i as i64)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn sample_quotes() -> Vec<Quote> {
        vec![
            Quote::new("Be the change you wish to see in the world", "Gandhi"),
            Quote::new("Code is poetry", "Unknown"),
            Quote::new("The only way to do great work is to love what you do", "Steve Jobs"),
            Quote::new("Innovation distinguishes between a leader and a follower", "Steve Jobs"),
            Quote::new("Stay hungry, stay foolish", "Steve Jobs"),
        ]
    }

    #[test]
    fn test_splitmix64_reference_stream() {
        let mut rng = SplitMix64::seed_from_u64(0);
        assert_eq!(rng.next_u64(), 0xE220_A839_7B1D_CDAF);
        assert_eq!(rng.next_u64(), 0x6E78_9E6A_A1B9_65F4);
        assert_eq!(rng.next_u64(), 0x06C4_5D18_8009_454F);

        let mut rng = SplitMix64::seed_from_u64(1_234_567);
        assert_eq!(rng.next_u64(), 6_457_827_717_110_365_317);
        assert_eq!(rng.next_u64(), 3_203_168_211_198_807_973);
        assert_eq!(rng.next_u64(), 9_817_491_932_198_370_423);
    }

    #[test]
    fn test_from_seed_matches_seed_from_u64() {
        let a = SplitMix64::from_seed(42u64.to_le_bytes());
        let b = SplitMix64::seed_from_u64(42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_negative_seed_uses_twos_complement_bits() {
        assert_eq!(SplitMix64::from_seed_i64(-1), SplitMix64::seed_from_u64(u64::MAX));
    }

    #[test]
    fn test_gen_index_stays_in_range() {
        let mut rng = SplitMix64::seed_from_u64(7);
        for len in 1..64 {
            for _ in 0..32 {
                assert!(rng.gen_index(len) < len);
            }
        }
        assert_eq!(rng.gen_index(1), 0);
    }

    #[test]
    fn test_select_random_is_deterministic() {
        let quotes = sample_quotes();
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let seed: i64 = rng.r#gen();
            let first = select_random(&quotes, seed).unwrap();
            let second = select_random(&quotes, seed).unwrap();
            assert_eq!(first, second, "seed {seed} picked differently");
            assert!(quotes.contains(&first));
        }
    }

    #[test]
    fn test_select_random_empty_fails_for_every_seed() {
        for seed in [i64::MIN, -1, 0, 1, 42, i64::MAX] {
            assert_eq!(select_random(&[], seed), Err(AppError::NoQuotes));
        }
    }

    #[test]
    fn test_select_random_single_quote() {
        let quotes = vec![Quote::new("Only", "One")];
        for seed in -5..5 {
            assert_eq!(select_random(&quotes, seed).unwrap(), quotes[0]);
        }
    }

    #[test]
    fn test_select_many_uses_consecutive_seeds() {
        let quotes = sample_quotes();
        let picks = select_many(&quotes, 99, 4).unwrap();
        assert_eq!(picks.len(), 4);
        for (i, pick) in picks.iter().enumerate() {
            assert_eq!(*pick, select_random(&quotes, 99 + i as i64).unwrap());
        }
    }

    #[test]
    fn test_select_many_wraps_at_seed_boundary() {
        let quotes = sample_quotes();
        let picks = select_many(&quotes, i64::MAX, 2).unwrap();
        assert_eq!(picks[1], select_random(&quotes, i64::MIN).unwrap());
    }

    #[test]
    fn test_select_many_varies_across_a_run() {
        let quotes = sample_quotes();
        let picks = select_many(&quotes, 2024, 50).unwrap();
        let first = &picks[0];
        assert!(picks.iter().any(|q| q != first));
    }

    #[test]
    fn test_select_many_empty_store() {
        assert_eq!(select_many(&[], 1, 3), Err(AppError::NoQuotes));
    }
}

//! Random sources for palette jitter, shuffling, and `random` palette picks.
//!
//! Everything that consumes randomness takes a [`RandomSource`], so hosts can
//! use the clock-seeded [`Xorshift64`] while tests replay fixed values through
//! [`ScriptedSource`].

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Largest value [`RandomSource::next_f64`] may return: `1 - 2^-53`.
pub const MAX_UNIT: f64 = 1.0 - f64::EPSILON / 2.0;

/// A source of uniformly distributed values.
pub trait RandomSource {
    /// Returns a uniformly distributed f64 in [0, 1).
    fn next_f64(&mut self) -> f64;

    /// Returns a uniformly distributed f64 in [min, max).
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns a uniformly distributed f64 in [min, max], both ends reachable.
    ///
    /// The unit draw is stretched so that [`MAX_UNIT`] maps onto `max`.
    fn next_range_inclusive(&mut self, min: f64, max: f64) -> f64 {
        let u = (self.next_f64() / MAX_UNIT).min(1.0);
        min * (1.0 - u) + max * u
    }

    /// Returns a uniformly distributed usize in [0, max).
    ///
    /// Returns 0 when `max` is 0.
    fn next_usize(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        ((self.next_f64() * max as f64) as usize).min(max - 1)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is replaced with
/// a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Creates a PRNG seeded from the system clock.
    ///
    /// Screensaver sessions are not meant to be reproducible; this is the
    /// default source for hosts that don't pass an explicit seed.
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(Self::FALLBACK_SEED);
        // splitmix64 finalizer so nearby timestamps give unrelated states
        let mut z = nanos.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self::new(z ^ (z >> 31))
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Uses the upper 53 bits of `next_u64()` for full mantissa precision.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Replays a fixed list of values in [0, 1), cycling when exhausted.
///
/// Values outside [0, 1) are clamped just inside the interval.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source that replays `values`. An empty list behaves like `[0.0]`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }

    /// A source that always returns the same value.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v.clamp(0.0, MAX_UNIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_range_reaches_both_ends() {
        assert_eq!(ScriptedSource::constant(0.0).next_range_inclusive(-0.12, 0.12), -0.12);
        assert_eq!(ScriptedSource::constant(1.0).next_range_inclusive(-0.12, 0.12), 0.12);
        let mid = ScriptedSource::constant(0.5).next_range_inclusive(-0.12, 0.12);
        assert!(mid.abs() < 1e-12);
    }

    #[test]
    fn scripted_source_clamps_to_max_unit() {
        let mut src = ScriptedSource::new(vec![2.0, -1.0]);
        assert_eq!(src.next_f64(), MAX_UNIT);
        assert_eq!(src.next_f64(), 0.0);
        assert!(MAX_UNIT < 1.0);
    }

    #[test]
    fn next_u64_produces_known_golden_value_for_seed_42() {
        let mut rng = Xorshift64::new(42);
        assert_eq!(rng.next_u64(), 45_454_805_674);
    }

    #[test]
    fn seed_zero_does_not_produce_all_zeros() {
        let mut rng = Xorshift64::new(0);
        assert_ne!(rng.next_u64(), 0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn two_instances_with_same_seed_produce_identical_sequences() {
        let mut a = Xorshift64::new(42);
        let mut b = Xorshift64::new(42);
        for i in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64(), "sequences diverged at index {i}");
        }
    }

    #[test]
    fn from_clock_produces_usable_state() {
        let mut rng = Xorshift64::from_clock();
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }

    #[test]
    fn next_usize_zero_max_returns_zero() {
        let mut rng = Xorshift64::new(5);
        assert_eq!(rng.next_usize(0), 0);
    }

    #[test]
    fn scripted_source_replays_and_cycles() {
        let mut src = ScriptedSource::new(vec![0.1, 0.9]);
        assert_eq!(src.next_f64(), 0.1);
        assert_eq!(src.next_f64(), 0.9);
        assert_eq!(src.next_f64(), 0.1);
        assert_eq!(src.draws(), 3);
    }

    #[test]
    fn scripted_source_clamps_one_below_unit() {
        let mut src = ScriptedSource::constant(1.0);
        let v = src.next_f64();
        assert!(v < 1.0);
        assert_eq!(src.next_usize(4), 3);
    }

    #[test]
    fn empty_scripted_source_returns_zero() {
        let mut src = ScriptedSource::new(Vec::new());
        assert_eq!(src.next_f64(), 0.0);
    }

    #[test]
    fn mut_reference_forwards_draws() {
        fn draw<R: RandomSource>(mut rng: R) -> f64 {
            rng.next_f64()
        }
        let mut src = ScriptedSource::new(vec![0.25, 0.75]);
        assert_eq!(draw(&mut src), 0.25);
        assert_eq!(src.next_f64(), 0.75);
    }

    #[test]
    fn serialization_roundtrip_preserves_state() {
        let mut rng = Xorshift64::new(42);
        for _ in 0..50 {
            rng.next_u64();
        }
        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: Xorshift64 = serde_json::from_str(&json).unwrap();
        for i in 0..100 {
            assert_eq!(rng.next_u64(), restored.next_u64(), "diverged at {i}");
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn next_f64_in_unit_interval_for_any_seed(seed: u64) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_f64();
                    prop_assert!((0.0..1.0).contains(&v), "next_f64() = {v} for seed {seed}");
                }
            }

            #[test]
            fn next_range_inclusive_in_bounds(seed: u64, half in 0.001_f64..1.0) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_range_inclusive(-half, half);
                    prop_assert!(v >= -half && v <= half, "{v} outside ±{half}");
                }
            }

            #[test]
            fn next_range_in_bounds(seed: u64, half in 0.001_f64..1.0) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    let v = rng.next_range(-half, half);
                    prop_assert!(v >= -half && v < half, "{v} outside ±{half}");
                }
            }

            #[test]
            fn next_usize_in_bounds(seed: u64, max in 1_usize..10_000) {
                let mut rng = Xorshift64::new(seed);
                for _ in 0..100 {
                    prop_assert!(rng.next_usize(max) < max);
                }
            }
        }
    }
}

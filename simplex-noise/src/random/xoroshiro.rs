//! Seedable xoroshiro128++ generator.

use super::Random;

/// Fractional part of the golden ratio, `2^64 / phi`.
const GOLDEN_RATIO_64: u64 = 0x9E37_79B9_7F4A_7C15;
/// Fractional part of `sqrt(2)`, `2^64 * (sqrt(2) - 1)`.
const SILVER_RATIO_64: u64 = 0x6A09_E667_F3BC_C909;
/// `2^-53`, the spacing of `f64` values in `[0.5, 1)` halved.
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Stafford variant 13 of the `MurmurHash3` finalizer.
const fn mix_stafford_13(mut value: u64) -> u64 {
    value = (value ^ (value >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value = (value ^ (value >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

/// A xoroshiro128++ generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro {
    lo: u64,
    hi: u64,
}

impl Xoroshiro {
    /// Creates a generator from a 64-bit seed.
    ///
    /// The seed is widened to 128 bits and both halves are mixed so that
    /// neighbouring seeds give unrelated streams.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        let lo = seed ^ SILVER_RATIO_64;
        let hi = lo.wrapping_add(GOLDEN_RATIO_64);
        Self::from_state(mix_stafford_13(lo), mix_stafford_13(hi))
    }

    /// Creates a generator from a raw 128-bit state.
    ///
    /// An all-zero state would only ever yield zeros, so it is replaced by a
    /// fixed non-zero state.
    #[must_use]
    pub const fn from_state(lo: u64, hi: u64) -> Self {
        if lo == 0 && hi == 0 {
            Self {
                lo: GOLDEN_RATIO_64,
                hi: SILVER_RATIO_64,
            }
        } else {
            Self { lo, hi }
        }
    }

    /// Returns the next 64 random bits.
    #[inline]
    pub const fn next_u64(&mut self) -> u64 {
        let s0 = self.lo;
        let mut s1 = self.hi;
        let result = s0.wrapping_add(s1).rotate_left(17).wrapping_add(s0);
        s1 ^= s0;
        self.lo = s0.rotate_left(49) ^ s1 ^ (s1 << 21);
        self.hi = s1.rotate_left(28);
        result
    }
}

impl Random for Xoroshiro {
    /// Uses the upper 53 bits, giving every representable multiple of `2^-53`
    /// in `[0, 1)` the same probability.
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * F64_UNIT
    }
}

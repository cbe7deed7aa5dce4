//! Deterministic seeded randomness keyed by context strings.
//!
//! Unlike a stream PRNG, there is no state to advance: every value is a pure
//! function of a seed string, so the same seed always yields the same value
//! regardless of evaluation order. Call sites derive fresh seeds by appending
//! context fragments (loop counters, attempt indices, coordinates) to a base
//! seed with `#` separators, e.g. `"glyph-a#anchor#0"`.
//!
//! The hash is FNV-1a 64 over the UTF-8 bytes followed by the 64-bit
//! avalanche finalizer from MurmurHash3, so single-character seed changes
//! flip the output completely. Pure integer arithmetic until the final
//! conversion, identical on all platforms.

/// FNV-1a 64-bit offset basis.
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;

/// FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Hashes a seed string to a well-mixed 64-bit value.
///
/// FNV-1a alone correlates nearby inputs (a trailing counter only stirs the
/// low bits), so the result is passed through MurmurHash3's `fmix64`
/// finalizer before use.
pub fn mix(seed: &str) -> u64 {
    let mut h = FNV_OFFSET;
    for byte in seed.bytes() {
        h ^= u64::from(byte);
        h = h.wrapping_mul(FNV_PRIME);
    }
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h
}

/// Returns a uniformly distributed f64 in [0, 1) for the given seed.
///
/// Uses the upper 53 bits of `mix(seed)` divided by 2^53 for full mantissa
/// precision.
pub fn unit(seed: &str) -> f64 {
    (mix(seed) >> 11) as f64 / (1u64 << 53) as f64
}

/// Returns a uniformly distributed f64 in [min, max) for the given seed.
pub fn range(seed: &str, min: f64, max: f64) -> f64 {
    min + unit(seed) * (max - min)
}

/// Returns a uniformly distributed index in [0, len) for the given seed.
///
/// Computed as `floor(unit(seed) * len)`; the product can round up to
/// exactly `len` at the top of the unit interval, so the result is capped
/// at `len - 1`.
///
/// # Panics
///
/// Panics if `len` is 0.
pub fn index(seed: &str, len: usize) -> usize {
    assert!(len > 0, "index() requires a non-empty range");
    ((unit(seed) * len as f64) as usize).min(len - 1)
}

//! Deterministic string hashing
//!
//! 32-bit FNV-1a over UTF-16 code units, normalized into [0, 1).
//! Iterating UTF-16 units (not UTF-8 bytes) keeps the output identical to
//! the browser implementation, which hashes `charCodeAt` values.

/// FNV-1a 32-bit offset basis
pub const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;

/// FNV-1a 32-bit prime
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Divisor mapping a `u32` into [0, 1). Dividing by 2^32 (not 2^32 - 1)
/// keeps `u32::MAX` strictly below 1.0.
const UNIT_DIVISOR: f64 = 4_294_967_296.0;

/// Raw FNV-1a accumulator for `text`.
pub fn fnv1a(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |acc, unit| {
        (acc ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Hash `text` to a stable pseudo-random value in [0, 1).
///
/// Same input always yields the same output; there is no seed, clock, or
/// process-local randomness involved.
pub fn hash_unit(text: &str) -> f64 {
    f64::from(fnv1a(text)) / UNIT_DIVISOR
}

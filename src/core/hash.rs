//! Deterministic string hash used by the offline ranking approximation
//!
//! Reproduces the classic `h = h * 31 + c` running hash over UTF-16 code units,
//! wrapping at 32 bits exactly like two's-complement integer arithmetic. Bit-for-bit
//! parity matters: a demo session started by another client for the same
//! (level, date) must land on the same secret word and the same positions.

/// Signed 32-bit running hash of `text`
///
/// # Examples
/// ```
/// use contexto::core::hash::string_hash;
///
/// assert_eq!(string_hash(""), 0);
/// assert_eq!(string_hash("abc"), 96354);
/// ```
#[must_use]
pub fn string_hash(text: &str) -> i32 {
    text.encode_utf16().fold(0_i32, |h, unit| {
        h.wrapping_mul(31).wrapping_add(i32::from(unit))
    })
}

/// Non-negative magnitude of [`string_hash`], ready for a modulo
///
/// `i32::MIN` maps to `2^31` rather than overflowing.
#[inline]
#[must_use]
pub fn hash_magnitude(text: &str) -> u32 {
    string_hash(text).unsigned_abs()
}

/// Reduce `text` into `0..modulus`
///
/// # Panics
/// Panics if `modulus` is zero.
#[inline]
#[must_use]
pub fn hash_index(text: &str, modulus: usize) -> usize {
    hash_magnitude(text) as usize % modulus
}

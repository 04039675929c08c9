//! Binary indicator encoding of a digit sequence.

use crate::config::DigitSet;

/// Map each digit through the prime-digit membership predicate, yielding a
/// 0/1 sequence of the same length.
///
/// Pure per-element mapping with no cross-element dependency: the empty set
/// yields all zeros and the full set all ones without any special-casing.
pub fn binary_indicator(digits: &[u8], primes: DigitSet) -> Vec<u8> {
    digits
        .iter()
        .map(|&digit| u8::from(primes.contains(digit)))
        .collect()
}

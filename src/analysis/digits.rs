//! π digit generation via the Chudnovsky series with binary splitting.
//!
//! Working precision is scoped to each call: the caller asks for N
//! fractional digits and the computation internally carries N plus a fixed
//! guard, so repeated runs with different N cannot interfere.

use num_bigint::BigInt;
use num_traits::One;
use thiserror::Error;

/// Guard digits carried past the requested count so integer truncation in
/// the square root and the final division cannot corrupt the last requested
/// digit.
const GUARD_DIGITS: usize = 10;

/// Decimal digits contributed by each series term, log10((640320/12)^3).
const DIGITS_PER_TERM: f64 = 14.181647462725477;

/// Largest digit count the scaled-integer exponents can represent.
const MAX_DIGITS: usize = 1_000_000_000;

const A: u64 = 13_591_409;
const B: u64 = 545_140_134;
/// 640320^3 / 24.
const C3_OVER_24: u64 = 10_939_058_860_032_000;

/// Errors from the digit source.
#[derive(Debug, Error)]
pub enum DigitsError {
    /// The requested count exceeds what the generator can represent.
    #[error("Requested {requested} digits exceeds the supported maximum of {limit}")]
    Unsupported {
        /// Digits asked for.
        requested: usize,
        /// Hard ceiling of the generator.
        limit: usize,
    },
    /// The assembled expansion carried fewer fractional digits than requested.
    #[error("π expansion produced {produced} fractional digits, {requested} requested")]
    Insufficient {
        /// Digits asked for.
        requested: usize,
        /// Digits actually produced.
        produced: usize,
    },
}

/// Return the first `count` decimal digits of π after the decimal point.
///
/// Deterministic for a fixed `count`: the same call always yields the same
/// bytes. Cost grows super-linearly with `count`; counts in the millions
/// take minutes and allocate hundreds of megabytes, so tests and benches
/// stay in the hundreds or low thousands.
pub fn pi_fractional_digits(count: usize) -> Result<Vec<u8>, DigitsError> {
    if count > MAX_DIGITS {
        return Err(DigitsError::Unsupported {
            requested: count,
            limit: MAX_DIGITS,
        });
    }
    let text = pi_scaled(count + GUARD_DIGITS).to_string();
    // Layout is the leading "3" followed by the fractional expansion.
    if text.len() < count + 1 {
        return Err(DigitsError::Insufficient {
            requested: count,
            produced: text.len().saturating_sub(1),
        });
    }
    Ok(text.as_bytes()[1..=count].iter().map(|b| b - b'0').collect())
}

/// floor(π · 10^precision) assembled from the binary-split series:
/// π = 426880 · √10005 · Q / T.
fn pi_scaled(precision: usize) -> BigInt {
    let (_, q, t) = split(0, term_count(precision));
    let root = sqrt_scaled(10_005, precision);
    BigInt::from(426_880u32) * root * q / t
}

/// Series terms needed to cover `precision` decimal digits.
fn term_count(precision: usize) -> u64 {
    (precision as f64 / DIGITS_PER_TERM).ceil() as u64 + 1
}

/// floor(√n · 10^digits), via an integer square root at doubled scale.
fn sqrt_scaled(n: u32, digits: usize) -> BigInt {
    let scaled = BigInt::from(n) * BigInt::from(10u32).pow(2 * digits as u32);
    scaled.sqrt()
}

/// Binary splitting of the Chudnovsky series over the term range [a, b).
fn split(a: u64, b: u64) -> (BigInt, BigInt, BigInt) {
    if b - a == 1 {
        return term(a);
    }
    let mid = a + (b - a) / 2;
    let (p_left, q_left, t_left) = split(a, mid);
    let (p_right, q_right, t_right) = split(mid, b);
    let p = &p_left * &p_right;
    let q = &q_left * &q_right;
    let t = t_left * &q_right + p_left * t_right;
    (p, q, t)
}

/// P, Q, T contributions of the single term `k`.
fn term(k: u64) -> (BigInt, BigInt, BigInt) {
    if k == 0 {
        return (BigInt::one(), BigInt::one(), BigInt::from(A));
    }
    let p = BigInt::from(6 * k - 5) * BigInt::from(2 * k - 1) * BigInt::from(6 * k - 1);
    let q = BigInt::from(k).pow(3) * BigInt::from(C3_OVER_24);
    let mut t = &p * BigInt::from(A + B * k);
    if k % 2 == 1 {
        t = -t;
    }
    (p, q, t)
}

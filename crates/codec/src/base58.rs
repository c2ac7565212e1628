use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Errors that can occur when decoding rippled base58 text.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("character {0:?} is not part of the rippled base58 alphabet")]
    InvalidCharacter(char),
}

/// The base58 alphabet used by rippled.
///
/// This is a permutation of the conventional Bitcoin alphabet and must be
/// reproduced exactly: a single transposed character yields identifiers that
/// look plausible but belong to nobody.
pub const RIPPLED_ALPHABET: &[u8; 58] =
    b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz";

/// Encode a non-negative integer using the rippled base58 alphabet.
///
/// Digits are produced by repeated division by 58, least significant first,
/// and the output is assembled most significant digit first. Zero encodes as
/// the empty string; the scheme defines no padding character for leading zero
/// bytes because every framed payload starts with a nonzero type prefix.
pub fn encode(value: &BigUint) -> String {
    let base = BigUint::from(58u8);
    let mut value = value.clone();
    let mut digits = Vec::new();

    while !value.is_zero() {
        let remainder = &value % &base;
        value /= &base;
        // remainder is always below 58 and fits a u32
        let idx = remainder.to_u32().unwrap_or(0) as usize;
        digits.push(RIPPLED_ALPHABET[idx]);
    }

    digits.iter().rev().map(|&b| char::from(b)).collect()
}

/// Decode rippled base58 text back into its integer value.
///
/// The empty string decodes to zero, mirroring [`encode`].
pub fn decode(text: &str) -> Result<BigUint, CodecError> {
    let base = BigUint::from(58u8);
    let mut value = BigUint::zero();

    for b in text.bytes() {
        let idx = RIPPLED_ALPHABET
            .iter()
            .position(|&a| a == b)
            .ok_or(CodecError::InvalidCharacter(char::from(b)))?;
        value = value * &base + BigUint::from(idx);
    }

    Ok(value)
}

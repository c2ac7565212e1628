use crate::errors::{KeyError, Result};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use unl_codec::{base58, checksum};

/// Token type prefix identifying a validation public key, as hex text.
///
/// Prefixing the raw key with byte `0x1C` before checksumming is what makes
/// the encoded identifier start with `n`.
pub const VALIDATION_PREFIX: &str = "1C";

/// One validator entry as published in a UNL blob.
///
/// The per-validator `manifest` is carried through untouched; verifying it is
/// the publisher's signature chain and out of scope here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorRecord {
    pub validation_public_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
}

/// Derive the base58-encoded validation key for one raw public key.
///
/// The raw key must be non-empty, even-length hexadecimal; no byte length
/// beyond that is assumed. The encodable payload is
/// `0x1C || key bytes || checksum`, interpreted as a big-endian integer.
pub fn derive(raw_key_hex: &str) -> Result<String> {
    if raw_key_hex.is_empty() {
        return Err(KeyError::EmptyKey);
    }

    let payload_hex = format!("{VALIDATION_PREFIX}{raw_key_hex}");
    let payload = hex::decode(&payload_hex)?;

    let check = checksum(&payload);
    let mut framed = payload;
    framed.extend_from_slice(&check);

    Ok(base58::encode(&BigUint::from_bytes_be(&framed)))
}

/// Derive encoded keys for every record, in input order.
///
/// An empty record list is an error, not an empty success: a UNL with no
/// validators is a malformed document from the caller's point of view. The
/// first malformed key aborts the whole batch.
pub fn derive_all(records: &[ValidatorRecord]) -> Result<Vec<String>> {
    if records.is_empty() {
        return Err(KeyError::EmptyList);
    }

    records
        .iter()
        .map(|record| derive(&record.validation_public_key))
        .collect()
}

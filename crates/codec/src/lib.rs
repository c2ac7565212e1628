//! Text encoding primitives for XRP Ledger identifiers.
//!
//! Provides the rippled base58 alphabet encoder and the double-SHA256
//! checksum used when framing account and validation keys.

pub mod base58;
pub mod checksum;

pub use base58::*;
pub use checksum::*;

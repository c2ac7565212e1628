//! Validation key derivation for XRP Ledger UNL documents.
//!
//! Turns the raw hex public keys published in a UNL blob into the
//! checksummed, base58-encoded identifiers (`nHB...`) that ledger tooling
//! recognizes, and normalizes ripple-epoch timestamps to Unix time.

pub mod derive;
pub mod epoch;
pub mod errors;

pub use derive::*;
pub use epoch::*;
pub use errors::*;

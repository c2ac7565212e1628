//! Retrieval and decoding of published XRP Ledger UNL documents.
//!
//! A UNL (unique node list) is served as a JSON envelope whose `blob` field
//! is a base64-encoded JSON document listing validator records. This crate
//! fetches the envelope, unwraps the blob, and assembles the status report
//! consumed by downstream tooling. Verifying the envelope's signature chain
//! is deliberately out of scope; the document's authenticity is established
//! elsewhere.

pub mod client;
pub mod envelope;
pub mod errors;
pub mod report;

pub use client::*;
pub use envelope::*;
pub use errors::*;
pub use report::*;

use crate::client::{UnlClient, UnlFetch};
use crate::errors::ManifestError;
use serde::{Serialize, Serializer};

/// Outcome of one retrieval, in the report's wire vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReportStatus {
    Success,
    Error,
}

/// Status report produced for every retrieval attempt.
///
/// The serialized shape is a fixed contract consumed by existing tooling:
/// `error` is `false` or a message string, and `http_code` / `expiration`
/// are the empty string until known. Field order matters to diff-based
/// consumers, so the struct declares fields in wire order.
#[derive(Debug, Clone, Serialize)]
pub struct UnlReport {
    pub status: ReportStatus,
    #[serde(serialize_with = "message_or_false")]
    pub error: Option<String>,
    #[serde(serialize_with = "value_or_empty")]
    pub http_code: Option<u16>,
    pub public_validation_keys: Vec<String>,
    #[serde(serialize_with = "value_or_empty")]
    pub expiration: Option<i64>,
}

fn message_or_false<S: Serializer>(value: &Option<String>, ser: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(message) => ser.serialize_str(message),
        None => ser.serialize_bool(false),
    }
}

fn value_or_empty<S: Serializer, T: Serialize>(
    value: &Option<T>,
    ser: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(inner) => inner.serialize(ser),
        None => ser.serialize_str(""),
    }
}

impl UnlReport {
    fn pending() -> Self {
        Self {
            status: ReportStatus::Error,
            error: None,
            http_code: None,
            public_validation_keys: Vec::new(),
            expiration: None,
        }
    }

    fn failed(mut self, message: impl Into<String>) -> Self {
        self.status = ReportStatus::Error;
        self.error = Some(message.into());
        self
    }

    /// Fetch, decode, and derive in one pass, folding every failure into an
    /// error report. A report is always produced; only serializing it can
    /// fail further up.
    pub async fn collect(client: &UnlClient) -> UnlReport {
        match client.fetch().await {
            Ok(fetch) => UnlReport::from_fetch(&fetch),
            Err(err) => {
                let mut report = UnlReport::pending();
                if let ManifestError::Http { code } = err {
                    report.http_code = Some(code);
                }
                tracing::warn!(url = %client.url(), error = %err, "UNL fetch failed");
                report.failed(format!("Invalid URL: {}.", client.url()))
            }
        }
    }

    /// Assemble a report from an already fetched document body.
    pub fn from_fetch(fetch: &UnlFetch) -> UnlReport {
        let mut report = UnlReport::pending();
        report.http_code = Some(fetch.http_code);

        let blob = match fetch.envelope().and_then(|envelope| envelope.decode_blob()) {
            Ok(blob) => blob,
            Err(err) => {
                tracing::warn!(error = %err, "UNL blob could not be decoded");
                return report.failed("Invalid or malformed manifest.");
            }
        };
        report.expiration = Some(blob.expiration_unix());

        match blob.validator_keys() {
            Ok(keys) => {
                report.public_validation_keys = keys;
                report.status = ReportStatus::Success;
                report
            }
            Err(ManifestError::EmptyValidatorList) => {
                report.failed("List of validator keys was empty.")
            }
            Err(err) => {
                tracing::warn!(error = %err, "validator record rejected");
                report.failed("Invalid or malformed manifest.")
            }
        }
    }
}

use crate::errors::{ManifestError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use unl_keys::{derive_all, ripple_to_unix, KeyError, ValidatorRecord};

/// Outer JSON container of a published UNL.
///
/// The signature fields are carried through for callers that want them but
/// are never verified here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlEnvelope {
    pub blob: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
}

/// Decoded payload of the `blob` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlBlob {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u64>,
    pub expiration: i64,
    pub validators: Vec<ValidatorRecord>,
}

impl UnlEnvelope {
    /// Base64-decode the blob and parse the validator list inside it.
    pub fn decode_blob(&self) -> Result<UnlBlob> {
        let raw = STANDARD.decode(&self.blob)?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

impl UnlBlob {
    /// Encoded validation keys for every record, in publication order.
    pub fn validator_keys(&self) -> Result<Vec<String>> {
        derive_all(&self.validators).map_err(|err| match err {
            KeyError::EmptyList => ManifestError::EmptyValidatorList,
            other => ManifestError::Key(other),
        })
    }

    /// Document expiration as Unix-epoch seconds.
    pub fn expiration_unix(&self) -> i64 {
        ripple_to_unix(self.expiration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // {"sequence":7,"expiration":741398400,"validators":[
    //   {"validation_public_key":"ED2677...4734","manifest":"JAAAAAF"},
    //   {"validation_public_key":"ED00...00"}]}
    const BLOB_FIXTURE: &str = "eyJzZXF1ZW5jZSI6NywiZXhwaXJhdGlvbiI6NzQxMzk4NDAwLCJ2YWxpZGF0b3JzIjpbeyJ2YWxpZGF0aW9uX3B1YmxpY19rZXkiOiJFRDI2NzdBQkZGRDFCMzNBQzZGQkMzMDYyQjcxRjFFODM5N0MxNTA1RTFDNDJDNjREMTFBRDFCMjhGRjczRjQ3MzQiLCJtYW5pZmVzdCI6IkpBQUFBQUYifSx7InZhbGlkYXRpb25fcHVibGljX2tleSI6IkVEMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMDAwMCJ9XX0=";

    // {"sequence":1,"expiration":0,"validators":[]}
    const EMPTY_BLOB_FIXTURE: &str =
        "eyJzZXF1ZW5jZSI6MSwiZXhwaXJhdGlvbiI6MCwidmFsaWRhdG9ycyI6W119";

    fn envelope(blob: &str) -> UnlEnvelope {
        UnlEnvelope {
            blob: blob.to_string(),
            manifest: None,
            signature: None,
            public_key: None,
            version: Some(1),
        }
    }

    #[test]
    fn decodes_blob_fixture() {
        let blob = envelope(BLOB_FIXTURE).decode_blob().expect("blob should decode");
        assert_eq!(blob.sequence, Some(7));
        assert_eq!(blob.expiration, 741_398_400);
        assert_eq!(blob.validators.len(), 2);
        assert_eq!(blob.validators[1].manifest, None);
    }

    #[test]
    fn derives_keys_from_blob_fixture() {
        let blob = envelope(BLOB_FIXTURE).decode_blob().expect("blob should decode");
        let keys = blob.validator_keys().expect("keys should derive");
        assert_eq!(
            keys,
            vec![
                "nHBe4vqSAzjpPRLKwSFzRFtmvzXaf5wPPmuVrQCAoJoS1zskgDA4".to_string(),
                "nHBMSLsZ7GV3xSoNdySfavejWUCDZ8VnnivSBYUgUzQWoDxd9B7J".to_string(),
            ]
        );
    }

    #[test]
    fn normalizes_expiration_to_unix() {
        let blob = envelope(BLOB_FIXTURE).decode_blob().expect("blob should decode");
        assert_eq!(blob.expiration_unix(), 1_688_083_200);
    }

    #[test]
    fn empty_validator_list_is_an_error() {
        let blob = envelope(EMPTY_BLOB_FIXTURE)
            .decode_blob()
            .expect("blob should decode");
        let err = blob.validator_keys().unwrap_err();
        assert!(matches!(err, ManifestError::EmptyValidatorList));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = envelope("@@not-base64@@").decode_blob().unwrap_err();
        assert!(matches!(err, ManifestError::Base64(_)));
    }

    #[test]
    fn rejects_non_json_blob() {
        // "not json" in base64
        let err = envelope("bm90IGpzb24=").decode_blob().unwrap_err();
        assert!(matches!(err, ManifestError::Json(_)));
    }
}

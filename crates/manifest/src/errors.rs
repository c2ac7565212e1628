use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server answered with status {code}")]
    Http { code: u16 },

    #[error("blob is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("list of validator keys is empty")]
    EmptyValidatorList,

    #[error("validator record rejected: {0}")]
    Key(unl_keys::KeyError),
}

pub type Result<T> = std::result::Result<T, ManifestError>;

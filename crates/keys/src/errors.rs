use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyError {
    #[error("validation public key is not valid hexadecimal: {0}")]
    MalformedKey(#[from] hex::FromHexError),

    #[error("validation public key is empty")]
    EmptyKey,

    #[error("list of validator records is empty")]
    EmptyList,
}

pub type Result<T> = std::result::Result<T, KeyError>;

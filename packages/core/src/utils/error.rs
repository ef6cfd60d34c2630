// Типы ошибок

use crate::error::CryptoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SealedHttpError {
    /// The structured value could not be turned into a JSON body.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Text presented for base64url decoding was malformed.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// No writable buffer could be provided for the message body.
    #[error("Stream error: {0}")]
    Stream(String),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Missing header: {0}")]
    MissingHeader(&'static str),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SealedHttpError {
    fn from(error: serde_json::Error) -> Self {
        SealedHttpError::Serialization(error.to_string())
    }
}

impl From<http::Error> for SealedHttpError {
    fn from(error: http::Error) -> Self {
        SealedHttpError::InvalidMessage(error.to_string())
    }
}

impl From<http::header::InvalidHeaderValue> for SealedHttpError {
    fn from(error: http::header::InvalidHeaderValue) -> Self {
        SealedHttpError::InvalidHeaderValue(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SealedHttpError>;

// sealed-http
// HTTP messages with authenticated, encrypted, sealed or signed bodies

#![warn(clippy::all)]
#![allow(clippy::too_many_arguments)]

// Модули
pub mod api;
pub mod config;
pub mod crypto;
pub mod error;
pub mod protocol;
pub mod utils;

// Re-exports для удобства
pub use api::{Adapter, ConvenienceAdapter, HttpAdapter, Verifier};
pub use config::Config;
pub use crypto::keys::{
    SealingPublicKey, SealingSecretKey, SharedAuthenticationKey, SharedEncryptionKey,
    SigningPublicKey, SigningSecretKey,
};
pub use protocol::headers::{HEADER_AUTH_NAME, HEADER_SIGNATURE_NAME};
pub use protocol::{MergePolicy, MessageBody, SecurityMode, Transform};
pub use utils::error::{Result, SealedHttpError};

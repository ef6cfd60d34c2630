use thiserror::Error;

/// Failures raised by a [`CryptoProvider`](crate::crypto::CryptoProvider).
///
/// These are relayed to callers unchanged; the protocol layer never
/// reinterprets or swallows them.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Signature verification failed: {0}")]
    SignatureVerificationError(String),
    #[error("MAC computation failed: {0}")]
    MacError(String),
    #[error("MAC verification failed")]
    MacVerificationError,
    #[error("KEM encapsulation failed: {0}")]
    KemEncapsulationError(String),
    #[error("KEM decapsulation failed: {0}")]
    KemDecapsulationError(String),
    #[error("AEAD encryption failed: {0}")]
    AeadEncryptionError(String),
    #[error("AEAD decryption failed: {0}")]
    AeadDecryptionError(String),
    #[error("Key derivation failed: {0}")]
    KeyDerivationError(String),
    #[error("Invalid input: {0}")]
    InvalidInputError(String),
}

//! Defines the CryptoProvider trait the message protocol is built on.

use crate::crypto::keys::{
    SealingPublicKey, SealingSecretKey, SharedAuthenticationKey, SharedEncryptionKey,
    SigningPublicKey, SigningSecretKey,
};
use crate::error::CryptoError;

/// Trait that formalizes the four primitives (plus their inverses) a
/// protected HTTP message needs.
///
/// Every function is pure apart from randomness: implementations hold no
/// state and may be called concurrently.
pub trait CryptoProvider: Send + Sync + 'static {
    /// Computes a keyed MAC over `message`.
    fn mac(message: &[u8], key: &SharedAuthenticationKey) -> Result<Vec<u8>, CryptoError>;

    /// Checks a tag produced by [`CryptoProvider::mac`] in constant time.
    fn verify_mac(
        message: &[u8],
        tag: &[u8],
        key: &SharedAuthenticationKey,
    ) -> Result<(), CryptoError>;

    /// Authenticated symmetric encryption. The output carries everything
    /// (nonce included) needed by [`CryptoProvider::auth_decrypt`].
    fn auth_encrypt(plaintext: &[u8], key: &SharedEncryptionKey) -> Result<Vec<u8>, CryptoError>;

    fn auth_decrypt(ciphertext: &[u8], key: &SharedEncryptionKey) -> Result<Vec<u8>, CryptoError>;

    /// Anonymous-sender encryption to `recipient`. Each call encapsulates a
    /// fresh ephemeral key, so identical inputs give different outputs.
    fn seal(plaintext: &[u8], recipient: &SealingPublicKey) -> Result<Vec<u8>, CryptoError>;

    fn unseal(ciphertext: &[u8], key: &SealingSecretKey) -> Result<Vec<u8>, CryptoError>;

    /// Produces a detached signature over `message`.
    fn sign_detached(message: &[u8], key: &SigningSecretKey) -> Result<Vec<u8>, CryptoError>;

    fn verify_detached(
        message: &[u8],
        signature: &[u8],
        key: &SigningPublicKey,
    ) -> Result<(), CryptoError>;
}

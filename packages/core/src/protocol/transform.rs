//! The four security transforms.
//!
//! | Mode          | Body                         | Header written            |
//! |---------------|------------------------------|---------------------------|
//! | Authenticate  | unchanged                    | `Body-HMAC-SHA512256`     |
//! | EncryptShared | base64url AEAD ciphertext    | none                      |
//! | SealPublic    | base64url sealed ciphertext  | none                      |
//! | Sign          | unchanged                    | `Body-Signature-Ed25519`  |

use crate::crypto::keys::{
    SealingPublicKey, SharedAuthenticationKey, SharedEncryptionKey, SigningSecretKey,
};
use crate::crypto::CryptoProvider;
use crate::protocol::headers::{merge_header, MergePolicy, AUTH_HEADER, SIGNATURE_HEADER};
use crate::utils::b64;
use crate::utils::error::Result;
use http::header::{HeaderMap, HeaderName, HeaderValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityMode {
    Authenticate,
    EncryptShared,
    SealPublic,
    Sign,
}

impl SecurityMode {
    pub const ALL: [SecurityMode; 4] = [
        SecurityMode::Authenticate,
        SecurityMode::EncryptShared,
        SecurityMode::SealPublic,
        SecurityMode::Sign,
    ];

    /// The proof header this mode writes, if any.
    pub fn header_name(self) -> Option<HeaderName> {
        match self {
            SecurityMode::Authenticate => Some(AUTH_HEADER),
            SecurityMode::Sign => Some(SIGNATURE_HEADER),
            SecurityMode::EncryptShared | SecurityMode::SealPublic => None,
        }
    }

    pub fn replaces_body(self) -> bool {
        self.header_name().is_none()
    }
}

/// A selected mode together with the one key kind it accepts.
#[derive(Debug, Clone, Copy)]
pub enum Transform<'k> {
    Authenticate(&'k SharedAuthenticationKey),
    EncryptShared(&'k SharedEncryptionKey),
    SealPublic(&'k SealingPublicKey),
    Sign(&'k SigningSecretKey),
}

/// What a transform produced: a header to attach next to the untouched
/// body, or a replacement body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutput {
    Header { name: HeaderName, value: String },
    Body(String),
}

impl Transform<'_> {
    pub fn mode(&self) -> SecurityMode {
        match self {
            Transform::Authenticate(_) => SecurityMode::Authenticate,
            Transform::EncryptShared(_) => SecurityMode::EncryptShared,
            Transform::SealPublic(_) => SecurityMode::SealPublic,
            Transform::Sign(_) => SecurityMode::Sign,
        }
    }

    /// Runs the provider primitive over `body` and encodes the artifact.
    pub fn apply<P: CryptoProvider>(&self, body: &[u8]) -> Result<TransformOutput> {
        let output = match *self {
            Transform::Authenticate(key) => TransformOutput::Header {
                name: AUTH_HEADER,
                value: b64::encode(&P::mac(body, key)?),
            },
            Transform::EncryptShared(key) => {
                TransformOutput::Body(b64::encode(&P::auth_encrypt(body, key)?))
            }
            Transform::SealPublic(key) => TransformOutput::Body(b64::encode(&P::seal(body, key)?)),
            Transform::Sign(key) => TransformOutput::Header {
                name: SIGNATURE_HEADER,
                value: b64::encode(&P::sign_detached(body, key)?),
            },
        };
        tracing::debug!(mode = ?self.mode(), body_len = body.len(), "applied transform");
        Ok(output)
    }

    /// Applies the transform and folds its output into `headers`, returning
    /// the body that goes on the wire.
    pub fn protect<P: CryptoProvider>(
        &self,
        body: &[u8],
        headers: &mut HeaderMap,
        policy: MergePolicy,
    ) -> Result<Vec<u8>> {
        self.apply::<P>(body)?.fold_into(body, headers, policy)
    }
}

impl TransformOutput {
    pub fn fold_into(
        self,
        body: &[u8],
        headers: &mut HeaderMap,
        policy: MergePolicy,
    ) -> Result<Vec<u8>> {
        match self {
            TransformOutput::Header { name, value } => {
                merge_header(headers, name, HeaderValue::from_str(&value)?, policy);
                Ok(body.to_vec())
            }
            TransformOutput::Body(encoded) => Ok(encoded.into_bytes()),
        }
    }
}

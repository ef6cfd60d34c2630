//! Receiving side: the inverse of every [`Adapter`](crate::api::Adapter) mode.
//!
//! Header-based proofs may carry several values (stacked proofs); a message
//! verifies if *any* value checks out under the given key.

use crate::crypto::keys::{
    SealingSecretKey, SharedAuthenticationKey, SharedEncryptionKey, SigningPublicKey,
};
use crate::crypto::suites::classic::ClassicSuiteProvider;
use crate::crypto::CryptoProvider;
use crate::protocol::headers::{
    AUTH_HEADER, HEADER_AUTH_NAME, HEADER_SIGNATURE_NAME, SIGNATURE_HEADER,
};
use crate::utils::b64;
use crate::utils::error::{Result, SealedHttpError};
use http::header::{HeaderMap, HeaderName};
use http::{Request, Response};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy, Default)]
pub struct Verifier<P: CryptoProvider = ClassicSuiteProvider> {
    _provider: PhantomData<P>,
}

impl<P: CryptoProvider> Verifier<P> {
    pub fn new() -> Self {
        Self {
            _provider: PhantomData,
        }
    }

    /// Checks the `Body-HMAC-SHA512256` header and returns the body.
    pub fn verify_symmetric_authenticated_request<B: AsRef<[u8]>>(
        &self,
        request: &Request<B>,
        key: &SharedAuthenticationKey,
    ) -> Result<Vec<u8>> {
        verify_authenticated::<P>(request.headers(), request.body().as_ref(), key)
    }

    pub fn verify_symmetric_authenticated_response<B: AsRef<[u8]>>(
        &self,
        response: &Response<B>,
        key: &SharedAuthenticationKey,
    ) -> Result<Vec<u8>> {
        verify_authenticated::<P>(response.headers(), response.body().as_ref(), key)
    }

    /// Decodes and decrypts a body produced by symmetric encryption.
    pub fn decrypt_symmetric_request<B: AsRef<[u8]>>(
        &self,
        request: &Request<B>,
        key: &SharedEncryptionKey,
    ) -> Result<Vec<u8>> {
        let ciphertext = decode_body(request.body().as_ref())?;
        Ok(P::auth_decrypt(&ciphertext, key)?)
    }

    pub fn decrypt_symmetric_response<B: AsRef<[u8]>>(
        &self,
        response: &Response<B>,
        key: &SharedEncryptionKey,
    ) -> Result<Vec<u8>> {
        let ciphertext = decode_body(response.body().as_ref())?;
        Ok(P::auth_decrypt(&ciphertext, key)?)
    }

    pub fn unseal_request<B: AsRef<[u8]>>(
        &self,
        request: &Request<B>,
        key: &SealingSecretKey,
    ) -> Result<Vec<u8>> {
        let ciphertext = decode_body(request.body().as_ref())?;
        Ok(P::unseal(&ciphertext, key)?)
    }

    pub fn unseal_response<B: AsRef<[u8]>>(
        &self,
        response: &Response<B>,
        key: &SealingSecretKey,
    ) -> Result<Vec<u8>> {
        let ciphertext = decode_body(response.body().as_ref())?;
        Ok(P::unseal(&ciphertext, key)?)
    }

    /// Checks the `Body-Signature-Ed25519` header and returns the body.
    pub fn verify_signed_request<B: AsRef<[u8]>>(
        &self,
        request: &Request<B>,
        key: &SigningPublicKey,
    ) -> Result<Vec<u8>> {
        verify_signed::<P>(request.headers(), request.body().as_ref(), key)
    }

    pub fn verify_signed_response<B: AsRef<[u8]>>(
        &self,
        response: &Response<B>,
        key: &SigningPublicKey,
    ) -> Result<Vec<u8>> {
        verify_signed::<P>(response.headers(), response.body().as_ref(), key)
    }
}

/// Parses a verified or decrypted body as JSON.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body)
        .map_err(|e| SealedHttpError::Serialization(format!("Cannot JSON-decode this message: {}", e)))
}

fn verify_authenticated<P: CryptoProvider>(
    headers: &HeaderMap,
    body: &[u8],
    key: &SharedAuthenticationKey,
) -> Result<Vec<u8>> {
    let tags = proof_values(headers, &AUTH_HEADER, HEADER_AUTH_NAME)?;
    if tags.iter().any(|tag| P::verify_mac(body, tag, key).is_ok()) {
        return Ok(body.to_vec());
    }
    tracing::warn!(candidates = tags.len(), "no valid authentication tag");
    Err(SealedHttpError::InvalidMessage(
        "No valid authentication tag for this body".to_string(),
    ))
}

fn verify_signed<P: CryptoProvider>(
    headers: &HeaderMap,
    body: &[u8],
    key: &SigningPublicKey,
) -> Result<Vec<u8>> {
    let signatures = proof_values(headers, &SIGNATURE_HEADER, HEADER_SIGNATURE_NAME)?;
    if signatures
        .iter()
        .any(|signature| P::verify_detached(body, signature, key).is_ok())
    {
        return Ok(body.to_vec());
    }
    tracing::warn!(candidates = signatures.len(), "no valid signature");
    Err(SealedHttpError::InvalidMessage(
        "No valid signature for this body".to_string(),
    ))
}

/// Decoded values of a proof header. Values that are not valid base64url
/// are skipped; they can never verify.
fn proof_values(
    headers: &HeaderMap,
    name: &HeaderName,
    display_name: &'static str,
) -> Result<Vec<Vec<u8>>> {
    let mut values = headers.get_all(name).iter().peekable();
    if values.peek().is_none() {
        return Err(SealedHttpError::MissingHeader(display_name));
    }
    Ok(values
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| match b64::decode(value) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::trace!(header = display_name, error = %e, "skipping undecodable proof");
                None
            }
        })
        .collect())
}

fn decode_body(body: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(body)
        .map_err(|e| SealedHttpError::Encoding(format!("Encrypted body is not text: {}", e)))?;
    b64::decode(text)
}

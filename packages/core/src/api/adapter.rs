use crate::config::Config;
use crate::crypto::keys::{
    SealingPublicKey, SharedAuthenticationKey, SharedEncryptionKey, SigningSecretKey,
};
use crate::crypto::suites::classic::ClassicSuiteProvider;
use crate::crypto::CryptoProvider;
use crate::protocol::builder::{build_request, build_response};
use crate::protocol::stream::MessageBody;
use crate::protocol::transform::Transform;
use crate::utils::error::Result;
use crate::utils::serialization::{ensure_content_type, to_json_body};
use http::{HeaderMap, Request, Response};
use serde::Serialize;
use std::marker::PhantomData;

/// Builds protected messages from a raw body.
///
/// Request builders take `(method, uri, body, key, headers)`; response
/// builders take `(status, body, key, headers, version)`. `headers` is moved
/// in and used as scratch space, so a failure never leaves the caller with a
/// half-updated header set.
pub trait Adapter {
    /// Authenticates the body with a pre-shared key. The tag goes into the
    /// `Body-HMAC-SHA512256` header; the body stays plaintext.
    fn create_symmetric_authenticated_request(
        &self,
        method: &str,
        uri: &str,
        body: &[u8],
        key: &SharedAuthenticationKey,
        headers: HeaderMap,
    ) -> Result<Request<MessageBody>>;

    fn create_symmetric_authenticated_response(
        &self,
        status: u16,
        body: &[u8],
        key: &SharedAuthenticationKey,
        headers: HeaderMap,
        version: Option<&str>,
    ) -> Result<Response<MessageBody>>;

    /// Replaces the body with its base64url AEAD ciphertext under a
    /// pre-shared key.
    fn create_symmetric_encrypted_request(
        &self,
        method: &str,
        uri: &str,
        body: &[u8],
        key: &SharedEncryptionKey,
        headers: HeaderMap,
    ) -> Result<Request<MessageBody>>;

    fn create_symmetric_encrypted_response(
        &self,
        status: u16,
        body: &[u8],
        key: &SharedEncryptionKey,
        headers: HeaderMap,
        version: Option<&str>,
    ) -> Result<Response<MessageBody>>;

    /// Replaces the body with ciphertext only the holder of the secret half
    /// of `key` can open (the server's key for requests, the client's for
    /// responses).
    fn create_sealed_request(
        &self,
        method: &str,
        uri: &str,
        body: &[u8],
        key: &SealingPublicKey,
        headers: HeaderMap,
    ) -> Result<Request<MessageBody>>;

    fn create_sealed_response(
        &self,
        status: u16,
        body: &[u8],
        key: &SealingPublicKey,
        headers: HeaderMap,
        version: Option<&str>,
    ) -> Result<Response<MessageBody>>;

    /// Ed25519-signs the body. The signature goes into the
    /// `Body-Signature-Ed25519` header; the body stays plaintext.
    fn create_signed_request(
        &self,
        method: &str,
        uri: &str,
        body: &[u8],
        key: &SigningSecretKey,
        headers: HeaderMap,
    ) -> Result<Request<MessageBody>>;

    fn create_signed_response(
        &self,
        status: u16,
        body: &[u8],
        key: &SigningSecretKey,
        headers: HeaderMap,
        version: Option<&str>,
    ) -> Result<Response<MessageBody>>;

    /// Adapter-specific way of turning bytes into a rewound body stream.
    fn string_to_stream(&self, input: &[u8]) -> Result<MessageBody> {
        MessageBody::from_bytes(input)
    }
}

/// JSON variants of every [`Adapter`] builder.
///
/// Each one serializes the value, defaults `Content-Type`, then delegates to
/// the body builder, so the two layers cannot drift apart. Serialization
/// errors surface before any cryptography runs.
pub trait ConvenienceAdapter: Adapter {
    /// Serializes `value` and defaults `Content-Type` in `headers`.
    fn json_body<T: Serialize + ?Sized>(&self, value: &T, headers: &mut HeaderMap)
        -> Result<Vec<u8>>;

    fn create_symmetric_authenticated_json_request<T: Serialize + ?Sized>(
        &self,
        method: &str,
        uri: &str,
        value: &T,
        key: &SharedAuthenticationKey,
        mut headers: HeaderMap,
    ) -> Result<Request<MessageBody>> {
        let body = self.json_body(value, &mut headers)?;
        self.create_symmetric_authenticated_request(method, uri, &body, key, headers)
    }

    fn create_symmetric_authenticated_json_response<T: Serialize + ?Sized>(
        &self,
        status: u16,
        value: &T,
        key: &SharedAuthenticationKey,
        mut headers: HeaderMap,
        version: Option<&str>,
    ) -> Result<Response<MessageBody>> {
        let body = self.json_body(value, &mut headers)?;
        self.create_symmetric_authenticated_response(status, &body, key, headers, version)
    }

    fn create_symmetric_encrypted_json_request<T: Serialize + ?Sized>(
        &self,
        method: &str,
        uri: &str,
        value: &T,
        key: &SharedEncryptionKey,
        mut headers: HeaderMap,
    ) -> Result<Request<MessageBody>> {
        let body = self.json_body(value, &mut headers)?;
        self.create_symmetric_encrypted_request(method, uri, &body, key, headers)
    }

    fn create_symmetric_encrypted_json_response<T: Serialize + ?Sized>(
        &self,
        status: u16,
        value: &T,
        key: &SharedEncryptionKey,
        mut headers: HeaderMap,
        version: Option<&str>,
    ) -> Result<Response<MessageBody>> {
        let body = self.json_body(value, &mut headers)?;
        self.create_symmetric_encrypted_response(status, &body, key, headers, version)
    }

    fn create_sealed_json_request<T: Serialize + ?Sized>(
        &self,
        method: &str,
        uri: &str,
        value: &T,
        key: &SealingPublicKey,
        mut headers: HeaderMap,
    ) -> Result<Request<MessageBody>> {
        let body = self.json_body(value, &mut headers)?;
        self.create_sealed_request(method, uri, &body, key, headers)
    }

    fn create_sealed_json_response<T: Serialize + ?Sized>(
        &self,
        status: u16,
        value: &T,
        key: &SealingPublicKey,
        mut headers: HeaderMap,
        version: Option<&str>,
    ) -> Result<Response<MessageBody>> {
        let body = self.json_body(value, &mut headers)?;
        self.create_sealed_response(status, &body, key, headers, version)
    }

    fn create_signed_json_request<T: Serialize + ?Sized>(
        &self,
        method: &str,
        uri: &str,
        value: &T,
        key: &SigningSecretKey,
        mut headers: HeaderMap,
    ) -> Result<Request<MessageBody>> {
        let body = self.json_body(value, &mut headers)?;
        self.create_signed_request(method, uri, &body, key, headers)
    }

    fn create_signed_json_response<T: Serialize + ?Sized>(
        &self,
        status: u16,
        value: &T,
        key: &SigningSecretKey,
        mut headers: HeaderMap,
        version: Option<&str>,
    ) -> Result<Response<MessageBody>> {
        let body = self.json_body(value, &mut headers)?;
        self.create_signed_response(status, &body, key, headers, version)
    }
}

/// [`Adapter`] producing `http` crate messages, generic over the crypto suite.
#[derive(Debug, Clone)]
pub struct HttpAdapter<P: CryptoProvider = ClassicSuiteProvider> {
    config: Config,
    _provider: PhantomData<P>,
}

impl<P: CryptoProvider> HttpAdapter<P> {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            _provider: PhantomData,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Applies `transform` to `body` and assembles the request.
    pub fn protected_request(
        &self,
        method: &str,
        uri: &str,
        body: &[u8],
        transform: Transform<'_>,
        mut headers: HeaderMap,
    ) -> Result<Request<MessageBody>> {
        let wire_body = transform.protect::<P>(body, &mut headers, self.config.merge_policy)?;
        build_request(method, uri, headers, &wire_body)
    }

    /// Applies `transform` to `body` and assembles the response.
    pub fn protected_response(
        &self,
        status: u16,
        body: &[u8],
        transform: Transform<'_>,
        mut headers: HeaderMap,
        version: Option<&str>,
    ) -> Result<Response<MessageBody>> {
        let wire_body = transform.protect::<P>(body, &mut headers, self.config.merge_policy)?;
        let version = version.unwrap_or(self.config.http_version.as_str());
        build_response(status, headers, &wire_body, version)
    }
}

impl<P: CryptoProvider> Default for HttpAdapter<P> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<P: CryptoProvider> Adapter for HttpAdapter<P> {
    fn create_symmetric_authenticated_request(
        &self,
        method: &str,
        uri: &str,
        body: &[u8],
        key: &SharedAuthenticationKey,
        headers: HeaderMap,
    ) -> Result<Request<MessageBody>> {
        self.protected_request(method, uri, body, Transform::Authenticate(key), headers)
    }

    fn create_symmetric_authenticated_response(
        &self,
        status: u16,
        body: &[u8],
        key: &SharedAuthenticationKey,
        headers: HeaderMap,
        version: Option<&str>,
    ) -> Result<Response<MessageBody>> {
        self.protected_response(status, body, Transform::Authenticate(key), headers, version)
    }

    fn create_symmetric_encrypted_request(
        &self,
        method: &str,
        uri: &str,
        body: &[u8],
        key: &SharedEncryptionKey,
        headers: HeaderMap,
    ) -> Result<Request<MessageBody>> {
        self.protected_request(method, uri, body, Transform::EncryptShared(key), headers)
    }

    fn create_symmetric_encrypted_response(
        &self,
        status: u16,
        body: &[u8],
        key: &SharedEncryptionKey,
        headers: HeaderMap,
        version: Option<&str>,
    ) -> Result<Response<MessageBody>> {
        self.protected_response(status, body, Transform::EncryptShared(key), headers, version)
    }

    fn create_sealed_request(
        &self,
        method: &str,
        uri: &str,
        body: &[u8],
        key: &SealingPublicKey,
        headers: HeaderMap,
    ) -> Result<Request<MessageBody>> {
        self.protected_request(method, uri, body, Transform::SealPublic(key), headers)
    }

    fn create_sealed_response(
        &self,
        status: u16,
        body: &[u8],
        key: &SealingPublicKey,
        headers: HeaderMap,
        version: Option<&str>,
    ) -> Result<Response<MessageBody>> {
        self.protected_response(status, body, Transform::SealPublic(key), headers, version)
    }

    fn create_signed_request(
        &self,
        method: &str,
        uri: &str,
        body: &[u8],
        key: &SigningSecretKey,
        headers: HeaderMap,
    ) -> Result<Request<MessageBody>> {
        self.protected_request(method, uri, body, Transform::Sign(key), headers)
    }

    fn create_signed_response(
        &self,
        status: u16,
        body: &[u8],
        key: &SigningSecretKey,
        headers: HeaderMap,
        version: Option<&str>,
    ) -> Result<Response<MessageBody>> {
        self.protected_response(status, body, Transform::Sign(key), headers, version)
    }
}

impl<P: CryptoProvider> ConvenienceAdapter for HttpAdapter<P> {
    fn json_body<T: Serialize + ?Sized>(
        &self,
        value: &T,
        headers: &mut HeaderMap,
    ) -> Result<Vec<u8>> {
        let body = to_json_body(value, self.config.json_indent)?;
        ensure_content_type(headers, &self.config.default_content_type)?;
        Ok(body)
    }
}

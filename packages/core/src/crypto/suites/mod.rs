//! Криптографические наборы (Crypto Suites)
//!
//! Этот модуль содержит реализации CryptoProvider trait.
//!
//! ### Classic Suite
//! - **MAC**: HMAC-SHA-512-256 (HMAC-SHA-512 truncated to 32 bytes)
//! - **AEAD**: XChaCha20-Poly1305, random 24-byte nonce
//! - **Seal**: ephemeral X25519 + HKDF-SHA256 + XChaCha20-Poly1305
//! - **Signatures**: Ed25519 (detached)
//!
//! ```rust
//! use sealed_http::crypto::keys::SharedAuthenticationKey;
//! use sealed_http::crypto::suites::classic::ClassicSuiteProvider;
//! use sealed_http::crypto::CryptoProvider;
//!
//! let key = SharedAuthenticationKey::generate();
//! let tag = ClassicSuiteProvider::mac(b"body", &key).unwrap();
//! assert_eq!(tag.len(), 32);
//! ```

pub mod classic;

//! Криптографический модуль
//!
//! # Архитектура
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              protocol::transform (four modes)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 CryptoProvider (trait)                      │
//! │  - MAC (HMAC-SHA-512 truncated to 32 bytes)                 │
//! │  - AEAD (XChaCha20-Poly1305)                                │
//! │  - Seal (X25519 + HKDF-SHA256 + AEAD)                       │
//! │  - Signatures (Ed25519, detached)                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`provider`]: CryptoProvider trait
//! - [`suites`]: реализации CryptoProvider
//! - [`keys`]: one nominal type per key kind

pub mod keys;

pub mod provider;

pub mod suites;

pub use provider::CryptoProvider;

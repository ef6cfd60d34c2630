//! Header names and the merge rule for proof headers.
//!
//! Header names are case-insensitive on the wire; `http` stores them
//! lowercased, so the canonical spellings below are for display and docs.

use crate::utils::error::SealedHttpError;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use std::fmt;
use std::str::FromStr;

/// Carries the base64url HMAC-SHA-512-256 tag of the body (HMAC-SHA-512, first 32 bytes).
pub const HEADER_AUTH_NAME: &str = "Body-HMAC-SHA512256";
/// Carries the base64url Ed25519 signature of the body.
pub const HEADER_SIGNATURE_NAME: &str = "Body-Signature-Ed25519";
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

pub const AUTH_HEADER: HeaderName = HeaderName::from_static("body-hmac-sha512256");
pub const SIGNATURE_HEADER: HeaderName = HeaderName::from_static("body-signature-ed25519");

/// Decides whether a freshly computed proof replaces the header or is
/// appended to it, so several proofs can be stacked on one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Wire-compatible rule: append whenever the *signature* header is
    /// already present, for both the auth and the signature header.
    /// An existing auth header on an unsigned message is overwritten.
    #[default]
    PairedHeader,
    /// Append whenever the target header itself is already present.
    OwnHeader,
}

impl MergePolicy {
    pub fn should_append(self, headers: &HeaderMap, target: &HeaderName) -> bool {
        match self {
            MergePolicy::PairedHeader => headers.contains_key(&SIGNATURE_HEADER),
            MergePolicy::OwnHeader => headers.contains_key(target),
        }
    }
}

impl FromStr for MergePolicy {
    type Err = SealedHttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paired" | "paired-header" => Ok(MergePolicy::PairedHeader),
            "own" | "own-header" => Ok(MergePolicy::OwnHeader),
            other => Err(SealedHttpError::Config(format!(
                "unknown merge policy '{}', expected 'paired' or 'own'",
                other
            ))),
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergePolicy::PairedHeader => f.write_str("paired"),
            MergePolicy::OwnHeader => f.write_str("own"),
        }
    }
}

/// Writes `value` under `name`, either as its only value or appended to the
/// existing list, as `policy` dictates. Returns `true` when appended.
pub fn merge_header(
    headers: &mut HeaderMap,
    name: HeaderName,
    value: HeaderValue,
    policy: MergePolicy,
) -> bool {
    let append = policy.should_append(headers, &name);
    tracing::trace!(header = %name, append, %policy, "merging proof header");
    if append {
        headers.append(name, value);
    } else {
        headers.insert(name, value);
    }
    append
}

// Типы ключей
//
// Every key is "just 32 bytes" to the underlying primitive, but each kind is
// its own nominal type with no conversion between kinds.

use crate::error::CryptoError;
use crate::utils::b64;
use crate::utils::error::Result;
use ed25519_dalek::SigningKey;
use rand::rngs::OsRng;
use rand_core::RngCore;
use std::fmt;
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const KEY_LENGTH: usize = 32;

macro_rules! fixed_key {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Zeroize)]
        pub struct $name {
            bytes: [u8; KEY_LENGTH],
        }

        impl $name {
            /// Wraps raw key bytes, rejecting anything but exactly 32 bytes.
            pub fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, CryptoError> {
                let bytes: [u8; KEY_LENGTH] = bytes.try_into().map_err(|_| {
                    CryptoError::InvalidInputError(format!(
                        "{} must be {} bytes, got {}",
                        $label,
                        KEY_LENGTH,
                        bytes.len()
                    ))
                })?;
                Ok(Self { bytes })
            }

            /// Imports a key from its base64url text form.
            pub fn from_encoded(encoded: &str) -> Result<Self> {
                let raw = zeroize::Zeroizing::new(b64::decode(encoded)?);
                Ok(Self::from_bytes(&raw)?)
            }

            pub fn to_encoded(&self) -> String {
                b64::encode(&self.bytes)
            }

            pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
                &self.bytes
            }
        }
    };
}

macro_rules! secret_key {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        fixed_key!($(#[$meta])* $name, $label);

        impl ZeroizeOnDrop for $name {}

        impl Drop for $name {
            fn drop(&mut self) {
                self.bytes.zeroize();
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name)).field("bytes", &"[REDACTED]").finish()
            }
        }
    };
}

macro_rules! public_key {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        fixed_key!($(#[$meta])* $name, $label);

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.to_encoded()).finish()
            }
        }
    };
}

secret_key!(
    /// Pre-shared key for body authentication (HMAC).
    SharedAuthenticationKey,
    "Shared authentication key"
);

secret_key!(
    /// Pre-shared key for authenticated body encryption.
    SharedEncryptionKey,
    "Shared encryption key"
);

public_key!(
    /// Recipient's X25519 public key; bodies sealed to it can only be opened
    /// by the matching [`SealingSecretKey`].
    SealingPublicKey,
    "Sealing public key"
);

secret_key!(
    /// X25519 secret key that opens sealed bodies.
    SealingSecretKey,
    "Sealing secret key"
);

secret_key!(
    /// Ed25519 signing seed.
    SigningSecretKey,
    "Signing secret key"
);

public_key!(
    /// Ed25519 verifying key.
    SigningPublicKey,
    "Signing public key"
);

fn random_bytes() -> [u8; KEY_LENGTH] {
    let mut bytes = [0u8; KEY_LENGTH];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

impl SharedAuthenticationKey {
    pub fn generate() -> Self {
        Self { bytes: random_bytes() }
    }
}

impl SharedEncryptionKey {
    pub fn generate() -> Self {
        Self { bytes: random_bytes() }
    }
}

impl SealingSecretKey {
    pub fn generate() -> Self {
        let secret = StaticSecret::random_from_rng(OsRng);
        Self {
            bytes: secret.to_bytes(),
        }
    }

    /// Derives the X25519 public key senders seal to.
    pub fn public_key(&self) -> SealingPublicKey {
        let secret = StaticSecret::from(self.bytes);
        SealingPublicKey {
            bytes: PublicKey::from(&secret).to_bytes(),
        }
    }
}

impl SigningSecretKey {
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        Self {
            bytes: signing_key.to_bytes(),
        }
    }

    pub fn public_key(&self) -> SigningPublicKey {
        let signing_key = SigningKey::from_bytes(&self.bytes);
        SigningPublicKey {
            bytes: signing_key.verifying_key().to_bytes(),
        }
    }
}

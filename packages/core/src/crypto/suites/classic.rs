use crate::crypto::keys::{
    SealingPublicKey, SealingSecretKey, SharedAuthenticationKey, SharedEncryptionKey,
    SigningPublicKey, SigningSecretKey, KEY_LENGTH,
};
use crate::crypto::provider::CryptoProvider;
use crate::error::CryptoError;
use chacha20poly1305::{
    aead::{Aead, Payload},
    Key as AeadKey, KeyInit, XChaCha20Poly1305, XNonce,
};
use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand_core::RngCore;
use sha2::{Sha256, Sha512};
use subtle::ConstantTimeEq;
use x25519_dalek::{EphemeralSecret, PublicKey, StaticSecret};
use zeroize::Zeroizing;

/// HMAC-SHA-512-256: HMAC-SHA-512 truncated to its first 32 bytes
/// (libsodium `crypto_auth`).
type HmacSha512 = Hmac<Sha512>;

/// XChaCha20 nonce length
pub const NONCE_LENGTH: usize = 24;
/// Poly1305 tag length
pub const TAG_LENGTH: usize = 16;
/// Truncated HMAC-SHA-512 output length
pub const MAC_LENGTH: usize = 32;
pub const SIGNATURE_LENGTH: usize = 64;

const SEAL_INFO: &[u8] = b"sealed-http seal v1";

/// Concrete implementation of `CryptoProvider` for the classic suite.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicSuiteProvider;

impl CryptoProvider for ClassicSuiteProvider {
    fn mac(message: &[u8], key: &SharedAuthenticationKey) -> Result<Vec<u8>, CryptoError> {
        Ok(hmac_sha512_256(message, key)?.to_vec())
    }

    fn verify_mac(
        message: &[u8],
        tag: &[u8],
        key: &SharedAuthenticationKey,
    ) -> Result<(), CryptoError> {
        let expected = hmac_sha512_256(message, key)?;
        if tag.len() == MAC_LENGTH && bool::from(expected.as_slice().ct_eq(tag)) {
            Ok(())
        } else {
            Err(CryptoError::MacVerificationError)
        }
    }

    fn auth_encrypt(plaintext: &[u8], key: &SharedEncryptionKey) -> Result<Vec<u8>, CryptoError> {
        aead_encrypt(key.as_bytes(), plaintext)
    }

    fn auth_decrypt(ciphertext: &[u8], key: &SharedEncryptionKey) -> Result<Vec<u8>, CryptoError> {
        aead_decrypt(key.as_bytes(), ciphertext)
    }

    fn seal(plaintext: &[u8], recipient: &SealingPublicKey) -> Result<Vec<u8>, CryptoError> {
        let ephemeral_secret = EphemeralSecret::random_from_rng(OsRng);
        let recipient_public_key = PublicKey::from(*recipient.as_bytes());

        // Get ephemeral public key before consuming ephemeral_secret
        let ephemeral_public_key = PublicKey::from(&ephemeral_secret);

        let shared_secret = ephemeral_secret.diffie_hellman(&recipient_public_key);
        if !shared_secret.was_contributory() {
            return Err(CryptoError::KemEncapsulationError(
                "Recipient public key is a low-order point".to_string(),
            ));
        }

        let sealing_key = derive_seal_key(
            shared_secret.as_bytes(),
            ephemeral_public_key.as_bytes(),
            recipient.as_bytes(),
        )?;

        let ciphertext = aead_encrypt(&sealing_key, plaintext)?;
        let mut sealed = Vec::with_capacity(KEY_LENGTH + ciphertext.len());
        sealed.extend_from_slice(ephemeral_public_key.as_bytes());
        sealed.extend_from_slice(&ciphertext);
        Ok(sealed)
    }

    fn unseal(ciphertext: &[u8], key: &SealingSecretKey) -> Result<Vec<u8>, CryptoError> {
        if ciphertext.len() < KEY_LENGTH + NONCE_LENGTH + TAG_LENGTH {
            return Err(CryptoError::KemDecapsulationError(format!(
                "Sealed payload too short: {} bytes",
                ciphertext.len()
            )));
        }
        let (ephemeral_bytes, rest) = ciphertext.split_at(KEY_LENGTH);
        let ephemeral_bytes: [u8; KEY_LENGTH] = ephemeral_bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidInputError("Invalid ephemeral key length".to_string()))?;

        let static_secret = StaticSecret::from(*key.as_bytes());
        let recipient_public_key = PublicKey::from(&static_secret);
        let shared_secret = static_secret.diffie_hellman(&PublicKey::from(ephemeral_bytes));
        if !shared_secret.was_contributory() {
            return Err(CryptoError::KemDecapsulationError(
                "Ephemeral public key is a low-order point".to_string(),
            ));
        }

        let sealing_key = derive_seal_key(
            shared_secret.as_bytes(),
            &ephemeral_bytes,
            recipient_public_key.as_bytes(),
        )?;
        aead_decrypt(&sealing_key, rest)
    }

    fn sign_detached(message: &[u8], key: &SigningSecretKey) -> Result<Vec<u8>, CryptoError> {
        let signing_key = SigningKey::from_bytes(key.as_bytes());
        let signature = signing_key.sign(message);
        Ok(signature.to_bytes().to_vec())
    }

    fn verify_detached(
        message: &[u8],
        signature: &[u8],
        key: &SigningPublicKey,
    ) -> Result<(), CryptoError> {
        let verifying_key = VerifyingKey::from_bytes(key.as_bytes())
            .map_err(|e| CryptoError::InvalidInputError(format!("Invalid verifying key: {}", e)))?;

        let sig_bytes: &[u8; SIGNATURE_LENGTH] = signature
            .try_into()
            .map_err(|_| CryptoError::InvalidInputError("Invalid signature length".to_string()))?;
        let signature_obj = Signature::from_bytes(sig_bytes);

        verifying_key
            .verify_strict(message, &signature_obj)
            .map_err(|e| CryptoError::SignatureVerificationError(e.to_string()))
    }
}

fn hmac_sha512_256(
    message: &[u8],
    key: &SharedAuthenticationKey,
) -> Result<Zeroizing<[u8; MAC_LENGTH]>, CryptoError> {
    let mut mac = <HmacSha512 as Mac>::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::MacError(e.to_string()))?;
    mac.update(message);
    let full = mac.finalize().into_bytes();
    let mut tag = Zeroizing::new([0u8; MAC_LENGTH]);
    tag.copy_from_slice(&full[..MAC_LENGTH]);
    Ok(tag)
}

/// HKDF-SHA256 over the X25519 output, salted with both public keys so the
/// derived key is bound to this exact sender/recipient pair.
fn derive_seal_key(
    shared_secret: &[u8; KEY_LENGTH],
    ephemeral_public: &[u8; KEY_LENGTH],
    recipient_public: &[u8; KEY_LENGTH],
) -> Result<Zeroizing<[u8; KEY_LENGTH]>, CryptoError> {
    let mut salt = [0u8; 2 * KEY_LENGTH];
    salt[..KEY_LENGTH].copy_from_slice(ephemeral_public);
    salt[KEY_LENGTH..].copy_from_slice(recipient_public);

    let hkdf = Hkdf::<Sha256>::new(Some(&salt[..]), shared_secret);
    let mut okm = Zeroizing::new([0u8; KEY_LENGTH]);
    hkdf.expand(SEAL_INFO, &mut *okm)
        .map_err(|e| CryptoError::KeyDerivationError(e.to_string()))?;
    Ok(okm)
}

/// Output layout: nonce || ciphertext || tag. The nonce doubles as AAD.
fn aead_encrypt(key: &[u8; KEY_LENGTH], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let cipher = XChaCha20Poly1305::new(AeadKey::from_slice(key));

    let mut nonce = [0u8; NONCE_LENGTH];
    OsRng.fill_bytes(&mut nonce);

    let ciphertext_with_tag = cipher
        .encrypt(
            XNonce::from_slice(&nonce),
            Payload {
                msg: plaintext,
                aad: &nonce,
            },
        )
        .map_err(|e| CryptoError::AeadEncryptionError(e.to_string()))?;

    let mut output = Vec::with_capacity(NONCE_LENGTH + ciphertext_with_tag.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext_with_tag);
    Ok(output)
}

fn aead_decrypt(key: &[u8; KEY_LENGTH], data: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if data.len() < NONCE_LENGTH + TAG_LENGTH {
        return Err(CryptoError::AeadDecryptionError(format!(
            "Ciphertext too short: {} bytes",
            data.len()
        )));
    }
    let cipher = XChaCha20Poly1305::new(AeadKey::from_slice(key));
    let (nonce, ciphertext) = data.split_at(NONCE_LENGTH);

    cipher
        .decrypt(
            XNonce::from_slice(nonce),
            Payload {
                msg: ciphertext,
                aad: nonce,
            },
        )
        .map_err(|e| CryptoError::AeadDecryptionError(e.to_string()))
}

//! Tests for the classic crypto suite
//!
//! This test suite covers:
//! - HMAC-SHA-512-256 (truncated HMAC-SHA-512) authentication
//! - XChaCha20-Poly1305 symmetric encryption
//! - X25519 sealing
//! - Ed25519 detached signatures
//! - Error Handling

use sealed_http::crypto::keys::{
    SealingSecretKey, SharedAuthenticationKey, SharedEncryptionKey, SigningSecretKey,
};
use sealed_http::crypto::suites::classic::{ClassicSuiteProvider, MAC_LENGTH, SIGNATURE_LENGTH};
use sealed_http::crypto::CryptoProvider;
use sealed_http::error::CryptoError;

/// Known answer: libsodium `crypto_auth` with the RFC 4231 case 2 inputs
/// (key "Jefe" zero-padded to 32 bytes)
#[test]
fn test_classic_suite_mac_known_answer() {
    let mut key_bytes = [0u8; 32];
    key_bytes[..4].copy_from_slice(b"Jefe");
    let key = SharedAuthenticationKey::from_bytes(&key_bytes).unwrap();

    let tag = ClassicSuiteProvider::mac(b"what do ya want for nothing?", &key).unwrap();
    assert_eq!(tag.len(), MAC_LENGTH, "Tag should be 32 bytes");
    assert_eq!(
        hex::encode(&tag),
        "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554",
        "Tag must be HMAC-SHA-512 truncated to 32 bytes"
    );
    assert!(ClassicSuiteProvider::verify_mac(b"what do ya want for nothing?", &tag, &key).is_ok());
}

/// Known answer over a pretty-printed JSON body
#[test]
fn test_classic_suite_mac_known_answer_json_body() {
    let key = SharedAuthenticationKey::from_bytes(&[0x0b; 32]).unwrap();

    let tag = ClassicSuiteProvider::mac(b"{\n    \"a\": 1\n}", &key).unwrap();
    assert_eq!(
        hex::encode(&tag),
        "75e99aa473d14b0634f413db8cba84ffd324c7c39c0038590d08f317987049d3"
    );

    let again = ClassicSuiteProvider::mac(b"{\n    \"a\": 1\n}", &key).unwrap();
    assert_eq!(tag, again, "MAC must be deterministic");
}

/// A tag of the wrong length never verifies
#[test]
fn test_classic_suite_verify_mac_rejects_truncated_tag() {
    let key = SharedAuthenticationKey::generate();
    let tag = ClassicSuiteProvider::mac(b"message", &key).unwrap();

    let result = ClassicSuiteProvider::verify_mac(b"message", &tag[..16], &key);
    assert!(matches!(result, Err(CryptoError::MacVerificationError)));
}

/// Test that MAC verification fails with a modified message
#[test]
fn test_classic_suite_verify_mac_fails_with_wrong_message() {
    let key = SharedAuthenticationKey::generate();
    let tag = ClassicSuiteProvider::mac(b"Original message", &key).unwrap();

    assert!(ClassicSuiteProvider::verify_mac(b"Original message", &tag, &key).is_ok());
    let result = ClassicSuiteProvider::verify_mac(b"Modified message", &tag, &key);
    assert!(
        matches!(result, Err(CryptoError::MacVerificationError)),
        "Verification should fail with wrong message"
    );
}

/// Test that MAC verification fails with a different key
#[test]
fn test_classic_suite_verify_mac_fails_with_wrong_key() {
    let key = SharedAuthenticationKey::generate();
    let other = SharedAuthenticationKey::generate();
    let tag = ClassicSuiteProvider::mac(b"message", &key).unwrap();

    assert!(ClassicSuiteProvider::verify_mac(b"message", &tag, &other).is_err());
}

/// Test AEAD encryption and decryption
#[test]
fn test_classic_suite_auth_encrypt_decrypt() {
    let key = SharedEncryptionKey::generate();
    let plaintext = b"Secret message for encryption test";

    let ciphertext = ClassicSuiteProvider::auth_encrypt(plaintext, &key).unwrap();

    // nonce (24) + plaintext + tag (16)
    assert_eq!(ciphertext.len(), 24 + plaintext.len() + 16, "Ciphertext length incorrect");

    let decrypted = ClassicSuiteProvider::auth_decrypt(&ciphertext, &key).unwrap();
    assert_eq!(decrypted, plaintext, "Decrypted plaintext doesn't match");
}

/// Test that AEAD decryption fails with wrong key
#[test]
fn test_classic_suite_auth_decrypt_fails_with_wrong_key() {
    let key = SharedEncryptionKey::generate();
    let wrong_key = SharedEncryptionKey::generate();

    let ciphertext = ClassicSuiteProvider::auth_encrypt(b"Secret message", &key).unwrap();

    let result = ClassicSuiteProvider::auth_decrypt(&ciphertext, &wrong_key);
    assert!(
        matches!(result, Err(CryptoError::AeadDecryptionError(_))),
        "Decryption should fail with wrong key"
    );
}

/// Test that tampering with the ciphertext is detected
#[test]
fn test_classic_suite_auth_decrypt_fails_when_tampered() {
    let key = SharedEncryptionKey::generate();
    let mut ciphertext = ClassicSuiteProvider::auth_encrypt(b"Secret message", &key).unwrap();

    let last = ciphertext.len() - 1;
    ciphertext[last] ^= 0x01;

    assert!(ClassicSuiteProvider::auth_decrypt(&ciphertext, &key).is_err());
}

/// Test sealing to a public key and opening with the matching secret
#[test]
fn test_classic_suite_seal_unseal() {
    let secret = SealingSecretKey::generate();
    let public = secret.public_key();
    let plaintext = b"Only the server may read this";

    let sealed = ClassicSuiteProvider::seal(plaintext, &public).unwrap();
    // ephemeral key (32) + nonce (24) + plaintext + tag (16)
    assert_eq!(sealed.len(), 32 + 24 + plaintext.len() + 16);

    let opened = ClassicSuiteProvider::unseal(&sealed, &secret).unwrap();
    assert_eq!(opened, plaintext);
}

/// Sealing the same body twice never produces the same ciphertext
#[test]
fn test_classic_suite_seal_is_fresh_per_call() {
    let public = SealingSecretKey::generate().public_key();

    let first = ClassicSuiteProvider::seal(b"same body", &public).unwrap();
    let second = ClassicSuiteProvider::seal(b"same body", &public).unwrap();

    assert_ne!(first, second, "Ephemeral encapsulation must differ per call");
    assert_ne!(first[..32], second[..32], "Ephemeral public keys must differ");
}

/// Test that a different secret key cannot open a sealed body
#[test]
fn test_classic_suite_unseal_fails_with_wrong_key() {
    let public = SealingSecretKey::generate().public_key();
    let stranger = SealingSecretKey::generate();

    let sealed = ClassicSuiteProvider::seal(b"secret", &public).unwrap();
    assert!(ClassicSuiteProvider::unseal(&sealed, &stranger).is_err());
}

/// Test that truncated sealed payloads are rejected before decryption
#[test]
fn test_classic_suite_unseal_rejects_short_payload() {
    let secret = SealingSecretKey::generate();
    let result = ClassicSuiteProvider::unseal(&[0u8; 40], &secret);
    assert!(matches!(result, Err(CryptoError::KemDecapsulationError(_))));
}

/// Test signature creation and verification
#[test]
fn test_classic_suite_sign_verify() {
    let signing_key = SigningSecretKey::generate();
    let verifying_key = signing_key.public_key();
    let message = b"Hello, signed body!";

    let signature = ClassicSuiteProvider::sign_detached(message, &signing_key).unwrap();
    assert_eq!(signature.len(), SIGNATURE_LENGTH, "Signature should be 64 bytes");

    let verify_result = ClassicSuiteProvider::verify_detached(message, &signature, &verifying_key);
    assert!(verify_result.is_ok(), "Signature verification failed");
}

/// Ed25519 is deterministic: same key and message give the same signature
#[test]
fn test_classic_suite_sign_is_deterministic() {
    let signing_key = SigningSecretKey::from_bytes(&[42u8; 32]).unwrap();
    let a = ClassicSuiteProvider::sign_detached(b"body", &signing_key).unwrap();
    let b = ClassicSuiteProvider::sign_detached(b"body", &signing_key).unwrap();
    assert_eq!(hex::encode(a), hex::encode(b));
}

/// Test that signature verification fails with wrong message
#[test]
fn test_classic_suite_verify_fails_with_wrong_message() {
    let signing_key = SigningSecretKey::generate();
    let signature = ClassicSuiteProvider::sign_detached(b"Original message", &signing_key).unwrap();

    let verify_result =
        ClassicSuiteProvider::verify_detached(b"Modified message", &signature, &signing_key.public_key());
    assert!(verify_result.is_err(), "Verification should fail with wrong message");
}

/// Test that a truncated signature is an input error, not a panic
#[test]
fn test_classic_suite_verify_rejects_short_signature() {
    let signing_key = SigningSecretKey::generate();
    let result =
        ClassicSuiteProvider::verify_detached(b"message", &[0u8; 10], &signing_key.public_key());
    assert!(matches!(result, Err(CryptoError::InvalidInputError(_))));
}

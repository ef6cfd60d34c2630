// Base64url утилиты
//
// Binary proof artifacts only ever leave the crate through `encode`.

use crate::utils::error::{Result, SealedHttpError};
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

/// URL-safe alphabet, unpadded on encode, padding-tolerant on decode.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn encode(data: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(data)
}

pub fn decode(data: &str) -> Result<Vec<u8>> {
    URL_SAFE_LENIENT
        .decode(data.trim())
        .map_err(|e| SealedHttpError::Encoding(format!("Base64url decode failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_url_safe_and_unpadded() {
        let encoded = encode(&[0xfb, 0xff, 0xfe]);
        assert_eq!(encoded, "-__-");

        let encoded = encode(b"a");
        assert_eq!(encoded, "YQ");
        assert!(!encoded.contains('='));
    }

    #[test]
    fn test_decode_accepts_padding() {
        assert_eq!(decode("YQ==").unwrap(), b"a");
        assert_eq!(decode("YQ").unwrap(), b"a");
    }

    #[test]
    fn test_decode_rejects_standard_alphabet() {
        let err = decode("+//+").unwrap_err();
        assert!(matches!(err, SealedHttpError::Encoding(_)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode("not base64!").is_err());
    }
}

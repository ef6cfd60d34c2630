// Сериализация JSON-тела
//
// Key order follows the value's own container: structs keep declaration
// order, BTreeMap is sorted, HashMap order is unspecified.
//
// Output is not byte-identical to PHP's json_encode(JSON_PRETTY_PRINT):
// `/` is written as-is rather than `\/`, and non-ASCII text stays raw UTF-8
// rather than `\uXXXX`. Proofs cover the bytes emitted here, so verification
// is unaffected; only byte-for-byte comparisons against PHP output differ.

use crate::utils::error::{Result, SealedHttpError};
use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Pretty-prints `value` as JSON with `indent` spaces per level.
pub fn to_json_body<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<Vec<u8>> {
    let indent = vec![b' '; indent];
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(&indent));
    value
        .serialize(&mut serializer)
        .map_err(|e| SealedHttpError::Serialization(format!("Cannot JSON-encode this message: {}", e)))?;
    Ok(buffer)
}

/// Sets `Content-Type` to `default` unless the caller already supplied a
/// non-empty one. Returns `true` when the default was applied.
pub fn ensure_content_type(headers: &mut HeaderMap, default: &str) -> Result<bool> {
    let missing = headers
        .get(CONTENT_TYPE)
        .map_or(true, |value| value.as_bytes().iter().all(u8::is_ascii_whitespace));
    if missing {
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(default)?);
    }
    Ok(missing)
}

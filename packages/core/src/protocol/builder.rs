//! Assembles `http` requests and responses. No cryptography happens here.

use crate::protocol::stream::MessageBody;
use crate::utils::error::{Result, SealedHttpError};
use http::{HeaderMap, Method, Request, Response, StatusCode, Uri, Version};

/// Builds a request whose body stream is positioned at byte zero.
pub fn build_request(
    method: &str,
    uri: &str,
    headers: HeaderMap,
    body: &[u8],
) -> Result<Request<MessageBody>> {
    let method = Method::from_bytes(method.as_bytes())
        .map_err(|e| SealedHttpError::InvalidMessage(format!("Invalid method '{}': {}", method, e)))?;
    let uri: Uri = uri
        .parse()
        .map_err(|e| SealedHttpError::InvalidMessage(format!("Invalid URI '{}': {}", uri, e)))?;

    let mut request = Request::builder()
        .method(method)
        .uri(uri)
        .body(MessageBody::from_bytes(body)?)?;
    *request.headers_mut() = headers;

    tracing::debug!(
        method = %request.method(),
        uri = %request.uri(),
        body_len = body.len(),
        "built request"
    );
    Ok(request)
}

/// Builds a response; `version` is an HTTP version string such as `"1.1"`.
pub fn build_response(
    status: u16,
    headers: HeaderMap,
    body: &[u8],
    version: &str,
) -> Result<Response<MessageBody>> {
    let status = StatusCode::from_u16(status)
        .map_err(|e| SealedHttpError::InvalidMessage(format!("Invalid status {}: {}", status, e)))?;

    let mut response = Response::builder()
        .status(status)
        .version(parse_version(version)?)
        .body(MessageBody::from_bytes(body)?)?;
    *response.headers_mut() = headers;

    tracing::debug!(status = %status, body_len = body.len(), "built response");
    Ok(response)
}

pub fn parse_version(version: &str) -> Result<Version> {
    let trimmed = version.trim();
    let trimmed = trimmed.strip_prefix("HTTP/").unwrap_or(trimmed);
    match trimmed {
        "0.9" => Ok(Version::HTTP_09),
        "1.0" => Ok(Version::HTTP_10),
        "1.1" => Ok(Version::HTTP_11),
        "2" | "2.0" => Ok(Version::HTTP_2),
        "3" | "3.0" => Ok(Version::HTTP_3),
        _ => Err(SealedHttpError::InvalidMessage(format!(
            "Unsupported HTTP version '{}'",
            version
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header::{HeaderValue, CONTENT_TYPE};

    #[test]
    fn test_build_request() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let request = build_request("POST", "/x?y=1", headers, b"hello").unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.uri().path(), "/x");
        assert_eq!(request.uri().query(), Some("y=1"));
        assert_eq!(request.headers()[CONTENT_TYPE], "text/plain");
        assert_eq!(request.body().as_bytes(), b"hello");
        assert_eq!(request.body().position(), 0);
    }

    #[test]
    fn test_build_request_rejects_bad_method() {
        let err = build_request("BAD METHOD", "/", HeaderMap::new(), b"").unwrap_err();
        assert!(matches!(err, SealedHttpError::InvalidMessage(_)));
    }

    #[test]
    fn test_build_request_rejects_bad_uri() {
        assert!(build_request("GET", "http://exa mple.com/", HeaderMap::new(), b"").is_err());
    }

    #[test]
    fn test_build_response() {
        let response = build_response(201, HeaderMap::new(), b"{}", "1.0").unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.version(), Version::HTTP_10);
        assert_eq!(response.body().as_bytes(), b"{}");
    }

    #[test]
    fn test_build_response_rejects_bad_status() {
        assert!(build_response(1000, HeaderMap::new(), b"", "1.1").is_err());
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("HTTP/2").unwrap(), Version::HTTP_2);
        assert_eq!(parse_version("1.1").unwrap(), Version::HTTP_11);
        assert!(parse_version("4").is_err());
    }
}

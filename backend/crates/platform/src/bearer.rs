//! Bearer Credentials
//!
//! Parsing of `Authorization: Bearer <token>` (RFC 6750).

use axum::http::{HeaderMap, header};

/// Value for the `WWW-Authenticate` header on 401 responses
pub const WWW_AUTHENTICATE_BEARER: &str = "Bearer";

/// Extract the bearer token from the `Authorization` header
///
/// The scheme is matched case-insensitively. Returns `None` when the header
/// is missing, not valid ASCII, uses another scheme, or carries an empty token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() || token.contains(' ') {
        return None;
    }

    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(
            extract_bearer_token(&headers_with("Bearer abc123")),
            Some("abc123".to_string())
        );
        assert_eq!(
            extract_bearer_token(&headers_with("bearer   abc123 ")),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_extract_bearer_token_rejects() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
        assert_eq!(extract_bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
        assert_eq!(extract_bearer_token(&headers_with("Bearer")), None);
        assert_eq!(extract_bearer_token(&headers_with("Bearer ")), None);
        assert_eq!(extract_bearer_token(&headers_with("Bearer a b")), None);
    }
}

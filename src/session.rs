//! Session context for one request.
//!
//! The bearer token lives in a `token` cookie. Everything that needs it goes
//! through this one object instead of re-reading the cookie jar ad hoc; the
//! login/logout `Set-Cookie` builders below are the only places that write
//! it.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::error::PageError;

pub const TOKEN_COOKIE: &str = "token";

#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            token: get_cookie(headers, TOKEN_COOKIE),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The token, or a redirect-to-login error for pages that require one.
    pub fn require_token(&self) -> Result<&str, PageError> {
        self.token().ok_or(PageError::NotAuthenticated)
    }
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Session::from_headers(&parts.headers))
    }
}

/// Extract a named cookie value from request headers.
fn get_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|part| {
            let part = part.trim();
            part.strip_prefix(prefix.as_str()).map(str::to_string)
        })
}

/// `Set-Cookie` value that stores the session token.
pub fn login_cookie(token: &str, max_age_seconds: u64) -> String {
    format!("{TOKEN_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age_seconds}")
}

/// `Set-Cookie` value that clears the session token.
pub fn logout_cookie() -> String {
    format!("{TOKEN_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_token_extracted_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; token=abc123; lang=en");
        let session = Session::from_headers(&headers);
        assert_eq!(session.token(), Some("abc123"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_no_cookie_header_means_logged_out() {
        let session = Session::from_headers(&HeaderMap::new());
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
        assert!(session.require_token().is_err());
    }

    #[test]
    fn test_similarly_named_cookie_is_not_the_token() {
        let headers = headers_with_cookie("csrf_token=zzz; refresh=yyy");
        let session = Session::from_headers(&headers);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_login_cookie_carries_token_and_max_age() {
        let cookie = login_cookie("abc123", 86400);
        assert!(cookie.starts_with("token=abc123;"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("HttpOnly"));
    }

    #[test]
    fn test_logout_cookie_expires_immediately() {
        let cookie = logout_cookie();
        assert!(cookie.starts_with("token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}

pub mod admin;
pub mod home;
pub mod login;
pub mod place;
pub mod place_new;

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};

/// Redirect that also sets a cookie (login/logout).
pub(crate) fn redirect_with_cookie(location: &str, cookie: &str) -> Response {
    Response::builder()
        .status(StatusCode::SEE_OTHER)
        .header(header::LOCATION, location)
        .header(header::SET_COOKIE, cookie)
        .body(Body::empty())
        .unwrap_or_default()
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::views;

/// Error type for page handlers.
///
/// `Validation` is user-recoverable input trouble; `Api` carries whatever
/// message the booking API returned; `NotAuthenticated` sends the visitor to
/// the login page instead of rendering an error at all.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("request to the booking API failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("not logged in")]
    NotAuthenticated,

    #[error("{0}")]
    Validation(String),
}

impl PageError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotAuthenticated => Redirect::to("/login").into_response(),
            PageError::Validation(message) => {
                (StatusCode::BAD_REQUEST, views::error_page(&message)).into_response()
            }
            PageError::Api { status, message } => {
                let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (code, views::error_page(&message)).into_response()
            }
            PageError::Upstream(err) => {
                tracing::error!("upstream request failed: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    views::error_page("The booking service is unreachable. Please try again."),
                )
                    .into_response()
            }
        }
    }
}

use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    error::PageError,
    models::user::RegisterRequest,
    pages::redirect_with_cookie,
    session::{login_cookie, logout_cookie, Session},
    views::{self, Notice},
    AppState,
};

pub async fn login_page(session: Session) -> Response {
    // Already logged in: straight back home.
    if session.is_authenticated() {
        return Redirect::to("/").into_response();
    }
    views::login::page(None, "").into_response()
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, PageError> {
    if form.email.is_empty() || form.password.is_empty() {
        let notice = Notice::error("Please enter both email and password");
        return Ok(views::login::page(Some(&notice), &form.email).into_response());
    }
    match state.api.login(&form.email, &form.password).await {
        Ok(token) => {
            tracing::info!("login succeeded");
            Ok(redirect_with_cookie(
                "/",
                &login_cookie(&token, state.config.session_max_age_seconds),
            ))
        }
        Err(PageError::Api { message, .. }) => {
            let notice = Notice::error(message);
            Ok(views::login::page(Some(&notice), &form.email).into_response())
        }
        Err(err) => Err(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, PageError> {
    let req = RegisterRequest {
        email: form.email.clone(),
        password: form.password,
        first_name: form.first_name,
        last_name: form.last_name,
        // self-registration can never grant admin
        is_admin: false,
    };
    match state.api.register(&req).await {
        Ok(token) => Ok(redirect_with_cookie(
            "/",
            &login_cookie(&token, state.config.session_max_age_seconds),
        )),
        Err(PageError::Api { message, .. }) => {
            let notice = Notice::error(message);
            Ok(views::login::page(Some(&notice), &form.email).into_response())
        }
        Err(err) => Err(err),
    }
}

pub async fn logout() -> Response {
    redirect_with_cookie("/login", &logout_cookie())
}

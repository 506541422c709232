use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::PageError, models::user::RegisterRequest, session::Session, views, AppState,
};

/// Admin user management. The admin link is hidden from non-admins, but the
/// real enforcement lives in the API; this page only mirrors it.
pub async fn admin_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, PageError> {
    let token = session.require_token()?;
    let viewer = state.api.profile(token).await?;
    if !viewer.is_admin {
        return Ok(Redirect::to("/").into_response());
    }
    let users = state.api.list_users(token).await?;
    Ok(views::admin::page(&viewer, &users, None).into_response())
}

#[derive(Debug, Deserialize)]
pub struct NewUserForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    /// Checkbox: present ("on") when ticked, absent otherwise.
    #[serde(default)]
    pub is_admin: Option<String>,
}

pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NewUserForm>,
) -> Result<Response, PageError> {
    let token = session.require_token()?;
    let req = RegisterRequest {
        email: form.email,
        password: form.password,
        first_name: form.first_name,
        last_name: form.last_name,
        is_admin: form.is_admin.is_some(),
    };
    state.api.create_user(token, &req).await?;
    Ok(Redirect::to("/admin").into_response())
}

pub async fn user_action(
    State(state): State<AppState>,
    session: Session,
    Path((user_id, action)): Path<(Uuid, String)>,
) -> Result<Response, PageError> {
    let token = session.require_token()?;
    match action.as_str() {
        "promote" => state.api.promote_user(token, user_id).await?,
        "demote" => state.api.demote_user(token, user_id).await?,
        "delete" => state.api.delete_user(token, user_id).await?,
        _ => return Err(PageError::validation("Unknown user action")),
    }
    Ok(Redirect::to("/admin").into_response())
}

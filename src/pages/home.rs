use axum::extract::{Query, State};
use maud::Markup;
use serde::Deserialize;

use crate::{error::PageError, session::Session, views, AppState};

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// `all` clears the filter; anything else parses as the price ceiling.
    pub max_price: Option<String>,
}

pub async fn home(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<HomeQuery>,
) -> Result<Markup, PageError> {
    let max_price = query
        .max_price
        .as_deref()
        .filter(|v| *v != "all")
        .and_then(|v| v.parse::<f64>().ok());

    // A stale token renders the logged-out navigation rather than an error.
    let mut viewer = None;
    if let Some(token) = session.token() {
        viewer = state.api.profile(token).await.ok();
    }

    let places = state.api.list_places(max_price).await?;
    Ok(views::home::page(&places, viewer.as_ref(), max_price, None))
}

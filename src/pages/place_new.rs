use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use maud::Markup;
use uuid::Uuid;

use crate::{
    error::PageError,
    models::place::NewPlaceRequest,
    session::Session,
    views::{self, place_new::PlaceFormValues, Notice},
    AppState,
};

pub async fn new_place_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Markup, PageError> {
    let token = session.require_token()?;
    let viewer = state.api.profile(token).await?;
    let amenities = state.api.list_amenities().await?;
    Ok(views::place_new::page(
        Some(&viewer),
        &amenities,
        None,
        PlaceFormValues::default(),
    ))
}

/// The amenity checklist posts repeated `amenities` keys, so the body is
/// taken as raw pairs instead of a struct.
pub async fn create_place(
    State(state): State<AppState>,
    session: Session,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, PageError> {
    let token = session.require_token()?;

    let mut title = String::new();
    let mut description = String::new();
    let mut price_raw = String::new();
    let mut latitude_raw = String::new();
    let mut longitude_raw = String::new();
    let mut amenity_ids: Vec<Uuid> = Vec::new();
    for (key, value) in &fields {
        match key.as_str() {
            "title" => title = value.clone(),
            "description" => description = value.clone(),
            "price" => price_raw = value.clone(),
            "latitude" => latitude_raw = value.clone(),
            "longitude" => longitude_raw = value.clone(),
            "amenities" => {
                if let Ok(id) = value.parse() {
                    amenity_ids.push(id);
                }
            }
            _ => {}
        }
    }

    let price = price_raw.trim().parse::<f64>().ok();
    let latitude = latitude_raw.trim().parse::<f64>().ok();
    let longitude = longitude_raw.trim().parse::<f64>().ok();

    // Local validation, mirroring what the API will enforce anyway.
    let problem = if title.trim().is_empty() {
        Some("Title is required")
    } else if description.trim().is_empty() {
        Some("Description is required")
    } else if !price.is_some_and(|p| p > 0.0) {
        Some("Price must be a positive number")
    } else if !latitude.is_some_and(|l| (-90.0..=90.0).contains(&l)) {
        Some("Latitude must be between -90 and 90")
    } else if !longitude.is_some_and(|l| (-180.0..=180.0).contains(&l)) {
        Some("Longitude must be between -180 and 180")
    } else {
        None
    };

    let values = PlaceFormValues {
        title: &title,
        description: &description,
        price: &price_raw,
        latitude: &latitude_raw,
        longitude: &longitude_raw,
    };

    if let Some(message) = problem {
        let viewer = state.api.profile(token).await.ok();
        let amenities = state.api.list_amenities().await.unwrap_or_default();
        let notice = Notice::error(message);
        return Ok(
            views::place_new::page(viewer.as_ref(), &amenities, Some(&notice), values)
                .into_response(),
        );
    }

    let req = NewPlaceRequest {
        title: title.clone(),
        description: description.clone(),
        price: price.unwrap_or(0.0),
        latitude: latitude.unwrap_or(0.0),
        longitude: longitude.unwrap_or(0.0),
        amenities: amenity_ids,
    };
    match state.api.create_place(token, &req).await {
        Ok(place) => Ok(Redirect::to(&format!("/places/{}", place.id)).into_response()),
        Err(PageError::Api { message, .. }) => {
            let viewer = state.api.profile(token).await.ok();
            let amenities = state.api.list_amenities().await.unwrap_or_default();
            let notice = Notice::error(message);
            Ok(
                views::place_new::page(viewer.as_ref(), &amenities, Some(&notice), values)
                    .into_response(),
            )
        }
        Err(err) => Err(err),
    }
}

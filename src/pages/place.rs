//! Place-details page controller: details, reviews, bookings, the
//! availability calendar, and the booking/review submission flows.
//!
//! The availability index is rebuilt from a fresh bookings snapshot on every
//! render; a successful booking redirects back to the page, so the reload is
//! the cache-invalidation strategy.

use axum::{
    extract::{Form, Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Local;
use maud::Markup;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    api::BookingAction,
    availability::{parse_day, AvailabilityIndex, DATE_FMT},
    calendar::{BookingCalendar, Selection},
    error::PageError,
    models::{
        booking::{Booking, NewBookingRequest},
        review::NewReviewRequest,
    },
    session::Session,
    views::{
        self,
        place::{BookingFormValues, PlaceView},
        Notice,
    },
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct PlaceQuery {
    pub notice: Option<String>,
}

/// Map a post-redirect notice code back to its banner.
fn notice_from_query(query: &PlaceQuery) -> Option<Notice> {
    match query.notice.as_deref()? {
        "booked" => Some(Notice::success("Your booking request has been sent")),
        "approved" => Some(Notice::success("Booking approved successfully")),
        "rejected" => Some(Notice::success("Booking rejected successfully")),
        "reviewed" => Some(Notice::success("Your review has been posted")),
        _ => None,
    }
}

pub async fn place_page(
    State(state): State<AppState>,
    session: Session,
    Path(place_id): Path<Uuid>,
    Query(query): Query<PlaceQuery>,
) -> Result<Markup, PageError> {
    render_place(&state, &session, place_id, notice_from_query(&query), None).await
}

/// Shared renderer so submission failures can re-render the page with a
/// message and, when the failure is retryable, the previous selection.
async fn render_place(
    state: &AppState,
    session: &Session,
    place_id: Uuid,
    mut notice: Option<Notice>,
    selection: Option<BookingFormValues<'_>>,
) -> Result<Markup, PageError> {
    let (place, reviews) = tokio::try_join!(
        state.api.get_place(place_id),
        state.api.list_reviews(place_id),
    )?;

    let mut viewer = None;
    let mut bookings: Vec<Booking> = Vec::new();
    if let Some(token) = session.token() {
        // A stale token degrades to the anonymous view.
        viewer = state.api.profile(token).await.ok();
        if viewer.is_some() {
            match state.api.list_bookings(token, place_id).await {
                Ok(list) => bookings = list,
                Err(err) => {
                    tracing::warn!(place = %place_id, "failed to fetch bookings: {err}");
                    if notice.is_none() {
                        notice = Some(Notice::error("Error retrieving bookings"));
                    }
                }
            }
        }
    }

    let is_owner = viewer.as_ref().is_some_and(|v| v.id == place.owner.id);
    let calendar = (viewer.is_some() && !is_owner).then(|| {
        let today = Local::now().date_naive();
        BookingCalendar::new(AvailabilityIndex::build(&bookings, today), place.price)
    });

    Ok(views::place::page(&PlaceView {
        place: &place,
        reviews: &reviews,
        bookings: &bookings,
        calendar: calendar.as_ref(),
        viewer: viewer.as_ref(),
        is_owner,
        notice: notice.as_ref(),
        selection,
    }))
}

#[derive(Debug, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub message: String,
}

pub async fn submit_booking(
    State(state): State<AppState>,
    session: Session,
    Path(place_id): Path<Uuid>,
    Form(form): Form<BookingForm>,
) -> Result<Response, PageError> {
    let token = session.require_token()?;

    let start_raw = form.start_date.trim();
    let end_raw = form.end_date.trim();
    if start_raw.is_empty() || end_raw.is_empty() {
        let notice = Notice::error("Please select a complete period");
        let page = render_place(&state, &session, place_id, Some(notice), None).await?;
        return Ok(page.into_response());
    }
    let (Some(start), Some(end)) = (parse_day(start_raw), parse_day(end_raw)) else {
        let notice = Notice::error("Please select a complete period");
        let page = render_place(&state, &session, place_id, Some(notice), None).await?;
        return Ok(page.into_response());
    };
    let (start, end) = if start <= end { (start, end) } else { (end, start) };

    let kept = BookingFormValues {
        start_date: start_raw,
        end_date: end_raw,
        message: &form.message,
    };

    // Zero nights is rejected locally, before anything goes to the API.
    if start == end {
        let notice = Notice::error("A booking must cover at least one night");
        let page = render_place(&state, &session, place_id, Some(notice), Some(kept)).await?;
        return Ok(page.into_response());
    }

    // Overlap check runs against a fresh bookings snapshot.
    let place = state.api.get_place(place_id).await?;
    let bookings = state.api.list_bookings(token, place_id).await?;
    let today = Local::now().date_naive();
    let calendar = BookingCalendar::new(AvailabilityIndex::build(&bookings, today), place.price);

    let quote = match calendar.selection_changed(Some(start), Some(end)) {
        Selection::Quoted(quote) => quote,
        _ => {
            // Overlap clears the in-progress selection.
            let notice = Notice::error("These dates are already booked");
            let page = render_place(&state, &session, place_id, Some(notice), None).await?;
            return Ok(page.into_response());
        }
    };

    let req = NewBookingRequest {
        start_date: start.format(DATE_FMT).to_string(),
        end_date: end.format(DATE_FMT).to_string(),
        message: form.message.clone(),
    };
    match state.api.create_booking(token, place_id, &req).await {
        Ok(()) => {
            tracing::info!(
                place = %place_id,
                nights = quote.nights,
                total = quote.total,
                "booking request sent"
            );
            Ok(Redirect::to(&format!("/places/{place_id}?notice=booked")).into_response())
        }
        Err(err @ (PageError::Api { .. } | PageError::Upstream(_))) => {
            tracing::warn!(place = %place_id, "booking creation failed: {err}");
            let message = match &err {
                PageError::Api { message, .. } => message.clone(),
                _ => "Error during booking".to_string(),
            };
            // Selection is preserved so the user can retry without
            // reselecting dates.
            let notice = Notice::error(message);
            let page = render_place(&state, &session, place_id, Some(notice), Some(kept)).await?;
            Ok(page.into_response())
        }
        Err(err) => Err(err),
    }
}

pub async fn update_booking(
    State(state): State<AppState>,
    session: Session,
    Path((place_id, booking_id, action)): Path<(Uuid, Uuid, String)>,
) -> Result<Response, PageError> {
    let token = session.require_token()?;
    let action = match action.as_str() {
        "confirm" => BookingAction::Confirm,
        "reject" => BookingAction::Reject,
        _ => return Err(PageError::validation("Unknown booking action")),
    };
    state
        .api
        .update_booking(token, place_id, booking_id, action)
        .await?;
    let notice = match action {
        BookingAction::Confirm => "approved",
        BookingAction::Reject => "rejected",
    };
    Ok(Redirect::to(&format!("/places/{place_id}?notice={notice}")).into_response())
}

#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    pub rating: u8,
    #[serde(default)]
    pub text: String,
}

pub async fn submit_review(
    State(state): State<AppState>,
    session: Session,
    Path(place_id): Path<Uuid>,
    Form(form): Form<ReviewForm>,
) -> Result<Response, PageError> {
    let token = session.require_token()?;

    if !(1..=5).contains(&form.rating) {
        let notice = Notice::error("Rating must be between 1 and 5");
        let page = render_place(&state, &session, place_id, Some(notice), None).await?;
        return Ok(page.into_response());
    }
    if form.text.trim().is_empty() {
        let notice = Notice::error("Review text is required");
        let page = render_place(&state, &session, place_id, Some(notice), None).await?;
        return Ok(page.into_response());
    }

    let req = NewReviewRequest {
        rating: form.rating,
        text: form.text,
    };
    match state.api.create_review(token, place_id, &req).await {
        Ok(()) => Ok(Redirect::to(&format!("/places/{place_id}?notice=reviewed")).into_response()),
        Err(PageError::Api { message, .. }) => {
            let notice = Notice::error(message);
            let page = render_place(&state, &session, place_id, Some(notice), None).await?;
            Ok(page.into_response())
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(notice: Option<&str>) -> PlaceQuery {
        PlaceQuery {
            notice: notice.map(str::to_string),
        }
    }

    #[test]
    fn test_known_notice_codes_map_to_banners() {
        for code in ["booked", "approved", "rejected", "reviewed"] {
            assert!(notice_from_query(&query(Some(code))).is_some());
        }
    }

    #[test]
    fn test_unknown_notice_code_is_ignored() {
        assert!(notice_from_query(&query(Some("whatever"))).is_none());
        assert!(notice_from_query(&query(None)).is_none());
    }
}

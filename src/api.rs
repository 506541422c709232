//! Thin client over the booking REST API.
//!
//! One shared `reqwest::Client`; the bearer token comes from the caller's
//! session and is attached per request. Non-2xx responses are surfaced as
//! `PageError::Api` with whatever `error` message the API body carried.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::PageError;
use crate::models::{
    booking::{Booking, NewBookingRequest},
    place::{Amenity, NewPlaceRequest, Place},
    review::{NewReviewRequest, Review},
    user::{LoginRequest, RegisterRequest, TokenResponse, UserProfile},
};

/// Owner decision on a pending booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Confirm,
    Reject,
}

impl BookingAction {
    fn path_segment(&self) -> &'static str {
        match self {
            BookingAction::Confirm => "confirm",
            BookingAction::Reject => "reject",
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    fn with_token(req: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, PageError> {
        let req = Self::with_token(self.http.get(self.url(path)), token);
        decode(req.send().await?).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, PageError> {
        let req = Self::with_token(self.http.post(self.url(path)), token).json(body);
        decode(req.send().await?).await
    }

    async fn post_empty(&self, path: &str, token: &str) -> Result<(), PageError> {
        let req = self.http.post(self.url(path)).bearer_auth(token);
        check_status(req.send().await?).await
    }

    async fn delete_empty(&self, path: &str, token: &str) -> Result<(), PageError> {
        let req = self.http.delete(self.url(path)).bearer_auth(token);
        check_status(req.send().await?).await
    }

    // Auth

    pub async fn login(&self, email: &str, password: &str) -> Result<String, PageError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: TokenResponse = self.post_json("/auth/login", None, &body).await?;
        Ok(resp.token)
    }

    pub async fn register(&self, req: &RegisterRequest) -> Result<String, PageError> {
        let resp: TokenResponse = self.post_json("/auth/register", None, req).await?;
        Ok(resp.token)
    }

    pub async fn profile(&self, token: &str) -> Result<UserProfile, PageError> {
        self.get_json("/auth/profile", Some(token)).await
    }

    // Places

    pub async fn list_places(&self, max_price: Option<f64>) -> Result<Vec<Place>, PageError> {
        let path = match max_price {
            Some(max) => format!("/places?max_price={max}"),
            None => "/places".to_string(),
        };
        self.get_json(&path, None).await
    }

    pub async fn get_place(&self, place_id: Uuid) -> Result<Place, PageError> {
        self.get_json(&format!("/places/{place_id}"), None).await
    }

    pub async fn create_place(
        &self,
        token: &str,
        req: &NewPlaceRequest,
    ) -> Result<Place, PageError> {
        self.post_json("/places", Some(token), req).await
    }

    pub async fn list_amenities(&self) -> Result<Vec<Amenity>, PageError> {
        self.get_json("/amenities", None).await
    }

    // Reviews

    pub async fn list_reviews(&self, place_id: Uuid) -> Result<Vec<Review>, PageError> {
        self.get_json(&format!("/places/{place_id}/reviews"), None)
            .await
    }

    pub async fn create_review(
        &self,
        token: &str,
        place_id: Uuid,
        req: &NewReviewRequest,
    ) -> Result<(), PageError> {
        let _: serde_json::Value = self
            .post_json(&format!("/places/{place_id}/reviews"), Some(token), req)
            .await?;
        Ok(())
    }

    // Bookings

    pub async fn list_bookings(
        &self,
        token: &str,
        place_id: Uuid,
    ) -> Result<Vec<Booking>, PageError> {
        self.get_json(&format!("/places/{place_id}/bookings"), Some(token))
            .await
    }

    pub async fn create_booking(
        &self,
        token: &str,
        place_id: Uuid,
        req: &NewBookingRequest,
    ) -> Result<(), PageError> {
        let _: serde_json::Value = self
            .post_json(&format!("/places/{place_id}/bookings"), Some(token), req)
            .await?;
        Ok(())
    }

    pub async fn update_booking(
        &self,
        token: &str,
        place_id: Uuid,
        booking_id: Uuid,
        action: BookingAction,
    ) -> Result<(), PageError> {
        self.post_empty(
            &format!(
                "/places/{place_id}/bookings/{booking_id}/{}",
                action.path_segment()
            ),
            token,
        )
        .await
    }

    // Admin user management

    pub async fn list_users(&self, token: &str) -> Result<Vec<UserProfile>, PageError> {
        self.get_json("/admin/users", Some(token)).await
    }

    pub async fn create_user(&self, token: &str, req: &RegisterRequest) -> Result<(), PageError> {
        let _: serde_json::Value = self.post_json("/admin/users", Some(token), req).await?;
        Ok(())
    }

    pub async fn promote_user(&self, token: &str, user_id: Uuid) -> Result<(), PageError> {
        self.post_empty(&format!("/admin/users/{user_id}/promote"), token)
            .await
    }

    pub async fn demote_user(&self, token: &str, user_id: Uuid) -> Result<(), PageError> {
        self.post_empty(&format!("/admin/users/{user_id}/demote"), token)
            .await
    }

    pub async fn delete_user(&self, token: &str, user_id: Uuid) -> Result<(), PageError> {
        self.delete_empty(&format!("/admin/users/{user_id}"), token)
            .await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, PageError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp.json::<T>().await?)
    } else {
        Err(api_error(status.as_u16(), resp).await)
    }
}

async fn check_status(resp: Response) -> Result<(), PageError> {
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(api_error(status.as_u16(), resp).await)
    }
}

/// Pull the `error` field out of an API failure body, if there is one.
async fn api_error(status: u16, resp: Response) -> PageError {
    let message = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("API request failed with status {status}"));
    PageError::api(status, message)
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::PersonRef;

/// Wire status of a booking. Only `Confirmed` blocks calendar availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Rejected",
            BookingStatus::Completed => "Completed",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }
}

/// Booking as returned by `GET /places/{id}/bookings`.
///
/// Dates stay as raw strings here: the availability index parses and
/// normalizes them, and a record with a malformed or missing date is skipped
/// there instead of failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    pub status: BookingStatus,
    #[serde(default)]
    pub message: Option<String>,
    pub user: PersonRef,
}

#[derive(Debug, Serialize)]
pub struct NewBookingRequest {
    /// ISO calendar date, `YYYY-MM-DD`.
    pub start_date: String,
    pub end_date: String,
    pub message: String,
}

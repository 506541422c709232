use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::PersonRef;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub text: String,
    pub rating: u8,
    pub user: PersonRef,
    /// Timestamp string from the API; only the calendar day is displayed.
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewReviewRequest {
    pub rating: u8,
    pub text: String,
}

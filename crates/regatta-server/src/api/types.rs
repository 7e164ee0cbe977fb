//! API request and response types.

use registration_store::Registration;
use serde::{Deserialize, Serialize};

/// Raw registration submission.
///
/// Every text field arrives optional so that the validator can report the
/// missing field by name instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitRequest {
    pub surname: Option<String>,
    pub firstname: Option<String>,
    pub patronymic: Option<String>,
    pub birthdate: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub rank: Option<String>,
    pub team: Option<String>,
    pub boat_class: Option<String>,
    pub phone: Option<String>,
    #[serde(default)]
    pub distances: Vec<String>,
}

/// Response after a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: String,
    pub message: String,
}

/// Full ordered snapshot for the admin listing.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub count: usize,
    pub registrations: Vec<Registration>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub registrations: usize,
}

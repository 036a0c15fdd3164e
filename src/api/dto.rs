//! Data Transfer Objects
//!
//! Request and response types for the endpoints that are not plain
//! workflow types. HTML forms post every field as text, so their inputs
//! are parsed here into the workflow requests.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::desk::{self, BookingRequest, ClientRegistration, DeskError, DeskResult};

// ============================================
// LISTING DTOs
// ============================================

/// Query parameters of the listing endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    /// Output format: json (default) or csv
    #[serde(default)]
    pub format: Option<String>,
}

// ============================================
// WRITE DTOs
// ============================================

/// Client creation response
#[derive(Debug, Serialize, Deserialize)]
pub struct ClientCreatedResponse {
    /// Generated client id
    pub id: i64,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: healthy or unhealthy
    pub status: String,
    /// Store status
    pub store: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

// ============================================
// PAGE DTOs
// ============================================

/// Query parameters of the dashboard page
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// Tab slug, defaults to the first tab
    #[serde(default)]
    pub tab: Option<String>,
}

/// Booking form as posted by the page
#[derive(Debug, Default, Deserialize)]
pub struct BookingFormInput {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub arrival: String,
    #[serde(default)]
    pub departure: String,
}

impl BookingFormInput {
    pub fn into_request(self) -> DeskResult<BookingRequest> {
        Ok(BookingRequest {
            client_id: parse_id("client", &self.client_id)?,
            room_id: parse_id("room", &self.room_id)?,
            arrival: parse_date("arrival", &self.arrival)?,
            departure: parse_date("departure", &self.departure)?,
        })
    }
}

/// Client form as posted by the page
#[derive(Debug, Default, Deserialize)]
pub struct ClientFormInput {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl ClientFormInput {
    /// Blank fields, postal code included, are reported together before
    /// the postal code is parsed
    pub fn into_registration(self) -> DeskResult<ClientRegistration> {
        let missing: Vec<&str> = [
            ("full name", &self.full_name),
            ("address", &self.address),
            ("city", &self.city),
            ("postal code", &self.postal_code),
            ("email", &self.email),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(desk::missing_fields(&missing));
        }

        let postal_code = self
            .postal_code
            .trim()
            .parse()
            .map_err(|_| DeskError::validation("Postal code must be a number"))?;

        Ok(ClientRegistration {
            full_name: self.full_name,
            address: self.address,
            city: self.city,
            postal_code,
            email: self.email,
            phone: self.phone,
        })
    }
}

fn parse_id(what: &str, value: &str) -> DeskResult<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| DeskError::validation(format!("Select a {}", what)))
}

fn parse_date(what: &str, value: &str) -> DeskResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| DeskError::validation(format!("Invalid {} date: {}", what, value)))
}

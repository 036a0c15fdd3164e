//! Core data types for the hotel store
//!
//! Rows as they come out of the fixed listing queries, the choices offered
//! by the booking form, and the inputs of the two write operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A hotel, identified by the city it stands in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: i64,
    pub city: String,
}

/// A registered client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: i64,
    pub email: String,
    pub phone: String,
}

/// Availability of a room, stored as a boolean-as-integer flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
}

impl RoomStatus {
    /// Decode the `Binaire` column: 1 is available, anything else is occupied
    pub fn from_flag(flag: i64) -> Self {
        if flag == 1 {
            RoomStatus::Available
        } else {
            RoomStatus::Occupied
        }
    }

    /// Encode back into the `Binaire` column
    pub fn flag(self) -> i64 {
        match self {
            RoomStatus::Available => 1,
            RoomStatus::Occupied => 0,
        }
    }

    pub fn is_available(self) -> bool {
        self == RoomStatus::Available
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Available => write!(f, "Available"),
            RoomStatus::Occupied => write!(f, "Occupied"),
        }
    }
}

/// A room joined with its hotel and room type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomListing {
    pub id: i64,
    pub number: i64,
    pub floor: i64,
    pub status: RoomStatus,
    pub hotel_city: String,
    pub room_type: String,
    pub rate: f64,
}

/// A reservation joined with the client's name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationListing {
    pub id: i64,
    pub client_name: String,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
}

/// A client evaluation joined with the client's name
///
/// The date is kept as stored; pre-existing data files are not guaranteed
/// to hold ISO dates in this column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationListing {
    pub id: i64,
    pub client_name: String,
    pub rating: i64,
    pub comment: String,
    pub date: String,
}

/// A client offered in the booking form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientChoice {
    pub id: i64,
    pub full_name: String,
}

/// An available room offered in the booking form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomChoice {
    pub id: i64,
    pub number: i64,
}

/// Validated input of a client insert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClient {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: i64,
    pub email: String,
    pub phone: String,
}

/// Validated input of a booking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewReservation {
    pub client_id: i64,
    pub room_id: i64,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
}

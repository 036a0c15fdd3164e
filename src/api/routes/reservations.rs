//! Reservation Routes
//!
//! - GET /api/v1/reservations/options - Booking form choices
//! - POST /api/v1/reservations - Book a room

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::desk::{self, BookingForm, BookingReceipt, BookingRequest};

/// GET /api/v1/reservations/options
///
/// Clients and available rooms. Responds 409 with the blocking warning
/// when either set is empty.
pub async fn reservation_options(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BookingForm>> {
    let form = desk::booking_form(state.store.as_ref())?;
    Ok(Json(form))
}

/// POST /api/v1/reservations
///
/// Validate the dates, then insert the reservation, link the room and mark
/// it occupied in one transaction.
pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookingRequest>,
) -> ApiResult<(StatusCode, Json<BookingReceipt>)> {
    let receipt = desk::book(state.store.as_ref(), &req, state.today())?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

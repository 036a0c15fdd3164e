//! Listing Routes
//!
//! Read-only views, one fixed query each.
//!
//! - GET /api/v1/hotels
//! - GET /api/v1/clients
//! - GET /api/v1/rooms
//! - GET /api/v1/reservations
//! - GET /api/v1/evaluations
//!
//! `?format=csv` returns the same rows as a CSV attachment.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ListingParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::desk::{self, ListingView};

/// GET /api/v1/hotels
pub async fn hotels(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingParams>,
) -> ApiResult<Response> {
    respond(&state, ListingView::Hotels, &params)
}

/// GET /api/v1/clients
pub async fn clients(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingParams>,
) -> ApiResult<Response> {
    respond(&state, ListingView::Clients, &params)
}

/// GET /api/v1/rooms
pub async fn rooms(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingParams>,
) -> ApiResult<Response> {
    respond(&state, ListingView::Rooms, &params)
}

/// GET /api/v1/reservations
pub async fn reservations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingParams>,
) -> ApiResult<Response> {
    respond(&state, ListingView::Reservations, &params)
}

/// GET /api/v1/evaluations
pub async fn evaluations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingParams>,
) -> ApiResult<Response> {
    respond(&state, ListingView::Evaluations, &params)
}

fn respond(state: &AppState, view: ListingView, params: &ListingParams) -> ApiResult<Response> {
    let format = params
        .format
        .as_deref()
        .unwrap_or("json")
        .to_lowercase();

    let listing = desk::load(state.store.as_ref(), view)?;

    match format.as_str() {
        "json" => Ok(Json(listing).into_response()),
        "csv" => {
            let body = desk::to_csv(&listing.table())?;
            Ok((
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}.csv\"", view.slug()),
                    ),
                ],
                body,
            )
                .into_response())
        }
        other => Err(ApiError::Validation(format!(
            "Invalid format: {}. Use json or csv",
            other
        ))),
    }
}

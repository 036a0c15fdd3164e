//! Client Routes
//!
//! - POST /api/v1/clients - Register a client

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::ClientCreatedResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::desk::{self, ClientRegistration};

/// POST /api/v1/clients
pub async fn create_client(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClientRegistration>,
) -> ApiResult<(StatusCode, Json<ClientCreatedResponse>)> {
    let id = desk::register_client(state.store.as_ref(), &req)?;
    Ok((StatusCode::CREATED, Json(ClientCreatedResponse { id })))
}

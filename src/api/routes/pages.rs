//! Page Routes
//!
//! The HTML dashboard and its two forms.
//!
//! - GET / - Dashboard, `?tab=<slug>` selects the tab
//! - POST /reservations/new - Booking form submission
//! - POST /clients/new - Client form submission
//!
//! Form submissions re-render the page on their own tab with the outcome
//! as a notice. Errors never end the session; the status code follows the
//! JSON API for the same failure.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use std::sync::Arc;

use crate::api::dto::{BookingFormInput, ClientFormInput, PageParams};
use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::desk::{self, DeskError};
use crate::render::{self, Notice, Tab};

/// GET /
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> (StatusCode, Html<String>) {
    let requested = params.tab.as_deref().map(|slug| (slug, Tab::from_slug(slug)));

    let (status, tab, notice) = match requested {
        None => (StatusCode::OK, Tab::default(), None),
        Some((_, Some(tab))) => (StatusCode::OK, tab, None),
        Some((slug, None)) => (
            StatusCode::NOT_FOUND,
            Tab::default(),
            Some(Notice::Error(format!("Unknown tab: {}", slug))),
        ),
    };

    render_page(&state, status, tab, notice)
}

/// POST /reservations/new
pub async fn submit_reservation(
    State(state): State<Arc<AppState>>,
    Form(input): Form<BookingFormInput>,
) -> (StatusCode, Html<String>) {
    let outcome = input
        .into_request()
        .and_then(|request| desk::book(state.store.as_ref(), &request, state.today()));

    let (status, notice) = match outcome {
        Ok(receipt) => (
            StatusCode::OK,
            Notice::Success(format!(
                "Reservation added (ID: {})",
                receipt.reservation_id
            )),
        ),
        Err(e) => failure_notice(e),
    };

    render_page(&state, status, Tab::NewReservation, Some(notice))
}

/// POST /clients/new
pub async fn submit_client(
    State(state): State<Arc<AppState>>,
    Form(input): Form<ClientFormInput>,
) -> (StatusCode, Html<String>) {
    let outcome = input
        .into_registration()
        .and_then(|registration| desk::register_client(state.store.as_ref(), &registration));

    let (status, notice) = match outcome {
        Ok(id) => (
            StatusCode::OK,
            Notice::Success(format!("Client added (ID: {})", id)),
        ),
        Err(e) => failure_notice(e),
    };

    render_page(&state, status, Tab::NewClient, Some(notice))
}

fn failure_notice(err: DeskError) -> (StatusCode, Notice) {
    let notice = match &err {
        DeskError::Validation(message) => Notice::Error(message.clone()),
        DeskError::MissingPrerequisite(missing) => Notice::Warning(missing.to_string()),
        other => Notice::Error(format!("An error occurred: {}", other)),
    };

    tracing::warn!(kind = err.kind(), error = %err, "Form submission rejected");

    (ApiError::from(err).status(), notice)
}

fn render_page(
    state: &AppState,
    status: StatusCode,
    tab: Tab,
    notice: Option<Notice>,
) -> (StatusCode, Html<String>) {
    let page = render::dashboard(state.store.as_ref(), tab, notice.as_ref(), state.today());
    (status, Html(page.into_string()))
}

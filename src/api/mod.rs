//! Dashboard HTTP server
//!
//! HTML dashboard and JSON API over the hotel store, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Dashboard with seven tabs (`?tab=<slug>`)
//! - `POST /reservations/new` - Booking form
//! - `POST /clients/new` - Client form
//!
//! ## Listings
//! - `GET /api/v1/hotels`
//! - `GET /api/v1/clients`
//! - `GET /api/v1/rooms`
//! - `GET /api/v1/reservations`
//! - `GET /api/v1/evaluations`
//!
//! ## Writes
//! - `GET /api/v1/reservations/options` - Booking form choices
//! - `POST /api/v1/reservations` - Book a room
//! - `POST /api/v1/clients` - Register a client
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use hotel_dashboard::api::{serve, AppState};
//! use hotel_dashboard::config::ApiConfig;
//! use hotel_dashboard::store::SqliteStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(SqliteStore::open("hotel.db")?);
//!     let config = ApiConfig::default();
//!
//!     serve(AppState::new(store, config.clone()), &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route("/", get(routes::pages::dashboard))
        .route("/reservations/new", post(routes::pages::submit_reservation))
        .route("/clients/new", post(routes::pages::submit_client));

    let api_routes = Router::new()
        .route("/hotels", get(routes::listings::hotels))
        .route(
            "/clients",
            get(routes::listings::clients).post(routes::clients::create_client),
        )
        .route("/rooms", get(routes::listings::rooms))
        .route(
            "/reservations",
            get(routes::listings::reservations).post(routes::reservations::create_reservation),
        )
        .route(
            "/reservations/options",
            get(routes::reservations::reservation_options),
        )
        .route("/evaluations", get(routes::listings::evaluations))
        .layer(CorsLayer::permissive());

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Hotel dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Hotel dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
pub(crate) async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::{ClientCreatedResponse, HealthResponse};
    use crate::store::{seed_demo, HotelStore, SqliteStore};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use chrono::{Duration, Local};
    use serde::de::DeserializeOwned;
    use tower::util::ServiceExt;

    fn create_test_app(seed: bool) -> (Router, Arc<SqliteStore>) {
        let store = Arc::new(SqliteStore::in_memory().unwrap());
        if seed {
            seed_demo(&store).unwrap();
        }

        let state = AppState::new(store.clone(), ApiConfig::default());
        (build_router(state), store)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: String) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn post_form(app: Router, uri: &str, body: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json<T: DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn booking_json(client_id: i64, room_id: i64, arrival_in: i64, departure_in: i64) -> String {
        let today = Local::now().date_naive();
        serde_json::json!({
            "client_id": client_id,
            "room_id": room_id,
            "arrival": (today + Duration::days(arrival_in)).to_string(),
            "departure": (today + Duration::days(departure_in)).to_string(),
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _store) = create_test_app(false);
        let response = get(app, "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (app, _store) = create_test_app(false);
        let response = get(app, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _store) = create_test_app(false);

        let response = get(app, "/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        let health: HealthResponse = body_json(response).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.store, "ok");
    }

    #[tokio::test]
    async fn test_list_rooms_json() {
        let (app, _store) = create_test_app(true);

        let response = get(app, "/api/v1/rooms").await;

        assert_eq!(response.status(), StatusCode::OK);
        let rooms: serde_json::Value = body_json(response).await;
        assert_eq!(rooms.as_array().unwrap().len(), 5);
        assert_eq!(rooms[0]["status"], "available");
    }

    #[tokio::test]
    async fn test_list_hotels_csv() {
        let (app, _store) = create_test_app(true);

        let response = get(app, "/api/v1/hotels?format=csv").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        assert_eq!(body_text(response).await, "Id,City\n1,Paris\n2,Lyon\n");
    }

    #[tokio::test]
    async fn test_list_invalid_format() {
        let (app, _store) = create_test_app(true);
        let response = get(app, "/api/v1/hotels?format=xml").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reservation_options_without_clients() {
        let (app, _store) = create_test_app(false);

        let response = get(app, "/api/v1/reservations/options").await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(body_text(response).await.contains("No client registered"));
    }

    #[tokio::test]
    async fn test_reservation_options() {
        let (app, _store) = create_test_app(true);

        let response = get(app, "/api/v1/reservations/options").await;

        assert_eq!(response.status(), StatusCode::OK);
        let form: serde_json::Value = body_json(response).await;
        assert_eq!(form["clients"].as_array().unwrap().len(), 1);
        assert_eq!(form["clients"][0]["full_name"], "Alice Martin");
        assert_eq!(form["rooms"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_create_reservation() {
        let (app, store) = create_test_app(true);

        let response = post_json(app, "/api/v1/reservations", booking_json(1, 2, 1, 3)).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let receipt: serde_json::Value = body_json(response).await;
        assert_eq!(receipt["room_id"], 2);
        assert_eq!(receipt["nights"], 2);

        let rooms = store.rooms().unwrap();
        let room = rooms.iter().find(|r| r.id == 2).unwrap();
        assert!(!room.status.is_available());
        assert_eq!(store.reservations().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_reservation_reversed_dates() {
        let (app, store) = create_test_app(true);

        let response = post_json(app, "/api/v1/reservations", booking_json(1, 2, 5, 1)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.reservations().unwrap().is_empty());
        assert_eq!(store.available_rooms().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_create_reservation_occupied_room() {
        let (app, store) = create_test_app(true);

        let first = post_json(app.clone(), "/api/v1/reservations", booking_json(1, 2, 1, 3)).await;
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = post_json(app, "/api/v1/reservations", booking_json(1, 2, 4, 6)).await;

        assert_eq!(second.status(), StatusCode::CONFLICT);
        assert_eq!(store.reservations().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_reservation_unknown_client() {
        let (app, _store) = create_test_app(true);

        let response = post_json(app, "/api/v1/reservations", booking_json(99, 2, 1, 3)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_reservation_invalid_json() {
        let (app, _store) = create_test_app(true);

        let response = post_json(app, "/api/v1/reservations", "not json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_client() {
        let (app, store) = create_test_app(false);
        let body = serde_json::json!({
            "full_name": "Bob Durand",
            "address": "3 avenue Foch",
            "city": "Lyon",
            "postal_code": 69006,
            "email": "bob@example.com",
            "phone": "0607080910",
        })
        .to_string();

        let response = post_json(app, "/api/v1/clients", body).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let created: ClientCreatedResponse = body_json(response).await;
        let clients = store.clients().unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id, created.id);
        assert_eq!(clients[0].full_name, "Bob Durand");
    }

    #[tokio::test]
    async fn test_create_client_blank_field() {
        let (app, store) = create_test_app(false);
        let body = serde_json::json!({
            "full_name": "Bob Durand",
            "address": "",
            "city": "Lyon",
            "postal_code": 69006,
            "email": "bob@example.com",
            "phone": "0607080910",
        })
        .to_string();

        let response = post_json(app, "/api/v1/clients", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.clients().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dashboard_page() {
        let (app, _store) = create_test_app(true);

        let response = get(app, "/?tab=rooms").await;

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("<h2>Rooms</h2>"));
        assert!(page.contains("<td>Available</td>"));
    }

    #[tokio::test]
    async fn test_dashboard_unknown_tab() {
        let (app, _store) = create_test_app(true);

        let response = get(app, "/?tab=spa").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Unknown tab: spa"));
    }

    #[tokio::test]
    async fn test_reservation_form_submission() {
        let (app, store) = create_test_app(true);
        let today = Local::now().date_naive();
        let body = format!(
            "client_id=1&room_id=3&arrival={}&departure={}",
            today + Duration::days(2),
            today + Duration::days(4)
        );

        let response = post_form(app, "/reservations/new", &body).await;

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("Reservation added (ID: "));

        let reservations = store.reservations().unwrap();
        assert_eq!(reservations.len(), 1);
        assert_eq!(reservations[0].client_name, "Alice Martin");
    }

    #[tokio::test]
    async fn test_reservation_form_reversed_dates() {
        let (app, store) = create_test_app(true);
        let today = Local::now().date_naive();
        let body = format!(
            "client_id=1&room_id=3&arrival={}&departure={}",
            today + Duration::days(5),
            today + Duration::days(1)
        );

        let response = post_form(app, "/reservations/new", &body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response)
            .await
            .contains("Departure date must be after the arrival date"));
        assert!(store.reservations().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_client_form_submission() {
        let (app, store) = create_test_app(false);
        let body = "full_name=Chlo%C3%A9+Petit&address=5+quai+Rambaud&city=Lyon\
                    &postal_code=69002&email=chloe%40example.com&phone=0478000000";

        let response = post_form(app, "/clients/new", body).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Client added (ID: "));

        let clients = store.clients().unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].full_name, "Chloé Petit");
        assert_eq!(clients[0].email, "chloe@example.com");
    }

    #[tokio::test]
    async fn test_client_form_missing_fields() {
        let (app, store) = create_test_app(false);

        let response = post_form(app, "/clients/new", "full_name=&postal_code=75001").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response)
            .await
            .contains("All fields must be filled in"));
        assert!(store.clients().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_booking_receipt_shape() {
        let (app, _store) = create_test_app(true);

        let response = post_json(app, "/api/v1/reservations", booking_json(1, 4, 0, 1)).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        let receipt: serde_json::Value = body_json(response).await;
        let expected_keys = ["reservation_id", "client_id", "room_id", "nights"];
        for key in expected_keys {
            assert!(receipt.get(key).is_some(), "missing {}", key);
        }
    }
}

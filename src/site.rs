//! Static page server
//!
//! One route returning a fixed page. Shortly after start the page is opened
//! in the default browser unless `open_browser` is off.

use axum::{response::Html, routing::get, Router};
use std::time::Duration;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;

/// The page served at `/`
pub const INDEX_HTML: &str = include_str!("../templates/index.html");

/// GET /
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Build the single-route router
pub fn build_site_router() -> Router {
    Router::new()
        .route("/", get(index))
        .layer(TraceLayer::new_for_http())
}

/// Serve the page until a shutdown signal arrives
pub async fn serve_site(config: &SiteConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    schedule_browser(config);

    tracing::info!("Static site listening on http://{}", config.addr());

    axum::serve(listener, build_site_router())
        .with_graceful_shutdown(crate::api::shutdown_signal())
        .await
}

/// Open the site in the default browser after `open_delay_ms`
///
/// Returns `None` when the launch is disabled. A failed launch is logged
/// and otherwise ignored.
pub fn schedule_browser(config: &SiteConfig) -> Option<JoinHandle<()>> {
    let url = config.url();

    if !config.open_browser {
        tracing::info!(%url, "Browser launch disabled");
        return None;
    }

    let delay = Duration::from_millis(config.open_delay_ms);
    Some(tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        tracing::info!(%url, "Opening browser");

        let target = url.clone();
        match tokio::task::spawn_blocking(move || webbrowser::open(&target)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(%url, error = %e, "Failed to open browser"),
            Err(e) => tracing::warn!(%url, error = %e, "Browser launch task failed"),
        }
    }))
}

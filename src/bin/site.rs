//! Static page server
//!
//! Run with: cargo run --bin hotel-site
//!
//! Reads the `[site]` and `[logging]` sections of the usual config file.
//! `HOTEL_SITE_PORT` overrides the port and `HOTEL_SITE_OPEN_BROWSER=false`
//! keeps the browser closed.

use hotel_dashboard::config::Config;
use hotel_dashboard::{logging, site};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load_default();
    logging::init(&loaded.config.logging);
    loaded.log();
    let config = loaded.config;

    tracing::info!("Starting hotel site v{}", env!("CARGO_PKG_VERSION"));

    site::serve_site(&config.site).await?;
    Ok(())
}

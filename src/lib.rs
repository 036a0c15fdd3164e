//! # Hotel Dashboard
//!
//! Web dashboard over a hotel SQLite database: read-only listings of hotels,
//! clients, rooms, reservations and evaluations, plus two forms that book a
//! room or register a client.
//!
//! ## Modules
//!
//! - [`store`]: SQLite schema, listing queries and the transactional booking
//! - [`desk`]: Booking and registration workflows with input validation
//! - [`render`]: Server-rendered dashboard page
//! - [`api`]: HTTP server with Axum (pages, JSON/CSV API, health)
//! - [`site`]: Unrelated one-page static server
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hotel_dashboard::desk::{self, BookingRequest};
//! use hotel_dashboard::store::{seed_demo, SqliteStore};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SqliteStore::open("hotel.db")?;
//!     seed_demo(&store)?;
//!
//!     let today = chrono::Local::now().date_naive();
//!     let request = BookingRequest {
//!         client_id: 1,
//!         room_id: 1,
//!         arrival: today,
//!         departure: today + chrono::Duration::days(2),
//!     };
//!     let receipt = desk::book(&store, &request, today)?;
//!     println!("Reservation {} for {} nights", receipt.reservation_id, receipt.nights);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod desk;
pub mod logging;
pub mod render;
pub mod site;
pub mod store;

pub use config::Config;
pub use desk::{DeskError, DeskResult};
pub use store::{HotelStore, SqliteStore, StoreError};

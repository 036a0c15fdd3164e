//! Hotel Store
//!
//! Storage access for the dashboard:
//!
//! - **types**: Rows and write inputs (Hotel, Client, RoomListing, ...)
//! - **schema**: Table layout of `hotel.db`
//! - **sqlite**: rusqlite implementation over one shared connection
//! - **seed**: Demo fixture for an empty store
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use hotel_dashboard::store::{HotelStore, NewReservation, SqliteStore};
//! use chrono::NaiveDate;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SqliteStore::open("hotel.db")?;
//!
//!     let id = store.book_room(&NewReservation {
//!         client_id: 1,
//!         room_id: 5,
//!         arrival: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
//!         departure: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
//!     })?;
//!
//!     println!("Reservation {} created", id);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod schema;
pub mod seed;
pub mod sqlite;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use seed::{seed_demo, SeedSummary};
pub use sqlite::SqliteStore;
pub use types::{
    Client, ClientChoice, EvaluationListing, Hotel, NewClient, NewReservation,
    ReservationListing, RoomChoice, RoomListing, RoomStatus,
};

/// Storage capability used by the workflows and the HTTP layer
///
/// Reads are the fixed listing queries plus the booking form choices.
/// Writes are a single client insert and the transactional booking.
pub trait HotelStore: Send + Sync {
    /// Cheap round trip to check that the store answers
    fn ping(&self) -> StoreResult<()>;

    fn hotels(&self) -> StoreResult<Vec<Hotel>>;

    fn clients(&self) -> StoreResult<Vec<Client>>;

    /// Rooms joined with their hotel and room type
    fn rooms(&self) -> StoreResult<Vec<RoomListing>>;

    /// Reservations joined with the client's name
    fn reservations(&self) -> StoreResult<Vec<ReservationListing>>;

    /// Evaluations joined with the client's name
    fn evaluations(&self) -> StoreResult<Vec<EvaluationListing>>;

    /// Clients selectable in the booking form
    fn client_choices(&self) -> StoreResult<Vec<ClientChoice>>;

    /// Rooms whose availability flag is set
    fn available_rooms(&self) -> StoreResult<Vec<RoomChoice>>;

    /// Insert one client row, returning its generated id
    fn insert_client(&self, client: &NewClient) -> StoreResult<i64>;

    /// Insert the reservation, link the room and mark it occupied in one
    /// transaction, returning the generated reservation id
    ///
    /// Nothing is applied unless all three writes succeed.
    fn book_room(&self, booking: &NewReservation) -> StoreResult<i64>;
}

//! Front desk workflows
//!
//! Everything the dashboard does on top of the store:
//!
//! - **booking**: Create a reservation against an available room
//! - **registration**: Add a client
//! - **listing**: The five read-only views
//!
//! Each operation takes the store as `&dyn HotelStore` and returns a
//! [`DeskResult`], so the HTML pages, the JSON API and the CLI share the
//! same validation and error taxonomy.

pub mod booking;
pub mod error;
pub mod listing;
pub mod registration;

pub use booking::{book, booking_form, BookingForm, BookingReceipt, BookingRequest};
pub use error::{DeskError, DeskResult, Prerequisite};
pub use listing::{load, to_csv, Listing, ListingView, Table};
pub use registration::{missing_fields, register_client, ClientRegistration, POSTAL_CODE_MAX, POSTAL_CODE_MIN};

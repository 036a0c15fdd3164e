//! API Routes
//!
//! Route handlers organized by functionality.

pub mod clients;
pub mod health;
pub mod listings;
pub mod pages;
pub mod reservations;

//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{Local, NaiveDate};
use std::sync::Arc;
use std::time::Instant;

use crate::config::ApiConfig;
use crate::store::HotelStore;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The one store handle of the process
    pub store: Arc<dyn HotelStore>,
    /// Server configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn HotelStore>, config: ApiConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Local calendar date, the lower bound for arrival dates
    pub fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

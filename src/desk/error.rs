//! Workflow error types
//!
//! Every failure of the front desk workflows reaches the presentation
//! boundary as one of these, never as a panic.

use crate::store::StoreError;
use std::fmt;
use thiserror::Error;

/// Something the booking form needs before it can be offered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prerequisite {
    /// No client row exists
    Clients,
    /// No room has its availability flag set
    AvailableRooms,
}

impl fmt::Display for Prerequisite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prerequisite::Clients => write!(f, "No client registered"),
            Prerequisite::AvailableRooms => write!(f, "No room available"),
        }
    }
}

/// Errors returned by the front desk workflows
#[derive(Error, Debug)]
pub enum DeskError {
    /// User input rejected before any storage access
    #[error("{0}")]
    Validation(String),

    /// The booking form cannot be offered
    #[error("{0}")]
    MissingPrerequisite(Prerequisite),

    /// A listing could not be written out as CSV
    #[error("Export error: {0}")]
    Export(String),

    /// Storage failed; any transaction in flight was rolled back
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl DeskError {
    pub fn validation(message: impl Into<String>) -> Self {
        DeskError::Validation(message.into())
    }

    /// Short machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            DeskError::Validation(_) => "validation",
            DeskError::MissingPrerequisite(_) => "missing_prerequisite",
            DeskError::Export(_) => "export",
            DeskError::Storage(_) => "storage",
        }
    }
}

/// Result type for workflow operations
pub type DeskResult<T> = Result<T, DeskError>;

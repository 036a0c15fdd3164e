//! Client registration workflow

use serde::{Deserialize, Serialize};

use crate::desk::error::{DeskError, DeskResult};
use crate::store::{HotelStore, NewClient};

/// Lowest postal code accepted by the form
pub const POSTAL_CODE_MIN: i64 = 1000;
/// Highest postal code accepted by the form
pub const POSTAL_CODE_MAX: i64 = 99999;

/// Error listing the blank fields of a registration
pub fn missing_fields(names: &[&str]) -> DeskError {
    DeskError::validation(format!(
        "All fields must be filled in (missing: {})",
        names.join(", ")
    ))
}

/// A submitted client registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRegistration {
    pub full_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: i64,
    pub email: String,
    pub phone: String,
}

impl ClientRegistration {
    /// Every text field must be non-blank and the postal code in range
    ///
    /// Values are passed through unmodified.
    pub fn validate(&self) -> DeskResult<NewClient> {
        let fields = [
            ("full name", &self.full_name),
            ("address", &self.address),
            ("city", &self.city),
            ("email", &self.email),
            ("phone", &self.phone),
        ];

        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(missing_fields(&missing));
        }

        if !(POSTAL_CODE_MIN..=POSTAL_CODE_MAX).contains(&self.postal_code) {
            return Err(DeskError::validation(format!(
                "Postal code must be between {} and {}",
                POSTAL_CODE_MIN, POSTAL_CODE_MAX
            )));
        }

        Ok(NewClient {
            full_name: self.full_name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code,
            email: self.email.clone(),
            phone: self.phone.clone(),
        })
    }
}

/// Validate and insert one client row, returning its id
pub fn register_client(
    store: &dyn HotelStore,
    registration: &ClientRegistration,
) -> DeskResult<i64> {
    let client = registration.validate()?;
    let id = store.insert_client(&client)?;

    tracing::info!(client_id = id, city = %client.city, "Client registered");
    Ok(id)
}

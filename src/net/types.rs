//! Wire DTOs for the Record API and the image host.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON schema so serde output can
//! be posted as-is.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A bulk-waste listing as accepted by `POST /api/v1/bulk-waste`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkWasteRecord {
    /// Public URL of the uploaded image.
    pub image: String,
    pub name: String,
    pub description: String,
    pub quantity_available: f64,
    /// One of the unit labels offered by the form, or empty if none was chosen.
    pub quantity_unit: String,
    pub price: f64,
}

/// Successful image-host upload response. Only the HTTPS URL is consumed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ImageUploadResponse {
    pub secure_url: String,
}

/// Per-request credentials mode.
///
/// Every request states its own mode; there is no shared default to toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialsMode {
    /// Send cookies and HTTP auth with the request.
    Include,
    /// Never send ambient credentials.
    Omit,
}

#[cfg(feature = "csr")]
impl From<CredentialsMode> for web_sys::RequestCredentials {
    fn from(mode: CredentialsMode) -> Self {
        match mode {
            CredentialsMode::Include => Self::Include,
            CredentialsMode::Omit => Self::Omit,
        }
    }
}

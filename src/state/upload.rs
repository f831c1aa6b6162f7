//! Form state for the bulk-waste upload page.
//!
//! DESIGN
//! ======
//! Field edits arrive as `(name, raw value)` pairs from input events, the same
//! shape the DOM hands us. Numeric fields coerce on every edit and again when
//! the outgoing record is composed, so the wire payload never carries NaN.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::net::error::SubmitError;
use crate::net::types::BulkWasteRecord;

pub const INLINE_FAILURE_MESSAGE: &str = "Request creation failed. Please try again.";

/// Unit labels offered by the quantity dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityUnit {
    Grams,
    Kilograms,
    Tonnes,
    Units,
}

impl QuantityUnit {
    pub const ALL: [Self; 4] = [Self::Grams, Self::Kilograms, Self::Tonnes, Self::Units];

    /// Label stored in the form and sent to the backend.
    pub fn label(self) -> &'static str {
        match self {
            Self::Grams => "gms",
            Self::Kilograms => "kgs",
            Self::Tonnes => "tonns",
            Self::Units => "units",
        }
    }
}

/// Editable form fields, keyed by the input `name` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    QuantityAvailable,
    QuantityUnit,
    Price,
}

impl FormField {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "description" => Some(Self::Description),
            "quantityAvailable" => Some(Self::QuantityAvailable),
            "quantityUnit" => Some(Self::QuantityUnit),
            "price" => Some(Self::Price),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::QuantityAvailable => "quantityAvailable",
            Self::QuantityUnit => "quantityUnit",
            Self::Price => "price",
        }
    }
}

/// Parse numeric input, treating anything unparseable or non-finite as 0.
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// The listing being edited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BulkWasteForm {
    /// Remote image URL; stays empty until a submit resolves one.
    pub image: String,
    pub name: String,
    pub description: String,
    pub quantity_available: f64,
    pub quantity_unit: String,
    pub price: f64,
}

impl BulkWasteForm {
    pub fn set_field(&mut self, field: FormField, raw: &str) {
        match field {
            FormField::Name => self.name = raw.to_owned(),
            FormField::Description => self.description = raw.to_owned(),
            FormField::QuantityUnit => self.quantity_unit = raw.to_owned(),
            FormField::QuantityAvailable => self.quantity_available = coerce_number(raw),
            FormField::Price => self.price = coerce_number(raw),
        }
    }

    /// Apply an edit by input name. Returns `false` for unknown names.
    pub fn update_by_name(&mut self, name: &str, raw: &str) -> bool {
        let Some(field) = FormField::from_name(name) else {
            return false;
        };
        self.set_field(field, raw);
        true
    }

    /// Compose the outgoing record around an already-resolved image URL.
    pub fn to_record(&self, image: String) -> BulkWasteRecord {
        BulkWasteRecord {
            image,
            name: self.name.clone(),
            description: self.description.clone(),
            quantity_available: finite_or_zero(self.quantity_available),
            quantity_unit: self.quantity_unit.clone(),
            price: finite_or_zero(self.price),
        }
    }
}

/// A locally chosen image that has not been uploaded yet.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: String,
    #[cfg(feature = "csr")]
    pub handle: web_sys::File,
}

#[cfg(feature = "csr")]
impl From<web_sys::File> for SelectedFile {
    fn from(handle: web_sys::File) -> Self {
        Self { name: handle.name(), handle }
    }
}

/// Page-scoped submission state.
///
/// Lives in an `RwSignal` owned by the upload page; the selected file is kept
/// in a separate local signal because browser file handles are not `Send`.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    pub form: BulkWasteForm,
    pub loading: bool,
    pub error: Option<String>,
}

impl UploadState {
    /// Enter the loading state. Returns `false` if a submit is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Leave the loading state and record the inline error for any failure.
    pub fn finish_submit<T>(&mut self, result: &Result<T, SubmitError>) {
        self.loading = false;
        if result.is_err() {
            self.error = Some(INLINE_FAILURE_MESSAGE.to_owned());
        }
    }
}

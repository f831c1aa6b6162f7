//! Routed screens.
//!
//! The upload page is the only route; it wires form signals to the
//! submission controller and renders the listing form.

pub mod upload_bulk_waste;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`upload`, `toast`) so the page and the toast
//! stack can depend on small focused models.

pub mod toast;
pub mod upload;

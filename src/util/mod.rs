//! Browser-storage helpers kept out of the page and the controller.
//!
//! Each helper has a no-op native branch so the code that calls it stays
//! testable without a window.

pub mod session;

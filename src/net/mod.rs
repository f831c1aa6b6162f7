//! Networking modules for the image host and the Record API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` normalizes their failures, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;

//! Stored auth token helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in flow elsewhere in the app writes the session token to
//! `localStorage`. This page only reads it for the Record API request and
//! clears it when the backend reports the session as expired.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

pub const TOKEN_STORAGE_KEY: &str = "token";

/// Read the stored session token, if any.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Remove the stored session token.
pub fn clear_token() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}

/// `Authorization` header value for a stored token.
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

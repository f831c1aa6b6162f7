//! Endpoint and image-host configuration captured at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so values are read
//! with `option_env!` when the crate is compiled and handed to `from_lookup`.
//! The page receives the resulting `AppConfig` through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const CLOUDINARY_API_BASE: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required build variable: {var}")]
    Missing { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Record API origin, without a trailing slash.
    pub backend_url: String,
    pub cloudinary_upload_url: String,
    pub cloudinary_cloud_name: String,
    pub cloudinary_upload_preset: String,
}

impl AppConfig {
    /// Build config from the variables present when the crate was compiled.
    ///
    /// Required:
    /// - `CLOUDINARY_CLOUD_NAME`
    /// - `CLOUDINARY_UPLOAD_PRESET`
    ///
    /// Optional:
    /// - `BACKEND_URL`: default `http://localhost:3000`
    /// - `CLOUDINARY_URL`: derived from the cloud name when absent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` when a required variable is unset or blank.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let raw = match key {
                "BACKEND_URL" => option_env!("BACKEND_URL"),
                "CLOUDINARY_URL" => option_env!("CLOUDINARY_URL"),
                "CLOUDINARY_CLOUD_NAME" => option_env!("CLOUDINARY_CLOUD_NAME"),
                "CLOUDINARY_UPLOAD_PRESET" => option_env!("CLOUDINARY_UPLOAD_PRESET"),
                _ => None,
            };
            raw.map(str::to_owned)
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` when a required variable is unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let cloudinary_cloud_name =
            read("CLOUDINARY_CLOUD_NAME").ok_or(ConfigError::Missing { var: "CLOUDINARY_CLOUD_NAME" })?;
        let cloudinary_upload_preset =
            read("CLOUDINARY_UPLOAD_PRESET").ok_or(ConfigError::Missing { var: "CLOUDINARY_UPLOAD_PRESET" })?;

        let backend_url = read("BACKEND_URL")
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let cloudinary_upload_url =
            read("CLOUDINARY_URL").unwrap_or_else(|| default_upload_url(&cloudinary_cloud_name));

        Ok(Self { backend_url, cloudinary_upload_url, cloudinary_cloud_name, cloudinary_upload_preset })
    }
}

fn default_upload_url(cloud_name: &str) -> String {
    format!("{CLOUDINARY_API_BASE}/{cloud_name}/image/upload")
}

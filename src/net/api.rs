//! HTTP clients for the image host and the Record API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs returning a transport error since
//! these endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped into `SubmitError` here, so the controller only
//! ever sees the tagged variants.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::SubmitError;
use super::types::{BulkWasteRecord, CredentialsMode};
use crate::config::AppConfig;
use crate::state::upload::SelectedFile;
use crate::submit::{ImageHost, RecordApi};

/// Image uploads never carry the app's session cookies.
pub const IMAGE_HOST_CREDENTIALS: CredentialsMode = CredentialsMode::Omit;
pub const RECORD_API_CREDENTIALS: CredentialsMode = CredentialsMode::Include;

fn bulk_waste_endpoint(backend_url: &str) -> String {
    format!("{backend_url}/api/v1/bulk-waste")
}

/// Text fields of the multipart upload form, alongside the `file` part.
fn image_upload_fields(config: &AppConfig) -> [(&'static str, &str); 2] {
    [
        ("upload_preset", config.cloudinary_upload_preset.as_str()),
        ("cloud_name", config.cloudinary_cloud_name.as_str()),
    ]
}

/// Unsigned uploads to the configured Cloudinary endpoint.
#[derive(Clone, Debug)]
pub struct CloudinaryHost {
    config: AppConfig,
}

impl CloudinaryHost {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl ImageHost for CloudinaryHost {
    type File = SelectedFile;

    async fn upload(&self, file: &SelectedFile) -> Result<String, SubmitError> {
        #[cfg(feature = "csr")]
        {
            use super::types::ImageUploadResponse;

            let form = web_sys::FormData::new().map_err(|e| SubmitError::transport(format!("{e:?}")))?;
            form.append_with_blob("file", &file.handle)
                .map_err(|e| SubmitError::transport(format!("{e:?}")))?;
            for (key, value) in image_upload_fields(&self.config) {
                form.append_with_str(key, value)
                    .map_err(|e| SubmitError::transport(format!("{e:?}")))?;
            }

            let resp = gloo_net::http::Request::post(&self.config.cloudinary_upload_url)
                .credentials(IMAGE_HOST_CREDENTIALS.into())
                .body(form)
                .map_err(SubmitError::transport)?
                .send()
                .await
                .map_err(SubmitError::transport)?;
            if !resp.ok() {
                return Err(SubmitError::transport(format!(
                    "image upload of {} failed: {}",
                    file.name,
                    resp.status()
                )));
            }
            let body: ImageUploadResponse = resp.json().await.map_err(SubmitError::transport)?;
            Ok(body.secure_url)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (file, image_upload_fields(&self.config));
            Err(SubmitError::transport("image upload not available outside the browser"))
        }
    }
}

/// `POST /api/v1/bulk-waste` against the configured backend.
#[derive(Clone, Debug)]
pub struct BulkWasteApi {
    endpoint: String,
}

impl BulkWasteApi {
    pub fn new(config: &AppConfig) -> Self {
        Self { endpoint: bulk_waste_endpoint(&config.backend_url) }
    }
}

impl RecordApi for BulkWasteApi {
    async fn create(&self, record: &BulkWasteRecord) -> Result<(), SubmitError> {
        #[cfg(feature = "csr")]
        {
            let mut builder =
                gloo_net::http::Request::post(&self.endpoint).credentials(RECORD_API_CREDENTIALS.into());
            if let Some(token) = crate::util::session::read_token() {
                builder = builder.header("Authorization", &crate::util::session::bearer_header(&token));
            }
            let resp = builder
                .json(record)
                .map_err(SubmitError::transport)?
                .send()
                .await
                .map_err(SubmitError::transport)?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            super::error::classify_record_response(status, &body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = record;
            Err(SubmitError::transport(format!("{} not reachable outside the browser", self.endpoint)))
        }
    }
}

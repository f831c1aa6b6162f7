//! Bulk-waste submission controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The upload page owns the form signals; this module owns the sequence that
//! runs once the user presses submit: resolve the image, compose the record,
//! post it, then turn the outcome into UI actions.
//!
//! DESIGN
//! ======
//! The image host and the Record API sit behind traits so the sequence can be
//! driven with in-memory fakes. The controller never touches signals, storage,
//! or the router; `actions_for` describes what the page must do and the page
//! applies it.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is retried. A failed upload short-circuits before the record POST,
//! so a listing is never created with a stale or local image reference.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use crate::net::error::SubmitError;
use crate::net::types::BulkWasteRecord;
use crate::state::toast::ToastKind;
use crate::state::upload::BulkWasteForm;

pub const SUCCESS_MESSAGE: &str = "Bulk waste created successfully";
pub const PROFILE_PATH: &str = "/profile";
pub const SIGNIN_PATH: &str = "/signin";

/// Media host that turns a local file into a public URL.
#[allow(async_fn_in_trait)]
pub trait ImageHost {
    type File;

    /// Upload `file` and return its public URL.
    async fn upload(&self, file: &Self::File) -> Result<String, SubmitError>;
}

/// Backend endpoint that persists listings.
#[allow(async_fn_in_trait)]
pub trait RecordApi {
    /// Create the listing. `Ok` only for a confirmed creation.
    async fn create(&self, record: &BulkWasteRecord) -> Result<(), SubmitError>;
}

/// A UI side effect requested by a finished submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    Toast { kind: ToastKind, message: String },
    ClearSessionToken,
    Navigate(&'static str),
}

pub struct SubmissionController<H, R> {
    image_host: H,
    records: R,
}

impl<H, R> SubmissionController<H, R>
where
    H: ImageHost,
    R: RecordApi,
{
    pub fn new(image_host: H, records: R) -> Self {
        Self { image_host, records }
    }

    /// Run one upload-then-post sequence for `form`.
    ///
    /// With no `file`, the form's current `image` is reused unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first failure from the image host or the Record API.
    pub async fn submit(
        &self,
        form: &BulkWasteForm,
        file: Option<&H::File>,
    ) -> Result<BulkWasteRecord, SubmitError> {
        log::info!("submitting bulk waste listing name={:?}", form.name);

        let image = match file {
            Some(file) => self.image_host.upload(file).await?,
            None => form.image.clone(),
        };

        let record = form.to_record(image);
        self.records.create(&record).await?;

        log::info!("bulk waste listing created name={:?}", record.name);
        Ok(record)
    }
}

/// UI actions for a finished submit, in the order they must be applied.
pub fn actions_for<T>(result: &Result<T, SubmitError>) -> Vec<SubmitAction> {
    match result {
        Ok(_) => vec![
            SubmitAction::Toast { kind: ToastKind::Success, message: SUCCESS_MESSAGE.to_owned() },
            SubmitAction::Navigate(PROFILE_PATH),
        ],
        Err(err) if err.is_auth() => vec![
            SubmitAction::Toast { kind: ToastKind::Error, message: err.message().to_owned() },
            SubmitAction::ClearSessionToken,
            SubmitAction::Navigate(SIGNIN_PATH),
        ],
        Err(err) => {
            // Transport and unknown failures log their detail where they are built.
            if matches!(err, SubmitError::Validation { .. }) {
                log::warn!("bulk waste submit rejected: {err}");
            }
            vec![SubmitAction::Toast { kind: ToastKind::Error, message: err.message().to_owned() }]
        }
    }
}

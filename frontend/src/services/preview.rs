//! Object URLs backing the image preview.

use web_sys::{File, Url};

use crate::state::PreviewUrl;
use crate::types::{AppError, AppResult};

/// Create a `blob:` URL for `file`.
pub fn create_preview(file: &File) -> AppResult<PreviewUrl> {
    Url::create_object_url_with_blob(file).map_err(|e| AppError::Preview(format!("{:?}", e)))
}

/// Revoke a handle released by a state transition, if any.
pub fn release_preview(released: Option<PreviewUrl>) {
    if let Some(url) = released {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke preview {}: {:?}", url, e);
        }
    }
}

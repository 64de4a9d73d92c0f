//! The save-to-library workflow.

use thiserror::Error;

use crate::media::CapturedMedia;
use crate::platform::{MediaLibrary, StorageAccess};

/// Why a save workflow did not reach `Saved`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    /// The storage permission was refused; the workflow aborts before the
    /// library is touched.
    #[error("storage permission denied")]
    PermissionDenied,
    /// The library rejected the artifact; carries the extracted message.
    #[error("{0}")]
    Library(String),
}

/// Run one save attempt: secure the storage permission, then hand the
/// artifact to the media library.
///
/// The permission is checked before it is requested, so users who granted
/// it earlier never see a prompt. The caller guarantees at most one
/// workflow is in flight per screen.
pub(crate) async fn run_save(
    storage: &dyn StorageAccess,
    library: &dyn MediaLibrary,
    media: &CapturedMedia,
) -> Result<(), SaveError> {
    let mut granted = storage.check_save_permission().await;
    if !granted {
        log::info!("Save permission not held, prompting user");
        granted = storage.request_save_permission().await.granted();
    }
    if !granted {
        log::warn!("Save permission denied, abandoning save");
        return Err(SaveError::PermissionDenied);
    }

    let uri = media.file_uri();
    log::info!("Saving {} to media library: {}", media.media_type(), uri);
    library
        .save_to_library(&uri, media.media_type())
        .await
        .map_err(|e| SaveError::Library(describe_failure(e.as_ref())))
}

/// Best-effort message extraction: the `Display` form when it says
/// something, otherwise the `Debug` rendering so even a bare marker error
/// surfaces as text.
pub(crate) fn describe_failure(error: &(dyn std::error::Error + Send + Sync)) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        format!("{:?}", error)
    } else {
        message
    }
}

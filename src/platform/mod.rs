//! Contracts for the native services the core drives.
//!
//! The embedding shell supplies implementations of these; the core never
//! talks to the OS directly. Everything is async because the underlying
//! platform primitives are.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::media::MediaType;
use crate::permissions::PermissionStatus;

/// Failure reported by the media library save primitive.
///
/// Deliberately open: shells wrap whatever their platform throws, and the
/// workflow extracts a human-readable message from it afterwards.
pub type LibraryError = Box<dyn std::error::Error + Send + Sync>;

/// Read-only view of capture-device and audio-input authorization.
///
/// Queries are side-effect free and may take arbitrarily long; the
/// permission gate imposes no timeout on them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DevicePermissions: Send + Sync {
    async fn capture_status(&self) -> PermissionStatus;
    async fn audio_status(&self) -> PermissionStatus;
}

/// Outcome of an explicit storage permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantResult {
    Granted,
    Denied,
    /// The platform will not show the prompt again.
    NeverAskAgain,
}

impl GrantResult {
    /// Only an affirmative grant unlocks the save workflow.
    pub fn granted(self) -> bool {
        matches!(self, GrantResult::Granted)
    }
}

/// Storage permission check/request pair used by the save workflow.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StorageAccess: Send + Sync {
    /// Whether the save permission is currently held.
    async fn check_save_permission(&self) -> bool;
    /// Prompt the user for the save permission.
    async fn request_save_permission(&self) -> GrantResult;
}

/// Storage backend for platforms without a storage-permission concept:
/// the permission is always reported as held and no prompt ever fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreGrantedStorage;

#[async_trait]
impl StorageAccess for PreGrantedStorage {
    async fn check_save_permission(&self) -> bool {
        true
    }

    async fn request_save_permission(&self) -> GrantResult {
        GrantResult::Granted
    }
}

/// Device media library (camera roll / gallery).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaLibrary: Send + Sync {
    /// Persist the artifact at `uri` (a `file://` reference) to the
    /// library under the given kind.
    async fn save_to_library(
        &self,
        uri: &str,
        media_type: MediaType,
    ) -> Result<(), LibraryError>;
}

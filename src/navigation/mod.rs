//! Screen routes for the capture-and-review flow.

use serde::{Deserialize, Serialize};

use crate::media::CapturedMedia;

/// Screens the router can enter.
///
/// Wire form tags the screen and carries parameters separately, so the
/// review payload serializes as
/// `{"screen": "review", "params": {"path": ..., "type": ...}}` while the
/// parameterless screens stay bare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "params", rename_all = "lowercase")]
pub enum Route {
    /// Onboarding screen that walks the user through granting access.
    Permissions,
    /// Live capture screen.
    Capture,
    /// Post-capture review of a single artifact.
    Review(CapturedMedia),
}

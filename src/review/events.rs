//! Event and effect vocabulary for the review screen.

use serde::{Deserialize, Serialize};

use crate::media::MediaType;
use crate::review::playback::PlaybackCommand;
use crate::review::save::SaveError;

/// Everything the review controller reacts to.
#[derive(Debug)]
pub enum ReviewEvent {
    /// User hit the save trigger.
    SaveRequested,
    /// A save workflow finished; fed back by the session driver.
    SaveFinished(Result<(), SaveError>),
    /// Callback from the display widget.
    Renderer(RendererEvent),
    /// App process moved between foreground and background.
    Foreground(bool),
    /// Screen gained or lost navigation focus.
    Focused(bool),
    /// User hit the close action.
    CloseRequested,
}

/// Renderer callbacks, tagged by kind so photo and video loads share one
/// channel without payload sniffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RendererEvent {
    /// The artifact became visually ready (image decoded, first video
    /// frame displayable).
    Ready,
    /// Decoded artifact metadata; informational only.
    Loaded { info: MediaInfo },
    /// The renderer could not display the artifact.
    Failed { message: String },
}

/// Metadata reported by the renderer once the artifact is decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "media", rename_all = "snake_case")]
pub enum MediaInfo {
    Image {
        width: u32,
        height: u32,
    },
    Video {
        width: u32,
        height: u32,
        duration_secs: f64,
        orientation: Orientation,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Side effects the shell must apply after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Run the save workflow and feed the outcome back as
    /// [`ReviewEvent::SaveFinished`].
    StartSave,
    /// Show a modal alert.
    Notify(Notice),
    /// Instruct the video renderer.
    Playback(PlaybackCommand),
    /// Leave the review screen.
    NavigateBack,
}

/// User-visible alert content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    /// Alert shown when the storage permission is refused.
    pub fn permission_denied() -> Self {
        Self {
            title: "Permission denied!".to_string(),
            body: "Missing permission to save media to the photo library.".to_string(),
        }
    }

    /// Alert shown when the library rejects the artifact.
    pub fn save_failed(media_type: MediaType, message: &str) -> Self {
        Self {
            title: "Failed to save!".to_string(),
            body: format!(
                "An unexpected error occurred while trying to save your {}. {}",
                media_type, message
            ),
        }
    }
}

//! Liveness-driven playback control for video review.

use serde::Serialize;

/// Instruction for the video renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// Static player flags the review screen declares for video artifacts.
///
/// The loop never ends, so there is no end-of-media case to handle, and
/// the player rides out brief `inactive` app states (incoming call
/// banner, control center). Only a real background transition pauses,
/// via [`PlaybackCommand::Pause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaybackSpec {
    pub looped: bool,
    pub play_when_inactive: bool,
}

impl Default for PlaybackSpec {
    fn default() -> Self {
        Self {
            looped: true,
            play_when_inactive: true,
        }
    }
}

/// Playback runs only while the app is foreground and the screen focused.
pub fn playback_active(foreground: bool, focused: bool) -> bool {
    foreground && focused
}

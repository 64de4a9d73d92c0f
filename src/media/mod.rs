//! References to captured artifacts on local storage.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of captured artifact under review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
}

impl MediaType {
    pub fn is_video(self) -> bool {
        matches!(self, MediaType::Video)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Photo => write!(f, "photo"),
            MediaType::Video => write!(f, "video"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("media path must not be empty")]
    EmptyPath,
}

/// A finalized capture handed to the review screen.
///
/// Built once by the capture flow and passed by value; the review core
/// never mutates it. The path is the bare filesystem location; renderer
/// and library consumers go through [`CapturedMedia::file_uri`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCapturedMedia")]
pub struct CapturedMedia {
    path: String,
    #[serde(rename = "type")]
    media_type: MediaType,
}

/// Unvalidated wire form, promoted through [`CapturedMedia::new`].
#[derive(Deserialize)]
struct RawCapturedMedia {
    path: String,
    #[serde(rename = "type")]
    media_type: MediaType,
}

impl TryFrom<RawCapturedMedia> for CapturedMedia {
    type Error = MediaError;

    fn try_from(raw: RawCapturedMedia) -> Result<Self, Self::Error> {
        CapturedMedia::new(raw.path, raw.media_type)
    }
}

impl CapturedMedia {
    pub fn new(path: impl Into<String>, media_type: MediaType) -> Result<Self, MediaError> {
        let path = path.into();
        if path.trim().is_empty() {
            return Err(MediaError::EmptyPath);
        }
        Ok(Self { path, media_type })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn is_video(&self) -> bool {
        self.media_type.is_video()
    }

    /// Source for the renderer and the media library, e.g.
    /// `file:///tmp/img1.jpg` for a capture at `/tmp/img1.jpg`.
    pub fn file_uri(&self) -> String {
        format!("file://{}", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_rejected() {
        assert_eq!(
            CapturedMedia::new("", MediaType::Photo),
            Err(MediaError::EmptyPath)
        );
        assert_eq!(
            CapturedMedia::new("   ", MediaType::Video),
            Err(MediaError::EmptyPath)
        );
    }

    #[test]
    fn test_file_uri_prefixes_path() {
        let media = CapturedMedia::new("/tmp/img1.jpg", MediaType::Photo).unwrap();
        assert_eq!(media.file_uri(), "file:///tmp/img1.jpg");
    }

    #[test]
    fn test_route_params_payload_shape() {
        let media: CapturedMedia = serde_json::from_value(serde_json::json!({
            "path": "/tmp/clip.mp4",
            "type": "video"
        }))
        .unwrap();
        assert_eq!(media.path(), "/tmp/clip.mp4");
        assert!(media.is_video());

        let value = serde_json::to_value(&media).unwrap();
        assert_eq!(value["type"], "video");
    }

    #[test]
    fn test_empty_payload_path_rejected() {
        let result: Result<CapturedMedia, _> =
            serde_json::from_value(serde_json::json!({ "path": "", "type": "photo" }));
        assert!(result.is_err());
    }
}

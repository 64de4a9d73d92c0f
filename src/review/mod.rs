//! Post-capture review: one captured artifact from preview to saved.

pub mod controller;
pub mod events;
pub mod playback;
pub mod save;
pub mod session;

pub use controller::ReviewController;
pub use events::{Effect, MediaInfo, Notice, Orientation, RendererEvent, ReviewEvent};
pub use playback::{playback_active, PlaybackCommand, PlaybackSpec};
pub use save::SaveError;
pub use session::ReviewSession;

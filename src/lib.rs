//! Post-capture core for a mobile camera app.
//!
//! Two components: a permission gate that resolves device authorization
//! exactly once at startup and picks the entry screen, and a review
//! controller that manages one captured artifact (photo or video) from
//! preview through save-to-library. The embedding shell owns rendering,
//! navigation, and the native primitives; this crate owns the decisions
//! and the state transitions behind them.

pub mod media;
pub mod navigation;
pub mod permissions;
pub mod platform;
pub mod review;
pub mod state_machine;

pub use media::{CapturedMedia, MediaError, MediaType};
pub use navigation::Route;
pub use permissions::{PermissionGate, PermissionStatus};
pub use platform::{DevicePermissions, GrantResult, MediaLibrary, PreGrantedStorage, StorageAccess};
pub use review::{
    Effect, MediaInfo, Notice, Orientation, PlaybackCommand, PlaybackSpec, RendererEvent,
    ReviewController, ReviewEvent, ReviewSession, SaveError,
};
pub use state_machine::{SaveState, SaveStateMachine, StateTransitionError};

#[cfg(test)]
mod tests;

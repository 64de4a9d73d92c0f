//! Startup gate that turns the permission pair into the entry route.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::navigation::Route;
use crate::platform::DevicePermissions;

use super::PermissionStatus;

/// Whether onboarding is required for a resolved permission pair.
///
/// Asymmetric on purpose: a microphone the user already denied is
/// tolerated as long as the capture device is fully authorized, but an
/// undecided microphone still sends the user through onboarding so the
/// prompt fires before the first video recording.
pub fn needs_permission_screen(capture: PermissionStatus, audio: PermissionStatus) -> bool {
    capture != PermissionStatus::Authorized || audio == PermissionStatus::NotDetermined
}

/// Entry route for a resolved permission pair.
pub fn initial_route(capture: PermissionStatus, audio: PermissionStatus) -> Route {
    if needs_permission_screen(capture, audio) {
        Route::Permissions
    } else {
        Route::Capture
    }
}

/// Resolves both permission queries exactly once and maps the pair to the
/// app's entry route.
///
/// The queries run concurrently; until both complete there is no decision
/// and [`PermissionGate::route`] stays `None` (the shell renders nothing
/// in that window). The stored pair is never refreshed: a permission
/// revoked later in the session does not move the gate.
pub struct PermissionGate {
    service: Arc<dyn DevicePermissions>,
    resolved: OnceCell<(PermissionStatus, PermissionStatus)>,
}

impl PermissionGate {
    pub fn new(service: Arc<dyn DevicePermissions>) -> Self {
        Self {
            service,
            resolved: OnceCell::new(),
        }
    }

    /// Resolve the permission pair (first call only) and compute the entry
    /// route. Concurrent and repeated calls reuse the stored pair.
    pub async fn resolve(&self) -> Route {
        let (capture, audio) = *self
            .resolved
            .get_or_init(|| async {
                let (capture, audio) = futures_util::join!(
                    self.service.capture_status(),
                    self.service.audio_status(),
                );
                log::info!(
                    "[GATE] Permissions resolved: capture={:?} audio={:?}",
                    capture,
                    audio
                );
                (capture, audio)
            })
            .await;
        initial_route(capture, audio)
    }

    /// Resolved statuses, or `None` while either query is outstanding.
    pub fn statuses(&self) -> Option<(PermissionStatus, PermissionStatus)> {
        self.resolved.get().copied()
    }

    /// Routing decision, or `None` while the gate is still pending.
    pub fn route(&self) -> Option<Route> {
        self.statuses()
            .map(|(capture, audio)| initial_route(capture, audio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_for_every_status_pair() {
        use PermissionStatus::*;

        let table = [
            ((Authorized, Authorized), Route::Capture),
            ((Authorized, Denied), Route::Capture),
            ((Authorized, Restricted), Route::Capture),
            ((Authorized, NotDetermined), Route::Permissions),
            ((Denied, Authorized), Route::Permissions),
            ((Denied, Denied), Route::Permissions),
            ((Denied, Restricted), Route::Permissions),
            ((Denied, NotDetermined), Route::Permissions),
            ((NotDetermined, Authorized), Route::Permissions),
            ((NotDetermined, Denied), Route::Permissions),
            ((NotDetermined, Restricted), Route::Permissions),
            ((NotDetermined, NotDetermined), Route::Permissions),
            ((Restricted, Authorized), Route::Permissions),
            ((Restricted, Denied), Route::Permissions),
            ((Restricted, Restricted), Route::Permissions),
            ((Restricted, NotDetermined), Route::Permissions),
        ];

        for ((capture, audio), expected) in table {
            assert_eq!(
                initial_route(capture, audio),
                expected,
                "capture={:?} audio={:?}",
                capture,
                audio
            );
        }
    }

    #[test]
    fn test_denied_microphone_does_not_block_capture() {
        assert!(!needs_permission_screen(
            PermissionStatus::Authorized,
            PermissionStatus::Denied
        ));
    }
}

//! Device permission model and the startup permission gate.

use serde::{Deserialize, Serialize};

mod gate;

pub use gate::{initial_route, needs_permission_screen, PermissionGate};

/// Authorization status reported by a permission subsystem.
///
/// Wire form matches the platform strings (`not-determined` and friends).
/// Routing only ever distinguishes `Authorized` and `NotDetermined`; the
/// remaining states are carried through for logging and the onboarding
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionStatus {
    Authorized,
    Denied,
    NotDetermined,
    Restricted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_strings() {
        assert_eq!(
            serde_json::to_value(PermissionStatus::NotDetermined).unwrap(),
            serde_json::json!("not-determined")
        );
        let parsed: PermissionStatus =
            serde_json::from_value(serde_json::json!("authorized")).unwrap();
        assert_eq!(parsed, PermissionStatus::Authorized);
    }
}

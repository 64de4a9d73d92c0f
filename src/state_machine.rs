use std::fmt;

/// Save workflow state, serialized for the save glyph on screen
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum SaveState {
    #[default]
    Idle,
    Saving,
    Saved,
}

#[derive(Debug, Clone)]
pub struct StateTransitionError {
    from: SaveState,
    to: SaveState,
    message: String,
}

impl fmt::Display for StateTransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid state transition from {:?} to {:?}: {}",
            self.from, self.to, self.message
        )
    }
}

impl std::error::Error for StateTransitionError {}

/// State machine for the save workflow with validation
pub struct SaveStateMachine {
    current_state: SaveState,
}

impl SaveStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: SaveState::Idle,
        }
    }

    pub fn current(&self) -> SaveState {
        self.current_state
    }

    /// Validate and perform state transition
    pub fn transition_to(&mut self, new_state: SaveState) -> Result<(), StateTransitionError> {
        log::info!(
            "[FLOW] Attempting save transition: {:?} -> {:?}",
            self.current_state,
            new_state
        );

        if self.is_valid_transition(self.current_state, new_state) {
            let old_state = self.current_state;
            self.current_state = new_state;

            match (old_state, new_state) {
                (SaveState::Saving, SaveState::Saved) => {
                    log::info!("[FLOW] Save completed, trigger stays disabled for this screen");
                }
                (SaveState::Saving, SaveState::Idle) => {
                    log::warn!("[FLOW] Save rolled back to idle, trigger re-enabled");
                }
                _ => {}
            }

            Ok(())
        } else {
            log::error!(
                "[FLOW] Save transition INVALID: {:?} -> {:?}",
                self.current_state,
                new_state
            );
            Err(StateTransitionError {
                from: self.current_state,
                to: new_state,
                message: "Transition not allowed by save workflow rules".to_string(),
            })
        }
    }

    /// Check if a state transition is valid
    fn is_valid_transition(&self, from: SaveState, to: SaveState) -> bool {
        match (from, to) {
            // From Idle
            (SaveState::Idle, SaveState::Saving) => true,

            // From Saving
            (SaveState::Saving, SaveState::Saved) => true, // Success
            (SaveState::Saving, SaveState::Idle) => true,  // Failure rollback

            // Saved is terminal for this screen instance

            // Same state transitions (no-op)
            (a, b) if a == b => true,

            // All other transitions are invalid
            _ => false,
        }
    }

    /// Check if the save trigger is currently enabled
    pub fn can_trigger_save(&self) -> bool {
        matches!(self.current_state, SaveState::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        let mut sm = SaveStateMachine::new();

        // Valid flow: Idle -> Saving -> Saved
        assert!(sm.transition_to(SaveState::Saving).is_ok());
        assert_eq!(sm.current(), SaveState::Saving);

        assert!(sm.transition_to(SaveState::Saved).is_ok());
        assert_eq!(sm.current(), SaveState::Saved);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut sm = SaveStateMachine::new();

        // Cannot go directly from Idle to Saved
        assert!(sm.transition_to(SaveState::Saved).is_err());
        assert_eq!(sm.current(), SaveState::Idle);
    }

    #[test]
    fn test_rollback_on_failure() {
        let mut sm = SaveStateMachine::new();

        sm.transition_to(SaveState::Saving).unwrap();
        assert!(sm.transition_to(SaveState::Idle).is_ok());

        // Back to idle, a retry is allowed
        assert!(sm.transition_to(SaveState::Saving).is_ok());
    }

    #[test]
    fn test_saved_is_terminal() {
        let mut sm = SaveStateMachine::new();

        sm.transition_to(SaveState::Saving).unwrap();
        sm.transition_to(SaveState::Saved).unwrap();

        // No way out of Saved for this screen instance
        assert!(sm.transition_to(SaveState::Saving).is_err());
        assert!(sm.transition_to(SaveState::Idle).is_err());
        assert_eq!(sm.current(), SaveState::Saved);
    }

    #[test]
    fn test_same_state_is_noop() {
        let mut sm = SaveStateMachine::new();

        assert!(sm.transition_to(SaveState::Idle).is_ok());
        assert_eq!(sm.current(), SaveState::Idle);

        sm.transition_to(SaveState::Saving).unwrap();
        assert!(sm.transition_to(SaveState::Saving).is_ok());
        assert_eq!(sm.current(), SaveState::Saving);
    }

    #[test]
    fn test_state_checks() {
        let mut sm = SaveStateMachine::new();

        assert!(sm.can_trigger_save());

        sm.transition_to(SaveState::Saving).unwrap();
        assert!(!sm.can_trigger_save());

        sm.transition_to(SaveState::Saved).unwrap();
        assert!(!sm.can_trigger_save());
    }
}

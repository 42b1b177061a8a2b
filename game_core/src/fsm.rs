//! Game State Machine
//!
//! Owns the round lifecycle: not started, running, over.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    Over,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Start,
    Collide,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: GamePhase,
    pub to: GamePhase,
    pub action: GameAction,
}

/// Round lifecycle state machine
#[derive(Debug, Clone, Default)]
pub struct GameFsm {
    phase: GamePhase,
}

impl GameFsm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Attempt a transition, leaving the phase untouched if it is not allowed
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from = self.phase;
        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_phase(&self, action: GameAction) -> Option<GamePhase> {
        match (self.phase, action) {
            (GamePhase::NotStarted, GameAction::Start) => Some(GamePhase::Running),
            (GamePhase::Over, GameAction::Start) => Some(GamePhase::Running),
            (GamePhase::Running, GameAction::Collide) => Some(GamePhase::Over),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn test_full_round_trip() {
        let mut fsm = GameFsm::new();
        assert!(fsm.transition(GameAction::Start).success);
        assert!(fsm.is_running());
        assert!(fsm.transition(GameAction::Collide).success);
        assert_eq!(fsm.phase(), GamePhase::Over);
        let restart = fsm.transition(GameAction::Start);
        assert_eq!(restart.from, GamePhase::Over);
        assert_eq!(restart.to, GamePhase::Running);
    }

    #[test]
    fn test_invalid_transitions_keep_phase() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Collide);
        assert!(!result.success);
        assert_eq!(fsm.phase(), GamePhase::NotStarted);

        fsm.transition(GameAction::Start);
        let result = fsm.transition(GameAction::Start);
        assert!(!result.success, "No restart mid-round");
        assert_eq!(result.to, GamePhase::Running);
    }
}

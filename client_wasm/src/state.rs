//! Frame-to-frame client state: turns simulation events into console lines

use game_core::{Events, GamePhase, Snapshot};

/// What the host page last saw of the game
pub struct HudState {
    last_speed: f32,
    rounds: u32,
}

impl HudState {
    pub fn new() -> Self {
        Self {
            last_speed: 0.0,
            rounds: 0,
        }
    }

    /// Record a processed frame, returning the lines worth logging
    pub fn observe(&mut self, events: &Events, snapshot: &Snapshot) -> Vec<String> {
        let mut lines = Vec::new();

        if events.started {
            self.rounds += 1;
            lines.push(format!(
                "Round {} started (high score {})",
                self.rounds, snapshot.high_score
            ));
        }
        if events.speed_increased && snapshot.speed > self.last_speed {
            lines.push(format!("Speed increased to {:.1}", snapshot.speed));
        }
        if events.collided {
            lines.push(format!("Collision! Final score {}", snapshot.score));
        }
        if events.new_high_score {
            lines.push(format!("New high score: {}", snapshot.high_score));
        }

        self.last_speed = snapshot.speed;
        lines
    }
}

impl Default for HudState {
    fn default() -> Self {
        Self::new()
    }
}

/// Phase name exposed to JavaScript
pub fn phase_name(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::NotStarted => "not_started",
        GamePhase::Running => "running",
        GamePhase::Over => "over",
    }
}

use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub now: f64,         // Simulated seconds since the round started
    pub accumulator: f32, // Seconds waiting for the next frame tick
}

impl Time {
    pub fn new(now: f64) -> Self {
        Self {
            now,
            accumulator: 0.0,
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Round score and session best
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub current: u32,
    pub high: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.current += 1;
    }

    /// Fold the round score into the session best.
    /// Returns true when a new best was set.
    pub fn commit_high(&mut self) -> bool {
        if self.current > self.high {
            self.high = self.current;
            true
        } else {
            false
        }
    }

    pub fn reset_round(&mut self) {
        self.current = 0;
    }
}

/// Scroll speed, only ever ramps up within a round
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSpeed(pub f32);

impl GameSpeed {
    pub fn increase(&mut self, by: f32, max: f32) -> bool {
        let next = (self.0 + by).min(max).max(self.0);
        let changed = next > self.0;
        self.0 = next;
        changed
    }
}

/// Timestamps of the last spawns (None = gate open)
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnTimers {
    pub last_obstacle: Option<f64>,
    pub last_cloud: Option<f64>,
    next_order: u64,
}

impl SpawnTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Gate check: open if nothing spawned yet or `interval` has passed
    pub fn is_due(last: Option<f64>, now: f64, interval: f32) -> bool {
        last.map_or(true, |t| now - t > f64::from(interval))
    }

    pub fn next_order(&mut self) -> crate::SpawnOrder {
        let order = crate::SpawnOrder(self.next_order);
        self.next_order += 1;
        order
    }
}

/// Source of uniform samples in [0, 1)
pub trait RandomSource {
    fn next_float(&mut self) -> f32;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn next_float(&mut self) -> f32 {
        use rand::Rng;
        self.0.gen::<f32>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted
#[derive(Debug, Clone)]
pub struct SequenceRng {
    samples: Vec<f32>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(samples: Vec<f32>) -> Self {
        Self { samples, cursor: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_float(&mut self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample
    }
}

/// Events that occurred during the last processed batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub started: bool,
    pub jumped: bool,
    pub landed: bool,
    pub ducked: bool,
    pub obstacles_spawned: u32,
    pub clouds_spawned: u32,
    pub obstacles_passed: u32,
    pub speed_increased: bool,
    pub collided: bool,
    pub new_high_score: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Logical keys the host can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    Jump,
    Duck,
}

/// Raw key transitions from the host input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Key),
    Released(Key),
}

/// Work items consumed by the update function, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Input(InputEvent),
    Tick { dt: f32 },
}

/// Single-threaded FIFO of pending commands
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    commands: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    pub fn pop(&mut self) -> Option<Command> {
        self.commands.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_high_keeps_best() {
        let mut score = Score { current: 7, high: 5 };
        assert!(score.commit_high());
        assert_eq!(score.high, 7);

        score.reset_round();
        score.increment();
        assert!(!score.commit_high());
        assert_eq!(score.high, 7, "Lower round must not lower the best");
    }

    #[test]
    fn test_speed_increase_caps_at_max() {
        let mut speed = GameSpeed(11.8);
        assert!(speed.increase(0.5, 12.0));
        assert_eq!(speed.0, 12.0);
        assert!(!speed.increase(0.5, 12.0));
        assert_eq!(speed.0, 12.0);
    }

    #[test]
    fn test_speed_never_decreases_when_above_cap() {
        let mut speed = GameSpeed(13.0);
        speed.increase(0.5, 12.0);
        assert_eq!(speed.0, 13.0);
    }

    #[test]
    fn test_sequence_rng_cycles() {
        let mut rng = SequenceRng::new(vec![0.1, 0.9]);
        assert_eq!(rng.next_float(), 0.1);
        assert_eq!(rng.next_float(), 0.9);
        assert_eq!(rng.next_float(), 0.1);
    }

    #[test]
    fn test_game_rng_in_unit_range_and_seeded() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..100 {
            let sample = a.next_float();
            assert!((0.0..1.0).contains(&sample));
            assert_eq!(sample, b.next_float());
        }
    }

    #[test]
    fn test_command_queue_is_fifo() {
        let mut queue = CommandQueue::new();
        queue.push(Command::Input(InputEvent::Pressed(Key::Jump)));
        queue.push(Command::Tick { dt: 0.016 });
        queue.push(Command::Input(InputEvent::Released(Key::Duck)));

        assert_eq!(
            queue.pop(),
            Some(Command::Input(InputEvent::Pressed(Key::Jump)))
        );
        assert_eq!(queue.pop(), Some(Command::Tick { dt: 0.016 }));
        assert_eq!(
            queue.pop(),
            Some(Command::Input(InputEvent::Released(Key::Duck)))
        );
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.collided = true;
        events.obstacles_passed = 3;
        events.clear();
        assert_eq!(events, Events::default());
    }
}

use game_core::{Config, Events, Game, GamePhase, GameRng, InputEvent, Score, Snapshot};

/// Browser-side owner of the game, converting frame timestamps into clock ticks
pub struct LocalGame {
    game: Game,
    last_timestamp: Option<f64>, // ms, from requestAnimationFrame
}

impl LocalGame {
    pub fn new(config: Config, seed: u64) -> Result<Self, String> {
        let game = Game::new(config, Box::new(GameRng::new(seed)))?;
        Ok(Self {
            game,
            last_timestamp: None,
        })
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.game.push_input(event);
    }

    /// Seconds since the previous frame; the first frame contributes nothing
    fn elapsed(&mut self, timestamp_ms: f64) -> f32 {
        let dt = match self.last_timestamp {
            Some(last) if timestamp_ms > last => ((timestamp_ms - last) / 1000.0) as f32,
            _ => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);
        dt
    }

    /// Forget the frame clock so an idle gap is not fed to the simulation
    pub fn pause(&mut self) {
        self.last_timestamp = None;
    }

    /// Process queued input and the time since the last frame
    pub fn on_frame(&mut self, timestamp_ms: f64) -> (Events, Snapshot) {
        let dt = self.elapsed(timestamp_ms);
        let events = self.game.frame(dt).clone();
        (events, self.game.snapshot())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.game.snapshot()
    }

    pub fn score(&self) -> Score {
        self.game.score()
    }

    pub fn phase(&self) -> GamePhase {
        self.game.phase()
    }

    pub fn config(&self) -> &Config {
        self.game.config()
    }
}

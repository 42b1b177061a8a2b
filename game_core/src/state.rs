use hecs::World;

use crate::components::*;
use crate::fsm::{GameFsm, GamePhase};
use crate::resources::*;
use crate::Config;

/// Everything the simulation mutates, owned by one controller
pub struct GameState {
    pub world: World,
    pub player: Player,
    pub fsm: GameFsm,
    pub time: Time,
    pub score: Score,
    pub speed: GameSpeed,
    pub spawn: SpawnTimers,
    pub events: Events,
    pub tick: u64, // Frame ticks since the round started
}

impl GameState {
    pub fn new(config: &Config) -> Self {
        Self {
            world: World::new(),
            player: rest_player(config),
            fsm: GameFsm::new(),
            time: Time::default(),
            score: Score::new(),
            speed: GameSpeed(config.base_speed),
            spawn: SpawnTimers::new(),
            events: Events::new(),
            tick: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.fsm.phase()
    }

    /// Clear everything a round owns. The session best survives.
    pub fn reset_round(&mut self, config: &Config) {
        self.world.clear();
        self.player = rest_player(config);
        self.time = Time::default();
        self.score.reset_round();
        self.speed = GameSpeed(config.base_speed);
        self.spawn.reset();
        self.tick = 0;
    }

    pub fn obstacle_count(&self) -> usize {
        self.world.query::<&Obstacle>().iter().count()
    }

    pub fn cloud_count(&self) -> usize {
        self.world.query::<&Cloud>().iter().count()
    }
}

fn rest_player(config: &Config) -> Player {
    Player::new(
        config.player_x,
        config.ground_y,
        config.player_width,
        config.player_height,
    )
}

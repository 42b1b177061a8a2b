use crate::components::ObstacleKind;
use crate::params::Params;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub player_x: f32,
    pub ground_y: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub duck_height: f32,
    pub collision_margin: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub jump_tick: f32,
    pub obstacle_spawn_x: f32,
    pub obstacle_cull_x: f32,
    pub obstacle_interval: f32,
    pub small_obstacle_size: (f32, f32),
    pub large_obstacle_size: (f32, f32),
    pub cloud_spawn_x: f32,
    pub cloud_cull_x: f32,
    pub cloud_interval: f32,
    pub cloud_size: (f32, f32),
    pub cloud_y_min: f32,
    pub cloud_y_range: f32,
    pub cloud_speed_min: f32,
    pub cloud_speed_range: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    pub speed_increment: f32,
    pub ramp_every_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            player_x: Params::PLAYER_X,
            ground_y: Params::GROUND_Y,
            player_width: Params::PLAYER_WIDTH,
            player_height: Params::PLAYER_HEIGHT,
            duck_height: Params::DUCK_HEIGHT,
            collision_margin: Params::COLLISION_MARGIN,
            jump_velocity: Params::JUMP_VELOCITY,
            gravity: Params::GRAVITY,
            jump_tick: Params::JUMP_TICK,
            obstacle_spawn_x: Params::OBSTACLE_SPAWN_X,
            obstacle_cull_x: Params::OBSTACLE_CULL_X,
            obstacle_interval: Params::OBSTACLE_INTERVAL,
            small_obstacle_size: Params::SMALL_OBSTACLE_SIZE,
            large_obstacle_size: Params::LARGE_OBSTACLE_SIZE,
            cloud_spawn_x: Params::CLOUD_SPAWN_X,
            cloud_cull_x: Params::CLOUD_CULL_X,
            cloud_interval: Params::CLOUD_INTERVAL,
            cloud_size: Params::CLOUD_SIZE,
            cloud_y_min: Params::CLOUD_Y_MIN,
            cloud_y_range: Params::CLOUD_Y_RANGE,
            cloud_speed_min: Params::CLOUD_SPEED_MIN,
            cloud_speed_range: Params::CLOUD_SPEED_RANGE,
            base_speed: Params::BASE_SPEED,
            max_speed: Params::MAX_SPEED,
            speed_increment: Params::SPEED_INCREMENT,
            ramp_every_ticks: Params::RAMP_EVERY_TICKS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds that must elapse between obstacles at the given speed.
    /// Faster games spawn more often.
    pub fn obstacle_spawn_interval(&self, speed: f32) -> f32 {
        self.obstacle_interval / (speed / self.base_speed)
    }

    /// Bottom edge of the player at rest; obstacles stand on it
    pub fn ground_line(&self) -> f32 {
        self.ground_y + self.player_height
    }

    /// Width, height and top edge for an obstacle kind.
    /// Both kinds rest their base on the ground line.
    pub fn obstacle_geometry(&self, kind: ObstacleKind) -> (f32, f32, f32) {
        let (w, h) = match kind {
            ObstacleKind::Small => self.small_obstacle_size,
            ObstacleKind::Large => self.large_obstacle_size,
        };
        (w, h, self.ground_line() - h)
    }

    /// Reject configurations that would break the simulation invariants
    pub fn validate(&self) -> Result<(), String> {
        if self.jump_velocity <= 0.0 {
            return Err(format!(
                "jump_velocity must be positive, got {}",
                self.jump_velocity
            ));
        }
        if self.gravity <= 0.0 || self.gravity >= self.jump_velocity {
            return Err(format!(
                "gravity must be in (0, jump_velocity), got {}",
                self.gravity
            ));
        }
        if self.jump_tick <= 0.0 || self.obstacle_interval <= 0.0 || self.cloud_interval <= 0.0
        {
            return Err("tick and spawn intervals must be positive".to_string());
        }
        if self.base_speed <= 0.0 || self.max_speed < self.base_speed {
            return Err(format!(
                "speeds must satisfy 0 < base ({}) <= max ({})",
                self.base_speed, self.max_speed
            ));
        }
        if self.speed_increment < 0.0 {
            return Err("speed_increment must not be negative".to_string());
        }
        if self.ramp_every_ticks == 0 {
            return Err("ramp_every_ticks must be at least 1".to_string());
        }
        if self.player_width <= 0.0 || self.player_height <= 0.0 || self.duck_height <= 0.0 {
            return Err("player dimensions must be positive".to_string());
        }
        let sizes = [
            self.small_obstacle_size,
            self.large_obstacle_size,
            self.cloud_size,
        ];
        if sizes.iter().any(|&(w, h)| w <= 0.0 || h <= 0.0) {
            return Err("obstacle and cloud sizes must be positive".to_string());
        }
        if self.cloud_y_range < 0.0 || self.cloud_speed_min <= 0.0 || self.cloud_speed_range < 0.0 {
            return Err("cloud ranges must be non-negative with a positive minimum speed".to_string());
        }
        let min_side = self.player_width.min(self.player_height);
        if self.collision_margin < 0.0 || self.collision_margin * 2.0 >= min_side {
            return Err(format!(
                "collision_margin {} leaves no hitbox",
                self.collision_margin
            ));
        }
        Ok(())
    }
}

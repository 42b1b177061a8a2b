/// Game tuning parameters for Dino Dash
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixels, y grows downwards)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Player
    pub const PLAYER_X: f32 = 50.0;
    pub const GROUND_Y: f32 = 200.0; // Top edge of the player at rest
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const DUCK_HEIGHT: f32 = 20.0;
    pub const COLLISION_MARGIN: f32 = 5.0; // Inset on each side of the player box

    // Jump (units per jump tick)
    pub const JUMP_VELOCITY: f32 = 20.0;
    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_TICK: f32 = 0.020; // 20 ms

    // Obstacles
    pub const OBSTACLE_SPAWN_X: f32 = 800.0;
    pub const SMALL_OBSTACLE_SIZE: (f32, f32) = (20.0, 40.0);
    pub const LARGE_OBSTACLE_SIZE: (f32, f32) = (30.0, 60.0); // Both stand on the player's base line
    pub const OBSTACLE_CULL_X: f32 = -50.0;
    pub const OBSTACLE_INTERVAL: f32 = 2.0; // Seconds at base speed

    // Clouds
    pub const CLOUD_SPAWN_X: f32 = 800.0;
    pub const CLOUD_SIZE: (f32, f32) = (60.0, 30.0);
    pub const CLOUD_Y_MIN: f32 = 50.0;
    pub const CLOUD_Y_RANGE: f32 = 100.0;
    pub const CLOUD_SPEED_MIN: f32 = 1.0;
    pub const CLOUD_SPEED_RANGE: f32 = 2.0;
    pub const CLOUD_CULL_X: f32 = -100.0;
    pub const CLOUD_INTERVAL: f32 = 3.0;

    // Speed (units per frame tick)
    pub const BASE_SPEED: f32 = 5.0;
    pub const MAX_SPEED: f32 = 12.0;
    pub const SPEED_INCREMENT: f32 = 0.5;
    pub const RAMP_EVERY_TICKS: u32 = 500;

    // Simulation clock
    pub const FIXED_DT: f32 = 1.0 / 60.0; // One frame tick at 60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}

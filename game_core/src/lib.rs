pub mod components;
pub mod config;
pub mod fsm;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;
pub use state::*;

use hecs::World;
use systems::*;

/// Apply one command to the game state.
/// Inputs are resolved against the current phase; ticks drive the simulation clock.
pub fn update(
    state: &mut GameState,
    command: Command,
    config: &Config,
    rng: &mut dyn RandomSource,
) {
    match command {
        Command::Input(event) => {
            if let Some(action) = resolve_input(event, state.phase()) {
                apply_action(state, config, action);
            }
        }
        Command::Tick { dt } => advance_clock(state, dt, config, rng),
    }
}

/// Feed elapsed wall time into the fixed-rate frame clock
fn advance_clock(state: &mut GameState, dt: f32, config: &Config, rng: &mut dyn RandomSource) {
    if !state.fsm.is_running() {
        return;
    }

    // Clamp dt to prevent large jumps
    let clamped_dt = if dt.is_finite() {
        dt.clamp(0.0, Params::MAX_DT)
    } else {
        0.0
    };
    state.time.accumulator += clamped_dt;

    while state.time.accumulator >= Params::FIXED_DT && state.fsm.is_running() {
        state.time.accumulator -= Params::FIXED_DT;
        step(state, config, rng);
    }
}

/// Run one deterministic frame tick of a running round
pub fn step(state: &mut GameState, config: &Config, rng: &mut dyn RandomSource) {
    // Derived from the tick count so long rounds do not drift
    state.tick += 1;
    state.time.now = state.tick as f64 * f64::from(Params::FIXED_DT);

    // 1. Difficulty ramp
    ramp_speed(state.tick, &mut state.speed, config, &mut state.events);

    // 2. Spawn gates
    spawn_obstacles(
        &mut state.world,
        &state.time,
        state.speed,
        &mut state.spawn,
        config,
        rng,
        &mut state.events,
    );
    spawn_clouds(
        &mut state.world,
        &state.time,
        &mut state.spawn,
        config,
        rng,
        &mut state.events,
    );

    // 3. Player physics and scrolling
    integrate_jump(&mut state.player, config, Params::FIXED_DT, &mut state.events);
    move_clouds(&mut state.world);
    move_obstacles(&mut state.world, state.speed);

    // 4. Scoring, then collision against the moved obstacles
    score_passed_obstacles(
        &mut state.world,
        &state.player,
        &mut state.score,
        &mut state.events,
    );
    let collided = check_collisions(&state.world, &state.player, config);

    // 5. Drop anything that left the screen
    gc(&mut state.world, config);

    if collided {
        end_round(state);
    }
}

/// Running -> Over, committing the session best
fn end_round(state: &mut GameState) {
    if state.fsm.transition(GameAction::Collide).success {
        state.events.collided = true;
        state.events.new_high_score = state.score.commit_high();
    }
}

/// Helper to create an obstacle entity
pub fn spawn_obstacle_at(
    world: &mut World,
    rect: Rect,
    kind: ObstacleKind,
    order: u64,
) -> hecs::Entity {
    world.spawn((Obstacle::new(rect, kind), SpawnOrder(order)))
}

/// Helper to create a cloud entity
pub fn spawn_cloud_at(world: &mut World, rect: Rect, speed: f32, order: u64) -> hecs::Entity {
    world.spawn((Cloud::new(rect, speed), SpawnOrder(order)))
}

/// Single owner of the game: state, config, randomness and the command queue
pub struct Game {
    state: GameState,
    config: Config,
    rng: Box<dyn RandomSource>,
    queue: CommandQueue,
}

impl Game {
    /// Build a game, rejecting configurations that break the simulation invariants
    pub fn new(config: Config, rng: Box<dyn RandomSource>) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    /// Default tuning with a seeded generator
    pub fn with_seed(seed: u64) -> Self {
        Self::build(Config::default(), Box::new(GameRng::new(seed)))
    }

    fn build(config: Config, rng: Box<dyn RandomSource>) -> Self {
        Self {
            state: GameState::new(&config),
            config,
            rng,
            queue: CommandQueue::new(),
        }
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.queue.push(Command::Input(event));
    }

    /// Queue elapsed wall time for the simulation clock
    pub fn advance(&mut self, dt: f32) {
        self.queue.push(Command::Tick { dt });
    }

    /// Drain the queue in arrival order. Events describe this batch only.
    pub fn process(&mut self) -> &Events {
        self.state.events.clear();
        while let Some(command) = self.queue.pop() {
            update(&mut self.state, command, &self.config, self.rng.as_mut());
        }
        &self.state.events
    }

    /// Queue a frame's worth of time and process everything pending
    pub fn frame(&mut self, dt: f32) -> &Events {
        self.advance(dt);
        self.process()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn events(&self) -> &Events {
        &self.state.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Place an obstacle directly, bypassing the spawn gate
    pub fn inject_obstacle(&mut self, rect: Rect, kind: ObstacleKind) -> hecs::Entity {
        let order = self.state.spawn.next_order();
        spawn_obstacle_at(&mut self.state.world, rect, kind, order.0)
    }
}

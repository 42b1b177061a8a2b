use crate::components::Jump;
use crate::fsm::{GameAction, GamePhase};
use crate::resources::{InputEvent, Key};
use crate::{Config, GameState};

/// Semantic actions produced from raw key transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Jump,
    Duck,
    StopDuck,
}

/// Map a key transition to an action for the current phase.
/// The jump key starts a round whenever one is not running.
pub fn resolve_input(event: InputEvent, phase: GamePhase) -> Option<Action> {
    let running = phase == GamePhase::Running;
    match event {
        InputEvent::Pressed(Key::Jump) if running => Some(Action::Jump),
        InputEvent::Pressed(Key::Jump) => Some(Action::Start),
        InputEvent::Pressed(Key::Duck) if running => Some(Action::Duck),
        InputEvent::Released(Key::Duck) if running => Some(Action::StopDuck),
        _ => None,
    }
}

/// Apply a resolved action to the game state
pub fn apply_action(state: &mut GameState, config: &Config, action: Action) {
    match action {
        Action::Start => start_round(state, config),
        Action::Jump => try_jump(state, config),
        Action::Duck => try_duck(state, config),
        Action::StopDuck => stop_duck(state, config),
    }
}

/// NotStarted/Over -> Running with a fresh round
pub fn start_round(state: &mut GameState, config: &Config) {
    if state.fsm.transition(GameAction::Start).success {
        state.reset_round(config);
        state.events.started = true;
    }
}

/// Launch a jump unless already airborne or ducking
pub fn try_jump(state: &mut GameState, config: &Config) {
    if !state.fsm.is_running() || state.player.is_airborne() || state.player.ducking {
        return;
    }
    state.player.jump = Some(Jump::new(config.jump_velocity));
    state.events.jumped = true;
}

/// Shrink the player while grounded
pub fn try_duck(state: &mut GameState, config: &Config) {
    if !state.fsm.is_running() || state.player.is_airborne() {
        return;
    }
    state.player.ducking = true;
    state.player.rect.size.y = config.duck_height;
    state.events.ducked = true;
}

/// Restore full height
pub fn stop_duck(state: &mut GameState, config: &Config) {
    if !state.fsm.is_running() {
        return;
    }
    state.player.ducking = false;
    state.player.rect.size.y = config.player_height;
}

//! Read-only view of a frame for the render host

use crate::{Cloud, GamePhase, GameState, Obstacle, ObstacleKind, Rect, SpawnOrder};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerView {
    pub rect: Rect,
    pub ducking: bool,
    pub airborne: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObstacleView {
    pub rect: Rect,
    pub kind: ObstacleKind,
    pub passed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CloudView {
    pub rect: Rect,
    pub speed: f32,
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub speed: f32,
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub clouds: Vec<CloudView>,
}

impl Snapshot {
    /// Capture the state, listing obstacles and clouds in spawn order
    pub fn capture(state: &GameState) -> Self {
        let mut obstacles: Vec<(SpawnOrder, ObstacleView)> = state
            .world
            .query::<(&Obstacle, &SpawnOrder)>()
            .iter()
            .map(|(_e, (o, order))| {
                (
                    *order,
                    ObstacleView {
                        rect: o.rect,
                        kind: o.kind,
                        passed: o.passed,
                    },
                )
            })
            .collect();
        obstacles.sort_by_key(|(order, _)| *order);

        let mut clouds: Vec<(SpawnOrder, CloudView)> = state
            .world
            .query::<(&Cloud, &SpawnOrder)>()
            .iter()
            .map(|(_e, (c, order))| {
                (
                    *order,
                    CloudView {
                        rect: c.rect,
                        speed: c.speed,
                    },
                )
            })
            .collect();
        clouds.sort_by_key(|(order, _)| *order);

        Self {
            phase: state.phase(),
            score: state.score.current,
            high_score: state.score.high,
            speed: state.speed.0,
            player: PlayerView {
                rect: state.player.rect,
                ducking: state.player.ducking,
                airborne: state.player.is_airborne(),
            },
            obstacles: obstacles.into_iter().map(|(_, view)| view).collect(),
            clouds: clouds.into_iter().map(|(_, view)| view).collect(),
        }
    }
}

//! Snapshot to draw list
//!
//! Every visible thing is an axis-aligned rectangle in arena units, drawn
//! back to front.

use game_core::{GamePhase, ObstacleKind, Rect, Snapshot};

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    pub fn from_rect(rect: &Rect, tint: [f32; 4]) -> Self {
        Self {
            transform: [rect.pos.x, rect.pos.y, rect.size.x, rect.size.y],
            tint,
        }
    }
}

pub const BACKGROUND: [f64; 4] = [1.0, 1.0, 1.0, 1.0];
pub const GROUND_COLOR: [f32; 4] = [0.82, 0.84, 0.86, 1.0];
pub const CLOUD_COLOR: [f32; 4] = [0.85, 0.85, 0.85, 1.0];
pub const PLAYER_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
pub const GAME_OVER_SHADE: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
pub const IDLE_SHADE: [f32; 4] = [0.0, 0.0, 0.0, 0.2];

const GROUND_THICKNESS: f32 = 2.0;

pub fn obstacle_color(kind: ObstacleKind) -> [f32; 4] {
    match kind {
        ObstacleKind::Small => [0.3, 0.3, 0.3, 1.0],
        ObstacleKind::Large => [0.15, 0.15, 0.15, 1.0],
    }
}

/// Build the draw list for one frame
pub fn build_instances(
    snapshot: &Snapshot,
    arena_width: f32,
    arena_height: f32,
) -> Vec<InstanceData> {
    let mut instances =
        Vec::with_capacity(snapshot.clouds.len() + snapshot.obstacles.len() + 3);

    let ground = Rect::new(
        0.0,
        arena_height - GROUND_THICKNESS,
        arena_width,
        GROUND_THICKNESS,
    );
    instances.push(InstanceData::from_rect(&ground, GROUND_COLOR));

    for cloud in &snapshot.clouds {
        instances.push(InstanceData::from_rect(&cloud.rect, CLOUD_COLOR));
    }
    for obstacle in &snapshot.obstacles {
        instances.push(InstanceData::from_rect(
            &obstacle.rect,
            obstacle_color(obstacle.kind),
        ));
    }
    instances.push(InstanceData::from_rect(&snapshot.player.rect, PLAYER_COLOR));

    let shade = match snapshot.phase {
        GamePhase::NotStarted => Some(IDLE_SHADE),
        GamePhase::Running => None,
        GamePhase::Over => Some(GAME_OVER_SHADE),
    };
    if let Some(tint) = shade {
        let screen = Rect::new(0.0, 0.0, arena_width, arena_height);
        instances.push(InstanceData::from_rect(&screen, tint));
    }

    instances
}

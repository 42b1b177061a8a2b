use crate::{Config, Obstacle, Player, Rect};
use hecs::World;

/// The player's forgiving hitbox: the sprite inset by the collision margin
pub fn player_hitbox(player: &Player, config: &Config) -> Rect {
    player.rect.inset(config.collision_margin)
}

/// True if any obstacle overlaps the player's hitbox
pub fn check_collisions(world: &World, player: &Player, config: &Config) -> bool {
    let hitbox = player_hitbox(player, config);
    let mut query = world.query::<&Obstacle>();
    let hit = query
        .iter()
        .any(|(_entity, obstacle)| hitbox.overlaps(&obstacle.rect));
    hit
}

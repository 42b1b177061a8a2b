use hecs::World;

use crate::components::*;
use crate::Config;

/// Garbage collection: despawn obstacles and clouds that scrolled off the left edge
pub fn gc(world: &mut World, config: &Config) {
    let mut to_remove = Vec::new();

    for (entity, obstacle) in world.query::<&Obstacle>().iter() {
        if obstacle.rect.pos.x <= config.obstacle_cull_x {
            to_remove.push(entity);
        }
    }

    for (entity, cloud) in world.query::<&Cloud>().iter() {
        if cloud.rect.pos.x <= config.cloud_cull_x {
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

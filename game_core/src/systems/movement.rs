use crate::{Cloud, Config, Events, GameSpeed, Obstacle, Player};
use hecs::World;

/// Advance the jump by every whole jump tick contained in `dt`.
/// Landing snaps the player exactly onto the ground line.
pub fn integrate_jump(player: &mut Player, config: &Config, dt: f32, events: &mut Events) {
    let Some(mut jump) = player.jump else {
        return;
    };

    jump.accumulator += dt;
    while jump.accumulator >= config.jump_tick {
        jump.accumulator -= config.jump_tick;

        let new_y = player.rect.pos.y - jump.velocity;
        jump.velocity -= config.gravity;

        if new_y >= config.ground_y {
            player.rect.pos.y = config.ground_y;
            player.jump = None;
            events.landed = true;
            return;
        }
        player.rect.pos.y = new_y;
    }

    player.jump = Some(jump);
}

/// Scroll obstacles left at the current game speed
pub fn move_obstacles(world: &mut World, speed: GameSpeed) {
    for (_entity, obstacle) in world.query_mut::<&mut Obstacle>() {
        obstacle.rect.pos.x -= speed.0;
    }
}

/// Scroll clouds left, each at its own speed
pub fn move_clouds(world: &mut World) {
    for (_entity, cloud) in world.query_mut::<&mut Cloud>() {
        cloud.rect.pos.x -= cloud.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_cloud_at, spawn_obstacle_at, Jump, ObstacleKind, Rect};

    fn grounded_player(config: &Config) -> Player {
        Player::new(
            config.player_x,
            config.ground_y,
            config.player_width,
            config.player_height,
        )
    }

    fn run_jump(player: &mut Player, config: &Config) -> u32 {
        let mut events = Events::new();
        let mut steps = 0;
        while player.is_airborne() {
            integrate_jump(player, config, config.jump_tick, &mut events);
            steps += 1;
            assert!(steps < 100_000, "Jump never landed");
        }
        assert!(events.landed);
        steps
    }

    #[test]
    fn test_jump_rises_then_lands_on_ground() {
        let config = Config::new();
        let mut player = grounded_player(&config);
        player.jump = Some(Jump::new(config.jump_velocity));

        let mut events = Events::new();
        integrate_jump(&mut player, &config, config.jump_tick, &mut events);
        assert_eq!(player.rect.pos.y, config.ground_y - config.jump_velocity);

        run_jump(&mut player, &config);
        assert_eq!(player.rect.pos.y, config.ground_y);
        assert!(!player.is_airborne());
    }

    #[test]
    fn test_jump_lands_exactly_for_any_valid_pair() {
        let pairs = [(20.0, 0.6), (1.0, 0.99), (7.3, 0.1), (50.0, 3.3), (0.5, 0.01)];
        for (launch, gravity) in pairs {
            let config = Config {
                jump_velocity: launch,
                gravity,
                ..Config::new()
            };
            let mut player = grounded_player(&config);
            player.jump = Some(Jump::new(launch));
            run_jump(&mut player, &config);
            assert_eq!(
                player.rect.pos.y, config.ground_y,
                "launch {} gravity {}",
                launch, gravity
            );
        }
    }

    #[test]
    fn test_partial_tick_is_carried_over() {
        let config = Config::new();
        let mut player = grounded_player(&config);
        player.jump = Some(Jump::new(config.jump_velocity));
        let mut events = Events::new();

        integrate_jump(&mut player, &config, config.jump_tick * 0.5, &mut events);
        assert_eq!(player.rect.pos.y, config.ground_y, "No whole tick yet");

        integrate_jump(&mut player, &config, config.jump_tick * 0.6, &mut events);
        assert!(player.rect.pos.y < config.ground_y, "Carried time completes a tick");
    }

    #[test]
    fn test_grounded_player_is_untouched() {
        let config = Config::new();
        let mut player = grounded_player(&config);
        let mut events = Events::new();
        integrate_jump(&mut player, &config, 1.0, &mut events);
        assert_eq!(player.rect.pos.y, config.ground_y);
        assert!(!events.landed);
    }

    #[test]
    fn test_obstacles_and_clouds_scroll_independently() {
        let mut world = World::new();
        let obstacle = spawn_obstacle_at(
            &mut world,
            Rect::new(400.0, 200.0, 20.0, 40.0),
            ObstacleKind::Small,
            0,
        );
        let cloud = spawn_cloud_at(&mut world, Rect::new(400.0, 80.0, 60.0, 30.0), 1.5, 1);

        move_obstacles(&mut world, GameSpeed(7.0));
        move_clouds(&mut world);

        assert_eq!(world.get::<&Obstacle>(obstacle).unwrap().rect.pos.x, 393.0);
        assert_eq!(world.get::<&Cloud>(cloud).unwrap().rect.pos.x, 398.5);
    }
}

use crate::{Events, Obstacle, Player, Score};
use hecs::World;

/// Award one point per obstacle the first time it slips behind the player
pub fn score_passed_obstacles(
    world: &mut World,
    player: &Player,
    score: &mut Score,
    events: &mut Events,
) {
    for (_entity, obstacle) in world.query_mut::<&mut Obstacle>() {
        if !obstacle.passed && obstacle.rect.pos.x < player.rect.pos.x {
            obstacle.passed = true;
            score.increment();
            events.obstacles_passed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{spawn_obstacle_at, Config, ObstacleKind, Rect};

    fn setup() -> (World, Player, Score, Events) {
        let config = Config::new();
        let player = Player::new(
            config.player_x,
            config.ground_y,
            config.player_width,
            config.player_height,
        );
        (World::new(), player, Score::new(), Events::new())
    }

    #[test]
    fn test_obstacle_scores_once_when_behind_player() {
        let (mut world, player, mut score, mut events) = setup();
        let entity = spawn_obstacle_at(
            &mut world,
            Rect::new(49.0, 200.0, 20.0, 40.0),
            ObstacleKind::Small,
            0,
        );

        score_passed_obstacles(&mut world, &player, &mut score, &mut events);
        assert_eq!(score.current, 1);
        assert!(world.get::<&Obstacle>(entity).unwrap().passed);

        for _ in 0..5 {
            score_passed_obstacles(&mut world, &player, &mut score, &mut events);
        }
        assert_eq!(score.current, 1, "A passed obstacle never scores again");
        assert_eq!(events.obstacles_passed, 1);
    }

    #[test]
    fn test_obstacle_level_with_player_has_not_passed() {
        let (mut world, player, mut score, mut events) = setup();
        spawn_obstacle_at(
            &mut world,
            Rect::new(50.0, 200.0, 20.0, 40.0),
            ObstacleKind::Small,
            0,
        );

        score_passed_obstacles(&mut world, &player, &mut score, &mut events);
        assert_eq!(score.current, 0);
    }

    #[test]
    fn test_each_obstacle_scores_independently() {
        let (mut world, player, mut score, mut events) = setup();
        for (i, x) in [10.0, 30.0, 400.0].into_iter().enumerate() {
            spawn_obstacle_at(
                &mut world,
                Rect::new(x, 180.0, 30.0, 60.0),
                ObstacleKind::Large,
                i as u64,
            );
        }

        score_passed_obstacles(&mut world, &player, &mut score, &mut events);
        assert_eq!(score.current, 2);
    }
}

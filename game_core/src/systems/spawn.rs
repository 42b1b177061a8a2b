use crate::{
    spawn_cloud_at, spawn_obstacle_at, Config, Events, GameSpeed, ObstacleKind, RandomSource,
    Rect, SpawnTimers, Time,
};
use hecs::World;

/// Spawn an obstacle when the speed-scaled gate has elapsed
pub fn spawn_obstacles(
    world: &mut World,
    time: &Time,
    speed: GameSpeed,
    timers: &mut SpawnTimers,
    config: &Config,
    rng: &mut dyn RandomSource,
    events: &mut Events,
) {
    let interval = config.obstacle_spawn_interval(speed.0);
    if !SpawnTimers::is_due(timers.last_obstacle, time.now, interval) {
        return;
    }

    let kind = ObstacleKind::from_sample(rng.next_float());
    let (width, height, y) = config.obstacle_geometry(kind);
    let rect = Rect::new(config.obstacle_spawn_x, y, width, height);
    let order = timers.next_order();
    spawn_obstacle_at(world, rect, kind, order.0);

    timers.last_obstacle = Some(time.now);
    events.obstacles_spawned += 1;
}

/// Spawn a cloud on a fixed cadence, independent of speed
pub fn spawn_clouds(
    world: &mut World,
    time: &Time,
    timers: &mut SpawnTimers,
    config: &Config,
    rng: &mut dyn RandomSource,
    events: &mut Events,
) {
    if !SpawnTimers::is_due(timers.last_cloud, time.now, config.cloud_interval) {
        return;
    }

    let y = rng.next_float() * config.cloud_y_range + config.cloud_y_min;
    let speed = rng.next_float() * config.cloud_speed_range + config.cloud_speed_min;
    let (width, height) = config.cloud_size;
    let order = timers.next_order();
    spawn_cloud_at(world, Rect::new(config.cloud_spawn_x, y, width, height), speed, order.0);

    timers.last_cloud = Some(time.now);
    events.clouds_spawned += 1;
}

/// Every `ramp_every_ticks` frame ticks, raise the speed towards the cap
pub fn ramp_speed(tick: u64, speed: &mut GameSpeed, config: &Config, events: &mut Events) {
    if tick == 0 || tick % u64::from(config.ramp_every_ticks) != 0 {
        return;
    }
    if speed.increase(config.speed_increment, config.max_speed) {
        events.speed_increased = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cloud, Obstacle, Params, SequenceRng};

    fn setup() -> (World, Config, SpawnTimers, Events) {
        (World::new(), Config::new(), SpawnTimers::new(), Events::new())
    }

    #[test]
    fn test_first_obstacle_spawns_immediately() {
        let (mut world, config, mut timers, mut events) = setup();
        let mut rng = SequenceRng::new(vec![0.2]);
        let time = Time::new(f64::from(Params::FIXED_DT));

        spawn_obstacles(
            &mut world,
            &time,
            GameSpeed(config.base_speed),
            &mut timers,
            &config,
            &mut rng,
            &mut events,
        );

        let obstacles: Vec<Obstacle> = world.query::<&Obstacle>().iter().map(|(_, o)| *o).collect();
        assert_eq!(obstacles.len(), 1);
        assert_eq!(obstacles[0].kind, ObstacleKind::Small);
        assert_eq!(obstacles[0].rect, Rect::new(800.0, 200.0, 20.0, 40.0));
        assert!(!obstacles[0].passed);
        assert_eq!(events.obstacles_spawned, 1);
    }

    #[test]
    fn test_obstacle_gate_respects_interval() {
        let (mut world, config, mut timers, mut events) = setup();
        let mut rng = SequenceRng::new(vec![0.7]);
        let speed = GameSpeed(config.base_speed);
        timers.last_obstacle = Some(1.0);

        for now in [1.5, 2.9, 3.0] {
            let time = Time::new(now);
            spawn_obstacles(&mut world, &time, speed, &mut timers, &config, &mut rng, &mut events);
        }
        assert_eq!(events.obstacles_spawned, 0, "Gate is strictly greater-than");

        let time = Time::new(3.01);
        spawn_obstacles(&mut world, &time, speed, &mut timers, &config, &mut rng, &mut events);
        assert_eq!(events.obstacles_spawned, 1);
        assert_eq!(timers.last_obstacle, Some(3.01));

        let large = world.query::<&Obstacle>().iter().map(|(_, o)| *o).next().unwrap();
        assert_eq!(large.kind, ObstacleKind::Large);
        assert_eq!(large.rect, Rect::new(800.0, 180.0, 30.0, 60.0));
    }

    #[test]
    fn test_faster_speed_shortens_gate() {
        let (mut world, config, mut timers, mut events) = setup();
        let mut rng = SequenceRng::new(vec![0.0]);
        timers.last_obstacle = Some(0.0);

        let time = Time::new(1.1);
        spawn_obstacles(&mut world, &time, GameSpeed(5.0), &mut timers, &config, &mut rng, &mut events);
        assert_eq!(events.obstacles_spawned, 0);
        spawn_obstacles(&mut world, &time, GameSpeed(10.0), &mut timers, &config, &mut rng, &mut events);
        assert_eq!(events.obstacles_spawned, 1);
    }

    #[test]
    fn test_cloud_params_drawn_from_ranges() {
        let (mut world, config, mut timers, mut events) = setup();
        let mut rng = SequenceRng::new(vec![0.5, 0.25]);
        let time = Time::new(0.5);

        spawn_clouds(&mut world, &time, &mut timers, &config, &mut rng, &mut events);

        let cloud = world.query::<&Cloud>().iter().map(|(_, c)| *c).next().unwrap();
        assert_eq!(cloud.rect, Rect::new(800.0, 100.0, 60.0, 30.0));
        assert_eq!(cloud.speed, 1.5);

        let later = Time::new(3.4);
        spawn_clouds(&mut world, &later, &mut timers, &config, &mut rng, &mut events);
        assert_eq!(events.clouds_spawned, 1, "Cloud gate is 3 seconds");

        let much_later = Time::new(3.6);
        spawn_clouds(&mut world, &much_later, &mut timers, &config, &mut rng, &mut events);
        assert_eq!(events.clouds_spawned, 2);
    }

    #[test]
    fn test_ramp_every_500_ticks_to_cap() {
        let config = Config::new();
        let mut speed = GameSpeed(config.base_speed);
        let mut events = Events::new();

        ramp_speed(499, &mut speed, &config, &mut events);
        assert_eq!(speed.0, 5.0);
        ramp_speed(500, &mut speed, &config, &mut events);
        assert_eq!(speed.0, 5.5);
        assert!(events.speed_increased);

        let mut previous = speed.0;
        for tick in 501..=20_000 {
            ramp_speed(tick, &mut speed, &config, &mut events);
            assert!(speed.0 >= previous);
            assert!(speed.0 <= config.max_speed);
            previous = speed.0;
        }
        assert_eq!(speed.0, config.max_speed);
    }
}

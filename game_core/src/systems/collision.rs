use crate::{Aabb, Ball, Config, Events, GameMap, Paddle, Score};
use hecs::World;

/// Check ball against the left, top and bottom walls.
///
/// Walls override the velocity component with a fixed signed speed rather
/// than reflecting it, so a ball touching the left wall always leaves with
/// `+ball_speed` whatever it came in with.
pub fn check_wall_collisions(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) {
    let speed = config.ball_speed;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let bounds = ball.aabb();

        if bounds.left() <= 0 {
            ball.vel.x = speed;
            events.ball_hit_wall = true;
        }
        if bounds.top() <= 0 {
            ball.vel.y = speed;
            events.ball_hit_wall = true;
        }
        if ball.floor_y() >= map.height {
            ball.vel.y = -speed;
            events.ball_hit_wall = true;
        }
    }
}

/// Check ball against the paddle; a return reflects the ball and scores a point
pub fn check_paddle_collisions(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    // Collect paddle boxes without holding a borrow on the world
    let paddles: Vec<Aabb> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.aabb())
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Only a ball heading toward the paddle can be returned
        if ball.vel.x <= 0 {
            continue;
        }

        let leading_edge = ball.aabb().right();
        let probe_y = ball.probe_y();

        let hit = paddles.iter().any(|paddle| {
            leading_edge >= paddle.left()
                && config
                    .span_check
                    .contains(paddle.top(), paddle.bottom(), probe_y)
        });

        if hit {
            ball.vel.x = -ball.vel.x;
            score.record_hit();
            events.ball_hit_paddle = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config, Events, GameMap, Score};
    use glam::IVec2;

    fn setup_world(config: &Config) -> (hecs::World, GameMap, Score, Events) {
        let mut world = hecs::World::new();
        create_paddle(&mut world, config.paddle_start, config.paddle_size);
        (world, config.map(), Score::new(), Events::new())
    }

    fn ball_state(world: &hecs::World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .expect("ball spawned")
    }

    #[test]
    fn test_left_wall_forces_positive_x() {
        let config = Config::classic();
        let (mut world, map, _score, mut events) = setup_world(&config);
        create_ball(
            &mut world,
            IVec2::new(1, 100),
            config.ball_shape,
            IVec2::new(-3, 3),
        );
        // Move the ball across the edge first
        crate::systems::move_ball(&mut world);

        check_wall_collisions(&mut world, &map, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.vel.x, 3, "Left wall sets +speed, not a reflection");
        assert_eq!(ball.vel.y, 3, "Y velocity untouched");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_left_wall_override_is_not_reflection() {
        let config = Config::classic();
        let (mut world, map, _score, mut events) = setup_world(&config);
        // Already moving right while touching the wall: stays +speed
        create_ball(
            &mut world,
            IVec2::new(0, 100),
            config.ball_shape,
            IVec2::new(3, 3),
        );

        check_wall_collisions(&mut world, &map, &config, &mut events);

        assert_eq!(ball_state(&world).vel.x, 3);
    }

    #[test]
    fn test_top_wall_forces_positive_y() {
        let config = Config::refined();
        let (mut world, map, _score, mut events) = setup_world(&config);
        create_ball(
            &mut world,
            IVec2::new(300, 8),
            config.ball_shape,
            IVec2::new(3, -3),
        );

        check_wall_collisions(&mut world, &map, &config, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.vel.y, 3);
        assert_eq!(ball.vel.x, 3, "X velocity untouched");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_bottom_wall_forces_negative_y() {
        let config = Config::refined();
        let (mut world, map, _score, mut events) = setup_world(&config);
        create_ball(
            &mut world,
            IVec2::new(300, map.height - 8),
            config.ball_shape,
            IVec2::new(3, 3),
        );

        check_wall_collisions(&mut world, &map, &config, &mut events);

        assert_eq!(ball_state(&world).vel.y, -3);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_classic_bottom_wall_uses_top_edge() {
        let config = Config::classic();
        let (mut world, map, _score, mut events) = setup_world(&config);
        // Bottom edge already at 480, top edge still on screen
        create_ball(
            &mut world,
            IVec2::new(100, 465),
            config.ball_shape,
            IVec2::new(3, 3),
        );

        check_wall_collisions(&mut world, &map, &config, &mut events);
        assert_eq!(ball_state(&world).vel.y, 3, "Square ball keeps falling");
        assert!(!events.ball_hit_wall);

        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.y = map.height;
        }
        check_wall_collisions(&mut world, &map, &config, &mut events);
        assert_eq!(ball_state(&world).vel.y, -3);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_no_wall_hit_in_open_field() {
        let config = Config::refined();
        let (mut world, map, _score, mut events) = setup_world(&config);
        create_ball(
            &mut world,
            IVec2::new(320, 240),
            config.ball_shape,
            IVec2::new(-3, 3),
        );

        check_wall_collisions(&mut world, &map, &config, &mut events);

        assert_eq!(ball_state(&world).vel, IVec2::new(-3, 3));
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_paddle_reflects_and_scores() {
        let config = Config::refined();
        let (mut world, _map, mut score, mut events) = setup_world(&config);
        create_ball(
            &mut world,
            IVec2::new(595, 250),
            config.ball_shape,
            IVec2::new(3, 3),
        );

        check_paddle_collisions(&mut world, &config, &mut score, &mut events);

        assert_eq!(ball_state(&world).vel, IVec2::new(-3, 3));
        assert_eq!(score.current, 1);
        assert_eq!(score.high, 1);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_paddle_ignores_ball_moving_away() {
        let config = Config::refined();
        let (mut world, _map, mut score, mut events) = setup_world(&config);
        create_ball(
            &mut world,
            IVec2::new(600, 250),
            config.ball_shape,
            IVec2::new(-3, 3),
        );

        check_paddle_collisions(&mut world, &config, &mut score, &mut events);

        assert_eq!(ball_state(&world).vel.x, -3);
        assert_eq!(score.current, 0, "Leaving ball does not score again");
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_paddle_misses_ball_outside_span() {
        let config = Config::refined();
        let (mut world, _map, mut score, mut events) = setup_world(&config);
        create_ball(
            &mut world,
            IVec2::new(600, 350),
            config.ball_shape,
            IVec2::new(3, 3),
        );

        check_paddle_collisions(&mut world, &config, &mut score, &mut events);

        assert_eq!(ball_state(&world).vel.x, 3);
        assert_eq!(score.current, 0);
    }

    #[test]
    fn test_ball_short_of_paddle_is_not_returned() {
        let config = Config::refined();
        let (mut world, _map, mut score, mut events) = setup_world(&config);
        // Right edge at 599, one pixel short
        create_ball(
            &mut world,
            IVec2::new(591, 250),
            config.ball_shape,
            IVec2::new(3, 3),
        );

        check_paddle_collisions(&mut world, &config, &mut score, &mut events);

        assert_eq!(ball_state(&world).vel.x, 3);
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_span_edge_inclusive_for_classic() {
        let config = Config::classic();
        let (mut world, _map, mut score, mut events) = setup_world(&config);
        // Ball top exactly on the paddle's top edge
        create_ball(
            &mut world,
            IVec2::new(590, 200),
            config.ball_shape,
            IVec2::new(3, 3),
        );

        check_paddle_collisions(&mut world, &config, &mut score, &mut events);

        assert_eq!(ball_state(&world).vel.x, -3, "Inclusive span accepts the edge");
        assert_eq!(score.current, 1);
    }

    #[test]
    fn test_span_edge_exclusive_for_refined() {
        let config = Config::refined();
        let (mut world, _map, mut score, mut events) = setup_world(&config);
        // Ball center exactly on the paddle's bottom edge
        create_ball(
            &mut world,
            IVec2::new(595, 300),
            config.ball_shape,
            IVec2::new(3, 3),
        );

        check_paddle_collisions(&mut world, &config, &mut score, &mut events);

        assert_eq!(ball_state(&world).vel.x, 3, "Exclusive span rejects the edge");
        assert_eq!(score.current, 0);
    }
}

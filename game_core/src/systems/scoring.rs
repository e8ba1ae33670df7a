use crate::{Ball, Config, Events, GameMap, MissLine, Paddle, Score};
use hecs::World;

/// Check if the ball got past the player (miss) and reset the rally
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    let paddle_right = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| paddle.aabb().right())
        .max();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // A ball already sent back this tick is not a miss
        if ball.vel.x <= 0 {
            continue;
        }

        // Top-left corner of a square ball, center of a round one
        let x = ball.pos.x;
        let missed = match config.miss_line {
            MissLine::ScreenEdge => x >= map.width,
            MissLine::PaddleEdge => paddle_right.is_some_and(|right| x > right),
        };

        if missed {
            ball.reset(config.ball_start());
            score.reset();
            events.ball_missed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Ball, Config, Events, Score};
    use glam::IVec2;

    fn setup_world(config: &Config, ball_pos: IVec2, ball_vel: IVec2) -> hecs::World {
        let mut world = hecs::World::new();
        create_paddle(&mut world, config.paddle_start, config.paddle_size);
        create_ball(&mut world, ball_pos, config.ball_shape, ball_vel);
        world
    }

    fn ball_state(world: &hecs::World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .expect("ball spawned")
    }

    fn score_with_run(hits: u32) -> Score {
        let mut score = Score::new();
        for _ in 0..hits {
            score.record_hit();
        }
        score
    }

    #[test]
    fn test_classic_miss_at_screen_edge_resets() {
        let config = Config::classic();
        let map = config.map();
        let mut world = setup_world(&config, IVec2::new(640, 50), IVec2::new(3, 3));
        let mut score = score_with_run(4);
        let mut events = Events::new();

        check_scoring(&mut world, &map, &config, &mut score, &mut events);

        let ball = ball_state(&world);
        assert_eq!(ball.pos, IVec2::ZERO, "Ball returns to start");
        assert_eq!(ball.vel, IVec2::new(3, 3), "Velocity retained");
        assert_eq!(score.current, 0);
        assert_eq!(score.high, 4, "High score untouched");
        assert!(events.ball_missed);
    }

    #[test]
    fn test_classic_no_miss_before_screen_edge() {
        let config = Config::classic();
        let map = config.map();
        // Past the paddle but still on screen
        let mut world = setup_world(&config, IVec2::new(630, 50), IVec2::new(3, 3));
        let mut score = score_with_run(2);
        let mut events = Events::new();

        check_scoring(&mut world, &map, &config, &mut score, &mut events);

        assert_eq!(ball_state(&world).pos, IVec2::new(630, 50));
        assert_eq!(score.current, 2);
        assert!(!events.ball_missed);
    }

    #[test]
    fn test_refined_miss_past_paddle_edge_resets_to_center() {
        let config = Config::refined();
        let map = config.map();
        // Center 624 is past the paddle's right edge 615
        let mut world = setup_world(&config, IVec2::new(624, 400), IVec2::new(3, 3));
        let mut score = score_with_run(7);
        let mut events = Events::new();

        check_scoring(&mut world, &map, &config, &mut score, &mut events);

        assert_eq!(ball_state(&world).pos, IVec2::new(320, 240));
        assert_eq!(score.current, 0);
        assert_eq!(score.high, 7);
        assert!(events.ball_missed);
    }

    #[test]
    fn test_refined_ball_on_paddle_edge_is_not_a_miss() {
        let config = Config::refined();
        let map = config.map();
        // Center exactly on 615
        let mut world = setup_world(&config, IVec2::new(615, 400), IVec2::new(3, 3));
        let mut score = Score::new();
        let mut events = Events::new();

        check_scoring(&mut world, &map, &config, &mut score, &mut events);

        assert!(!events.ball_missed);
    }

    #[test]
    fn test_refined_miss_uses_ball_center() {
        let config = Config::refined();
        let map = config.map();
        // Center one step past the paddle while the left edge (610) is still short of it
        let mut world = setup_world(&config, IVec2::new(618, 103), IVec2::new(3, 3));
        let mut score = score_with_run(4);
        let mut events = Events::new();

        check_scoring(&mut world, &map, &config, &mut score, &mut events);

        assert!(events.ball_missed);
        assert_eq!(ball_state(&world).pos, IVec2::new(320, 240));
        assert_eq!(score, Score { current: 0, high: 4 });
    }

    #[test]
    fn test_returning_ball_is_not_a_miss() {
        let config = Config::classic();
        let map = config.map();
        let mut world = setup_world(&config, IVec2::new(641, 243), IVec2::new(-3, 3));
        let mut score = score_with_run(1);
        let mut events = Events::new();

        check_scoring(&mut world, &map, &config, &mut score, &mut events);

        assert_eq!(ball_state(&world).pos, IVec2::new(641, 243));
        assert_eq!(score.current, 1);
        assert!(!events.ball_missed);
    }
}

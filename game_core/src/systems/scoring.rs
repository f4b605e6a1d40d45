use crate::{Ball, Config, Court, Events, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the court (scoring)
pub fn check_scoring(
    world: &mut World,
    court: &Court,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if let Some(scorer) = point_winner(ball, court) {
            score.increment(scorer);
            events.record_score(scorer);

            // Left exit serves rightward, right exit serves leftward
            let direction = match scorer {
                Side::Right => 1.0,
                Side::Left => -1.0,
            };
            ball.reset(court, direction, config, rng);
        }
    }
}

/// Side that wins the point once the ball is entirely past an end line
pub fn point_winner(ball: &Ball, court: &Court) -> Option<Side> {
    if ball.pos.x + ball.radius < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x - ball.radius > court.width {
        Some(Side::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Court, Score, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let court = Court::from_config(&config);
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, court, score, events, rng)
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, court, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-11.0, 300.0), Vec2::new(-5.0, 0.0), 10.0);

        check_scoring(&mut world, &court, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.right_scored, "Should trigger right_scored event");
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, court, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(811.0, 300.0), Vec2::new(5.0, 0.0), 10.0);

        check_scoring(&mut world, &court, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, court, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-11.0, 42.0), Vec2::new(-8.0, 3.0), 10.0);

        check_scoring(&mut world, &court, &config, &mut score, &mut events, &mut rng);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, court.ball_spawn(), "Ball should reset to center after scoring");
            assert_eq!(ball.vel.x, 5.0, "Serve heads right after a left exit");
        }
    }

    #[test]
    fn test_serve_heads_left_after_right_exit() {
        let (mut world, config, court, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(820.0, 300.0), Vec2::new(9.0, 0.0), 10.0);

        check_scoring(&mut world, &court, &config, &mut score, &mut events, &mut rng);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, -5.0);
        }
    }

    #[test]
    fn test_no_scoring_while_ball_overlaps_end_line() {
        let (mut world, config, court, mut score, mut events, mut rng) = setup_world();
        // Center is out but the trailing edge is still on the court
        create_ball(&mut world, Vec2::new(-9.0, 300.0), Vec2::new(-5.0, 0.0), 10.0);
        create_ball(&mut world, Vec2::new(809.0, 300.0), Vec2::new(5.0, 0.0), 10.0);

        check_scoring(&mut world, &court, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new(), "No score while the ball touches the court");
        assert!(!events.left_scored && !events.right_scored, "No scoring events");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, court, mut score, mut events, mut rng) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(820.0, 300.0), Vec2::new(5.0, 0.0), 10.0);
        check_scoring(&mut world, &court, &config, &mut score, &mut events, &mut rng);

        world.get::<&mut Ball>(ball).unwrap().pos.x = 820.0;
        check_scoring(&mut world, &court, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
    }
}

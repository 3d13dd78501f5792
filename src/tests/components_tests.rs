#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::components::*;
    use crate::game::{MIN_SPAWN_PERIOD_MS, PLAYER_SIZE};
    use crate::tests::test_utils::test_screen;
    use ratatui::style::Color;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_bounds_edges() {
        let bounds = Bounds::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(bounds.left(), 10.0);
        assert_eq!(bounds.right(), 40.0);
        assert_eq!(bounds.top(), 20.0);
        assert_eq!(bounds.bottom(), 60.0);
    }

    #[test]
    fn test_bounds_overlap() {
        let a = Bounds::new(0.0, 0.0, 50.0, 50.0);
        let b = Bounds::new(49.0, 49.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));

        // Fully contained
        let inner = Bounds::new(10.0, 10.0, 5.0, 5.0);
        assert!(a.intersects(&inner));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Bounds::new(0.0, 0.0, 50.0, 50.0);
        let right = Bounds::new(50.0, 0.0, 10.0, 10.0);
        let below = Bounds::new(0.0, 50.0, 10.0, 10.0);
        let corner = Bounds::new(50.0, 50.0, 10.0, 10.0);

        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));
    }

    #[test]
    fn test_disjoint_bounds() {
        let a = Bounds::new(0.0, 0.0, 50.0, 50.0);
        let b = Bounds::new(100.0, 0.0, 50.0, 50.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_player_spawns_centered_near_bottom() {
        let (player, position, size) = Player::spawn_bundle(test_screen());

        assert_eq!(player.speed, 7.0);
        assert_eq!(position.x, 375.0);
        assert_eq!(position.y, 530.0);
        assert_eq!(size.width, PLAYER_SIZE);
        assert_eq!(size.height, PLAYER_SIZE);
    }

    #[test]
    fn test_block_colors_stay_in_range() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..500 {
            match Block::random_color(&mut rng) {
                Color::Rgb(r, g, b) => {
                    assert!(r >= 120);
                    assert!((40..=200).contains(&g));
                    assert!((40..=200).contains(&b));
                }
                other => panic!("Unexpected color {other:?}"),
            }
        }
    }

    #[test]
    fn test_difficulty_defaults() {
        let difficulty = Difficulty::default();
        assert!(approx_eq(difficulty.fall_speed, 4.0));
        assert_eq!(difficulty.spawn_period_ms, 700);
    }

    #[test]
    fn test_difficulty_single_tick() {
        let mut difficulty = Difficulty::default();
        difficulty.increase();

        assert!(approx_eq(difficulty.fall_speed, 4.4));
        assert_eq!(difficulty.spawn_period_ms, 660);
    }

    #[test]
    fn test_spawn_period_floor() {
        let mut difficulty = Difficulty::default();

        for _ in 0..12 {
            difficulty.increase();
        }
        assert_eq!(difficulty.spawn_period_ms, 220);

        // Floor reached on the 13th tick
        difficulty.increase();
        assert_eq!(difficulty.spawn_period_ms, MIN_SPAWN_PERIOD_MS);

        difficulty.increase();
        assert_eq!(difficulty.spawn_period_ms, 180);
        assert!(approx_eq(difficulty.fall_speed, 4.0 + 14.0 * 0.4));
    }

    #[test]
    fn test_difficulty_is_monotonic() {
        let mut difficulty = Difficulty::default();
        for _ in 0..100 {
            let before = difficulty;
            difficulty.increase();
            assert!(difficulty.fall_speed >= before.fall_speed);
            assert!(difficulty.spawn_period_ms <= before.spawn_period_ms);
            assert!(difficulty.spawn_period_ms >= MIN_SPAWN_PERIOD_MS);
        }
    }

    #[test]
    fn test_score_is_whole_seconds_since_start() {
        let mut game_state = GameState::new(1_000);

        game_state.update_score(1_999);
        assert_eq!(game_state.score, 0);

        game_state.update_score(2_000);
        assert_eq!(game_state.score, 1);

        game_state.update_score(8_750);
        assert_eq!(game_state.score, 7);
    }

    #[test]
    fn test_score_frozen_after_game_over() {
        let mut game_state = GameState::new(0);
        game_state.update_score(3_500);
        game_state.state = SessionState::GameOver;

        game_state.update_score(60_000);
        assert_eq!(game_state.score, 3);
        assert!(game_state.is_game_over());
    }

    #[test]
    fn test_input_direction() {
        let none = Input::default();
        let left = Input {
            left: true,
            right: false,
        };
        let right = Input {
            left: false,
            right: true,
        };
        let both = Input {
            left: true,
            right: true,
        };

        assert_eq!(none.direction(), 0.0);
        assert_eq!(left.direction(), -1.0);
        assert_eq!(right.direction(), 1.0);
        assert_eq!(both.direction(), 0.0);
    }
}

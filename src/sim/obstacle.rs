//! Obstacles crossing the lanes left to right

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::actor::{Actor, ActorKind, Others};
use super::event::GameEvent;
use crate::consts::*;
use crate::lane_to_y;

/// A computer-controlled obstacle.
///
/// Drives right along its lane at `speed` columns per second and respawns at
/// the left edge of a random lane once it reaches `MAX_WIDTH`. Each obstacle
/// draws from its own RNG stream so respawns stay reproducible.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pos: Vec2,
    lane: u32,
    speed: f32,
    rng: Pcg32,
}

impl Obstacle {
    /// Spawn at the left edge of a random lane, seeding a private stream from `rng`
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut obstacle = Self {
            pos: Vec2::ZERO,
            lane: 1,
            speed: 1.0,
            rng: Pcg32::seed_from_u64(rng.random()),
        };
        obstacle.reset();
        obstacle
    }

    /// Place an obstacle explicitly (lane 0 is the goal row)
    pub fn placed(x: f32, lane: u32, speed: f32, seed: u64) -> Self {
        Self {
            pos: Vec2::new(x, lane_to_y(lane)),
            lane,
            speed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Back to the left edge with a fresh lane and speed
    pub fn reset(&mut self) {
        self.lane = self.rng.random_range(1..=OBSTACLE_LANES);
        self.speed = self.rng.random_range(OBSTACLE_SPEEDS) as f32;
        self.pos = Vec2::new(0.0, lane_to_y(self.lane));
    }

    pub fn lane(&self) -> u32 {
        self.lane
    }

    /// Speed multiplier in columns per second
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl Actor for Obstacle {
    fn kind(&self) -> ActorKind {
        ActorKind::Obstacle
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self) -> &'static str {
        OBSTACLE_SPRITE
    }

    fn update(&mut self, dt: f32, _others: Others<'_>) -> GameEvent {
        if self.pos.x >= MAX_WIDTH {
            self.reset();
            log::debug!("Obstacle respawned in lane {} at speed {}", self.lane, self.speed);
        } else {
            self.pos.x += COLUMN_WIDTH * dt * self.speed;
        }
        GameEvent::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_spawns_at_left_edge_in_a_lane() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            let obstacle = Obstacle::new(&mut rng);
            assert_eq!(obstacle.x(), 0.0);
            assert!((1..=OBSTACLE_LANES).contains(&obstacle.lane()));
            assert_eq!(obstacle.y(), lane_to_y(obstacle.lane()));
            assert!([1.0, 2.0, 3.0].contains(&obstacle.speed()));
        }
    }

    #[test]
    fn test_advances_by_speed_and_dt() {
        let mut obstacle = Obstacle::placed(0.0, 2, 2.0, 1);
        let event = obstacle.update(0.5, Others::empty());
        assert_eq!(event, GameEvent::None);
        assert!((obstacle.x() - COLUMN_WIDTH).abs() < 0.001);
        assert_eq!(obstacle.y(), lane_to_y(2));
    }

    #[test]
    fn test_wraps_after_reaching_right_bound() {
        let mut obstacle = Obstacle::placed(MAX_WIDTH, 3, 1.0, 1);
        let event = obstacle.update(0.016, Others::empty());
        assert_eq!(event, GameEvent::None);
        assert_eq!(obstacle.x(), 0.0);
        assert!((1..=OBSTACLE_LANES).contains(&obstacle.lane()));
    }

    #[test]
    fn test_overshoot_is_allowed_until_next_update() {
        let mut obstacle = Obstacle::placed(MAX_WIDTH - 1.0, 1, 3.0, 1);
        obstacle.update(0.1, Others::empty());
        assert!(obstacle.x() > MAX_WIDTH);
        obstacle.update(0.1, Others::empty());
        assert_eq!(obstacle.x(), 0.0);
    }

    #[test]
    fn test_same_seed_same_respawns() {
        let mut a = Obstacle::placed(MAX_WIDTH, 1, 1.0, 99);
        let mut b = Obstacle::placed(MAX_WIDTH, 1, 1.0, 99);
        for _ in 0..200 {
            a.update(0.25, Others::empty());
            b.update(0.25, Others::empty());
            assert_eq!(a.position(), b.position());
            assert_eq!(a.speed(), b.speed());
        }
    }

    proptest! {
        #[test]
        fn prop_stays_on_a_lane_and_wraps(seed in any::<u64>(), dts in prop::collection::vec(0.0f32..0.5, 1..200)) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut obstacle = Obstacle::new(&mut rng);
            for dt in dts {
                let was_past_bound = obstacle.x() >= MAX_WIDTH;
                obstacle.update(dt, Others::empty());
                if was_past_bound {
                    prop_assert_eq!(obstacle.x(), 0.0);
                }
                let y = obstacle.y();
                prop_assert!((0.0..=MAX_HEIGHT).contains(&y));
                prop_assert!((1..=OBSTACLE_LANES).any(|lane| lane_to_y(lane) == y));
            }
        }

        #[test]
        fn prop_zero_dt_never_moves(x in 0.0f32..MAX_WIDTH, lane in 1u32..=OBSTACLE_LANES, speed in 1u32..=3) {
            let mut obstacle = Obstacle::placed(x, lane, speed as f32, 0);
            let before = obstacle.position();
            for _ in 0..10 {
                obstacle.update(0.0, Others::empty());
            }
            prop_assert_eq!(obstacle.position(), before);
        }
    }
}

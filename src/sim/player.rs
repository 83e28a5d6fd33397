//! The player-controlled actor

use glam::Vec2;
use rand::Rng;

use super::actor::{Actor, ActorKind, Others};
use super::event::GameEvent;
use crate::consts::*;
use crate::input::Direction;
use crate::{column_to_x, lane_to_y};

/// Moves one whole block per command and ends the round on the goal row or
/// on contact with an obstacle. The driver resets it after a terminal event.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pos: Vec2,
}

impl Player {
    /// Spawn on the start row in a random central column
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut player = Self { pos: Vec2::ZERO };
        player.reset(rng);
        player
    }

    /// Place the player explicitly (no clamping until the next update)
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }

    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        let column = rng.random_range(PLAYER_SPAWN_COLUMNS);
        self.pos = Vec2::new(column_to_x(column), lane_to_y(PLAYER_START_ROW));
    }

    /// Step one block. Bounds are enforced on the next update.
    pub fn handle_input(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.pos.y -= LANE_HEIGHT,
            Direction::Down => self.pos.y += LANE_HEIGHT,
            Direction::Left => self.pos.x -= COLUMN_WIDTH,
            Direction::Right => self.pos.x += COLUMN_WIDTH,
        }
    }

    fn clamp_to_board(&mut self) {
        self.pos.y = self.pos.y.clamp(0.0, MAX_HEIGHT);
        self.pos.x = self.pos.x.clamp(0.0, MAX_WIDTH);
    }

    /// Goal row first, so touching an obstacle on the winning step still wins
    fn check_events(&self, others: Others<'_>) -> GameEvent {
        if self.pos.y == 0.0 {
            return GameEvent::Won;
        }

        let hit = others
            .iter()
            .any(|other| other.kind() == ActorKind::Obstacle && other.overlaps(self));
        if hit {
            return GameEvent::Lost;
        }

        GameEvent::None
    }
}

impl Actor for Player {
    fn kind(&self) -> ActorKind {
        ActorKind::Player
    }

    fn position(&self) -> Vec2 {
        self.pos
    }

    fn sprite(&self) -> &'static str {
        PLAYER_SPRITE
    }

    fn update(&mut self, _dt: f32, others: Others<'_>) -> GameEvent {
        self.clamp_to_board();
        self.check_events(others)
    }
}

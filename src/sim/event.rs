//! Per-frame round outcomes

use serde::{Deserialize, Serialize};

/// What a frame produced for the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameEvent {
    /// Nothing happened
    #[default]
    None,
    /// The player touched an obstacle
    Lost,
    /// The player reached the goal row
    Won,
}

impl GameEvent {
    /// Returns true if the round is over
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameEvent::None)
    }

    /// Keep the first terminal event seen
    pub fn or(self, other: GameEvent) -> GameEvent {
        if self.is_terminal() { self } else { other }
    }
}

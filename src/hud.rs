//! Presentation side of round outcomes
//!
//! The sim only emits [`GameEvent`] tags. The message shown for each outcome
//! and the running tally of rounds live here.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Overlay text and weight for a terminal event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventHint {
    pub message: &'static str,
    pub value: u32,
}

impl EventHint {
    /// `None` for non-terminal events
    pub fn for_event(event: GameEvent) -> Option<Self> {
        match event {
            GameEvent::None => None,
            GameEvent::Lost => Some(Self {
                message: "Game over!",
                value: 1,
            }),
            GameEvent::Won => Some(Self {
                message: "You won!!",
                value: 3,
            }),
        }
    }
}

/// Rounds won and lost over a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    /// Consecutive wins since the last loss
    pub streak: u32,
    pub best_streak: u32,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a terminal event; `GameEvent::None` is ignored
    pub fn record(&mut self, event: GameEvent) {
        match event {
            GameEvent::None => {}
            GameEvent::Won => {
                self.wins += 1;
                self.streak += 1;
                self.best_streak = self.best_streak.max(self.streak);
            }
            GameEvent::Lost => {
                self.losses += 1;
                self.streak = 0;
            }
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses
    }
}

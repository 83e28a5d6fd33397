//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only
//! - Stable update order (roster order, player last)
//! - No rendering or platform dependencies

pub mod actor;
pub mod event;
pub mod game;
pub mod obstacle;
pub mod player;
pub mod roster;

pub use actor::{Actor, ActorKind, Others};
pub use event::GameEvent;
pub use game::Game;
pub use obstacle::Obstacle;
pub use player::Player;
pub use roster::Roster;

//! The ordered set of actors for one round
//!
//! The player is stored apart from the other actors, so "exactly one player,
//! always last" holds by construction for updates and draw order.

use rand::Rng;

use super::actor::{Actor, ActorKind, Others};
use super::event::GameEvent;
use super::obstacle::Obstacle;
use super::player::Player;

#[derive(Debug)]
pub struct Roster {
    actors: Vec<Box<dyn Actor>>,
    player: Player,
}

#[allow(clippy::len_without_is_empty)]
impl Roster {
    /// `actors` must not contain a player; the roster's own player goes last
    pub fn new(actors: Vec<Box<dyn Actor>>, player: Player) -> Self {
        debug_assert!(
            actors.iter().all(|actor| actor.kind() != ActorKind::Player),
            "roster holds exactly one player"
        );
        Self { actors, player }
    }

    /// Fresh round: `obstacle_count` random obstacles then a freshly reset player
    pub fn spawn<R: Rng>(obstacle_count: usize, rng: &mut R) -> Self {
        let actors = (0..obstacle_count)
            .map(|_| Box::new(Obstacle::new(rng)) as Box<dyn Actor>)
            .collect();
        let player = Player::new(rng);
        Self::new(actors, player)
    }

    /// Update every actor once in roster order, player last.
    ///
    /// Returns the first terminal event produced this frame.
    pub fn update(&mut self, dt: f32) -> GameEvent {
        let mut event = GameEvent::None;

        for i in 0..self.actors.len() {
            let (before, rest) = self.actors.split_at_mut(i);
            if let Some((current, after)) = rest.split_first_mut() {
                let others = Others::new(before, after, Some(&self.player as &dyn Actor));
                event = event.or(current.update(dt, others));
            }
        }

        let others = Others::new(&self.actors, &[], None);
        event.or(self.player.update(dt, others))
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// All actors in draw order, player last
    pub fn iter(&self) -> impl Iterator<Item = &dyn Actor> {
        self.actors
            .iter()
            .map(|actor| &**actor as &dyn Actor)
            .chain(std::iter::once(&self.player as &dyn Actor))
    }

    pub fn len(&self) -> usize {
        self.actors.len() + 1
    }
}

//! Positioned, moving actors
//!
//! Every actor on the board implements [`Actor`]. Actors own only their own
//! coordinates; during an update they see the rest of the roster through a
//! read-only [`Others`] view.

use std::fmt::Debug;

use glam::Vec2;

use super::event::GameEvent;
use crate::consts::{COLUMN_WIDTH, LANE_HEIGHT};

/// Actor variants known to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    Obstacle,
    Player,
}

/// Shared capability of everything that sits on the board
pub trait Actor: Debug {
    fn kind(&self) -> ActorKind;

    /// Top-left anchor in pixels
    fn position(&self) -> Vec2;

    /// Sprite id the presentation layer resolves to an image
    fn sprite(&self) -> &'static str;

    /// Advance one frame. `dt` is elapsed time in seconds.
    fn update(&mut self, _dt: f32, _others: Others<'_>) -> GameEvent {
        GameEvent::None
    }

    fn x(&self) -> f32 {
        self.position().x
    }

    fn y(&self) -> f32 {
        self.position().y
    }

    /// Half-block overlap test between the two anchors.
    ///
    /// Not a footprint intersection: sprites are narrower than a block, so
    /// this misses some edge contacts and reports some near misses. Gameplay
    /// is tuned around this tolerance.
    fn overlaps(&self, other: &dyn Actor) -> bool {
        let delta = self.position() - other.position();
        delta.x.abs() < COLUMN_WIDTH / 2.0 && delta.y.abs() < LANE_HEIGHT / 2.0
    }
}

/// Read-only view of every roster member except the one being updated
#[derive(Debug, Clone, Copy)]
pub struct Others<'a> {
    before: &'a [Box<dyn Actor>],
    after: &'a [Box<dyn Actor>],
    player: Option<&'a dyn Actor>,
}

impl<'a> Others<'a> {
    pub fn new(
        before: &'a [Box<dyn Actor>],
        after: &'a [Box<dyn Actor>],
        player: Option<&'a dyn Actor>,
    ) -> Self {
        Self {
            before,
            after,
            player,
        }
    }

    /// A view with nobody else on the board
    pub fn empty() -> Self {
        Self::new(&[], &[], None)
    }

    /// Iterate in roster order
    pub fn iter(self) -> impl Iterator<Item = &'a dyn Actor> {
        self.before
            .iter()
            .chain(self.after.iter())
            .map(as_dyn)
            .chain(self.player)
    }

    pub fn len(&self) -> usize {
        self.before.len() + self.after.len() + usize::from(self.player.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[allow(clippy::borrowed_box)]
fn as_dyn(actor: &Box<dyn Actor>) -> &dyn Actor {
    &**actor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Marker(Vec2);

    impl Actor for Marker {
        fn kind(&self) -> ActorKind {
            ActorKind::Obstacle
        }

        fn position(&self) -> Vec2 {
            self.0
        }

        fn sprite(&self) -> &'static str {
            "marker"
        }
    }

    #[test]
    fn test_overlap_within_half_block() {
        let obstacle = Marker(Vec2::new(200.0, 166.0));
        let player = Marker(Vec2::new(210.0, 170.0));
        assert!(obstacle.overlaps(&player));
        assert!(player.overlaps(&obstacle));
    }

    #[test]
    fn test_no_overlap_two_columns_away() {
        let obstacle = Marker(Vec2::new(400.0, 166.0));
        let player = Marker(Vec2::new(210.0, 170.0));
        assert!(!obstacle.overlaps(&player));
    }

    #[test]
    fn test_overlap_boundary_is_exclusive() {
        let a = Marker(Vec2::new(0.0, 0.0));
        assert!(!a.overlaps(&Marker(Vec2::new(COLUMN_WIDTH / 2.0, 0.0))));
        assert!(!a.overlaps(&Marker(Vec2::new(0.0, LANE_HEIGHT / 2.0))));
        assert!(a.overlaps(&Marker(Vec2::new(50.0, 41.0))));
    }

    #[test]
    fn test_default_update_is_noop() {
        let mut marker = Marker(Vec2::new(5.0, 5.0));
        assert_eq!(marker.update(1.0, Others::empty()), GameEvent::None);
        assert_eq!(marker.position(), Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_others_iterates_in_order() {
        let before: Vec<Box<dyn Actor>> = vec![Box::new(Marker(Vec2::new(1.0, 0.0)))];
        let after: Vec<Box<dyn Actor>> = vec![Box::new(Marker(Vec2::new(3.0, 0.0)))];
        let last = Marker(Vec2::new(4.0, 0.0));

        let others = Others::new(&before, &after, Some(&last as &dyn Actor));
        let xs: Vec<f32> = others.iter().map(|a| a.x()).collect();
        assert_eq!(xs, vec![1.0, 3.0, 4.0]);
        assert_eq!(others.len(), 3);
        assert!(Others::empty().is_empty());
    }
}

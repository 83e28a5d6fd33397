//! Frame driver
//!
//! Owns the roster and the run's RNG, advances every actor once per tick and
//! starts a new round whenever the player wins or loses.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::event::GameEvent;
use super::roster::Roster;
use crate::hud::Tally;
use crate::input::Direction;
use crate::render::{RenderTarget, SpriteInstance};
use crate::settings::Settings;

#[derive(Debug)]
pub struct Game {
    settings: Settings,
    seed: u64,
    rng: Pcg32,
    roster: Roster,
    tally: Tally,
    /// Frames simulated since the run started
    frames: u64,
}

impl Game {
    /// Start a run from an explicit seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        let settings = settings.sanitized();
        let mut rng = Pcg32::seed_from_u64(seed);
        let roster = Roster::spawn(settings.obstacle_count, &mut rng);
        Self {
            settings,
            seed,
            rng,
            roster,
            tally: Tally::default(),
            frames: 0,
        }
    }

    /// Start a run from the configured seed, or a random one
    pub fn from_settings(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::new(settings, seed)
    }

    /// Start a run on a hand-built first round
    pub fn with_roster(settings: Settings, seed: u64, roster: Roster) -> Self {
        Self {
            settings: settings.sanitized(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
            roster,
            tally: Tally::default(),
            frames: 0,
        }
    }

    /// Advance one frame.
    ///
    /// A terminal event is tallied and the next round is spawned before
    /// returning, so the caller only has to present it.
    pub fn tick(&mut self, dt: f32) -> GameEvent {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.settings.max_frame_dt)
        } else {
            0.0
        };
        self.frames += 1;

        let event = self.roster.update(dt);
        if event.is_terminal() {
            self.tally.record(event);
            log::info!(
                "Round over: {:?} at frame {} ({} won, {} lost)",
                event,
                self.frames,
                self.tally.wins,
                self.tally.losses
            );
            self.spawn_round();
        }
        event
    }

    /// Throw away the current round without scoring it
    pub fn restart(&mut self) {
        log::info!("Round restarted");
        self.spawn_round();
    }

    fn spawn_round(&mut self) {
        self.roster = Roster::spawn(self.settings.obstacle_count, &mut self.rng);
    }

    pub fn handle_input(&mut self, direction: Direction) {
        self.roster.player_mut().handle_input(direction);
    }

    /// Arrow-key codes move the player; anything else is ignored
    pub fn handle_key(&mut self, key_code: u32) {
        if let Some(direction) = Direction::from_key_code(key_code) {
            self.handle_input(direction);
        }
    }

    /// Direction names move the player; anything else is ignored
    pub fn handle_command(&mut self, command: &str) {
        match Direction::from_str(command) {
            Some(direction) => self.handle_input(direction),
            None => log::debug!("Ignoring unknown command {:?}", command),
        }
    }

    /// Paint every actor in roster order
    pub fn render<T: RenderTarget>(&self, target: &mut T) {
        for actor in self.roster.iter() {
            target.draw_sprite(actor.sprite(), actor.x(), actor.y());
        }
    }

    pub fn draw_list(&self) -> Vec<SpriteInstance> {
        self.roster.iter().map(SpriteInstance::of).collect()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

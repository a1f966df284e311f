//! Game session state and snapshot types
//!
//! Everything a round needs lives in one `GameSession`; there is no global
//! game state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::RoundClock;
use super::projectile::{FruitColor, Projectile};
use super::spawner::Spawner;
use super::trail::TrailBuffer;
use crate::error::ConfigError;
use crate::settings::SessionConfig;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Timer running, fruits flying
    Playing,
    /// Timer hit zero; simulation frozen until restart
    RoundOver,
}

/// Something that happened during a tick, for effects and logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Spawned { position: Vec2, radius: f32, color: FruitColor },
    Sliced { position: Vec2, color: FruitColor },
    RoundOver { final_score: u32 },
    Restarted,
    Quit,
}

/// A fruit as the presentation layer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: FruitColor,
}

/// Read-only view of a session after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u32,
    pub remaining_seconds: u32,
    pub round_state: RoundState,
    pub projectiles: Vec<ProjectileView>,
    pub trail: Vec<Vec2>,
}

/// One player's game, from construction until quit
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) config: SessionConfig,
    /// Seed the RNG was built from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) score: u32,
    pub(crate) round_state: RoundState,
    pub(crate) projectiles: Vec<Projectile>,
    pub(crate) trail: TrailBuffer,
    pub(crate) spawner: Spawner,
    pub(crate) clock: RoundClock,
    /// `remaining` as computed by the latest tick
    pub(crate) last_remaining: u32,
    /// Playing ticks simulated this round
    pub(crate) tick_count: u64,
    pub(crate) quit: bool,
    pub(crate) events: Vec<GameEvent>,
}

impl GameSession {
    /// Validate the config and start the first round at `now`
    pub fn new(config: SessionConfig, seed: u64, now: f64) -> Result<Self, ConfigError> {
        config.validate()?;
        let clock = RoundClock::new(config.round_duration_secs, now);
        let session = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            round_state: RoundState::Playing,
            projectiles: Vec::new(),
            trail: TrailBuffer::new(config.max_trail_length),
            spawner: Spawner::new(&config),
            last_remaining: clock.full(),
            clock,
            tick_count: 0,
            quit: false,
            events: Vec::new(),
            config,
        };
        log::info!(
            "Session started (seed {}, {}x{}, {}s rounds)",
            seed,
            session.config.width,
            session.config.height,
            session.config.round_duration_secs
        );
        Ok(session)
    }

    /// Begin a fresh round at `now`
    ///
    /// Score, fruits, trail, spawn counter and timer all start over. The RNG
    /// keeps its stream so consecutive rounds differ.
    pub fn reset(&mut self, now: f64) {
        self.score = 0;
        self.projectiles.clear();
        self.trail.clear();
        self.spawner.reset();
        self.clock.reset(now);
        self.last_remaining = self.clock.full();
        self.tick_count = 0;
        self.round_state = RoundState::Playing;
        log::info!("Round reset");
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round_state(&self) -> RoundState {
        self.round_state
    }

    /// Seconds left as of the latest tick
    pub fn remaining(&self) -> u32 {
        self.last_remaining
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Immutable view for the presentation layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            remaining_seconds: self.last_remaining,
            round_state: self.round_state,
            projectiles: self
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    x: p.pos.x,
                    y: p.pos.y,
                    radius: p.radius,
                    color: p.color,
                })
                .collect(),
            trail: self.trail.to_vec(),
        }
    }
}

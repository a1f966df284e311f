//! Slice Arcade - A hand-tracked fruit slicing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (projectiles, trail, slicing, round state)
//! - `scene`: Renderer-agnostic draw list built from simulation snapshots
//! - `platform`: Collaborator boundary (fingertip tracking, time source)
//! - `settings`: Session configuration and validation

pub mod error;
pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::SessionConfig;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Round length in seconds
    pub const ROUND_DURATION_SECS: f64 = 40.0;

    /// Ticks between fruit spawns
    pub const SPAWN_INTERVAL: u32 = 40;

    /// Fingertip positions kept for drawing and slicing
    pub const MAX_TRAIL_LENGTH: usize = 15;

    /// Fruit defaults
    pub const FRUIT_RADIUS_MIN: u32 = 25;
    pub const FRUIT_RADIUS_MAX: u32 = 40;
    /// Launch speed range (units/tick, applied upward)
    pub const LAUNCH_SPEED_MIN: f32 = 20.0;
    pub const LAUNCH_SPEED_MAX: f32 = 28.0;
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.5;

    /// Host frame rate cap
    pub const TARGET_FPS: u32 = 60;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

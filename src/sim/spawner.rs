//! Periodic fruit spawning
//!
//! Spawn attributes come from the session's seeded RNG so a run can be
//! replayed exactly from its seed.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::projectile::{FruitColor, Projectile};
use crate::settings::SessionConfig;

/// Tick-counting fruit spawner
#[derive(Debug, Clone)]
pub struct Spawner {
    interval: u32,
    counter: u32,
    width: f32,
    height: f32,
    radius_min: u32,
    radius_max: u32,
    speed_min: f32,
    speed_max: f32,
    gravity: f32,
}

impl Spawner {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            interval: config.spawn_interval_ticks,
            counter: 0,
            width: config.width,
            height: config.height,
            radius_min: config.radius_min,
            radius_max: config.radius_max,
            speed_min: config.launch_speed_min,
            speed_max: config.launch_speed_max,
            gravity: config.gravity,
        }
    }

    /// Ticks counted since the last spawn
    pub fn counter(&self) -> u32 {
        self.counter
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Count one tick; returns a new fruit every `interval` ticks
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Projectile> {
        self.counter += 1;
        if self.counter < self.interval {
            return None;
        }
        self.counter = 0;
        Some(self.spawn(rng))
    }

    /// Create a fruit fully on-screen horizontally, just below the bottom edge
    ///
    /// Radius and x land on whole pixels.
    pub fn spawn<R: Rng + ?Sized>(&self, rng: &mut R) -> Projectile {
        let radius = rng.random_range(self.radius_min..=self.radius_max);
        // Validation guarantees width >= 2 * radius_max
        let span = self.width.floor() as u32;
        let x = rng.random_range(radius..=span - radius) as f32;
        let radius = radius as f32;
        let speed = rng.random_range(self.speed_min..self.speed_max);
        let color = *FruitColor::PALETTE
            .choose(rng)
            .unwrap_or(&FruitColor::Red);
        Projectile::new(
            Vec2::new(x, self.height + radius),
            radius,
            -speed,
            self.gravity,
            color,
        )
    }
}

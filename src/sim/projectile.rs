//! Fruit projectiles
//!
//! A fruit is launched upward from just below the bottom edge and falls back
//! under constant gravity. It never moves horizontally.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Cosmetic fruit colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FruitColor {
    Red,
    Green,
    Yellow,
    Orange,
    Purple,
}

impl FruitColor {
    /// Fixed palette fruits are drawn from
    pub const PALETTE: [FruitColor; 5] = [
        FruitColor::Red,
        FruitColor::Green,
        FruitColor::Yellow,
        FruitColor::Orange,
        FruitColor::Purple,
    ];

    /// 8-bit RGB value for drawing
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            FruitColor::Red => [255, 0, 0],
            FruitColor::Green => [0, 255, 0],
            FruitColor::Yellow => [255, 255, 0],
            FruitColor::Orange => [255, 140, 0],
            FruitColor::Purple => [128, 0, 128],
        }
    }
}

/// A single fruit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub radius: f32,
    pub color: FruitColor,
    /// Vertical velocity (units/tick, negative is up)
    pub vel_y: f32,
    pub gravity: f32,
    active: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, radius: f32, vel_y: f32, gravity: f32, color: FruitColor) -> Self {
        Self {
            pos,
            radius,
            color,
            vel_y,
            gravity,
            active: true,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Mark the fruit as finished. Idempotent; there is no way back.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Integrate one tick (explicit Euler) and retire the fruit once its top
    /// edge has dropped below the playfield
    pub fn advance(&mut self, playfield_height: f32) {
        if !self.active {
            return;
        }
        self.pos.y += self.vel_y;
        self.vel_y += self.gravity;
        if self.pos.y - self.radius > playfield_height {
            self.active = false;
        }
    }
}

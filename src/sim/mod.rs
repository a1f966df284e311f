//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per host frame, timestamp passed in
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod projectile;
pub mod slice;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod trail;

pub use clock::RoundClock;
pub use projectile::{FruitColor, Projectile};
pub use slice::{detect_slices, point_segment_distance, segment_hits};
pub use spawner::Spawner;
pub use state::{GameEvent, GameSession, ProjectileView, RoundState, Snapshot};
pub use tick::{Command, Flow, TickInput};
pub use trail::TrailBuffer;

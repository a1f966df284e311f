//! Configuration errors
//!
//! Raised when a session is built from settings it cannot run with. Per-tick
//! simulation has no error paths.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("playfield must be finite and positive, got {width}x{height}")]
    InvalidPlayfield { width: f32, height: f32 },

    #[error("round duration must be positive, got {0} seconds")]
    InvalidRoundDuration(f64),

    #[error("spawn interval must be at least one tick")]
    ZeroSpawnInterval,

    #[error("trail length must be at least one point")]
    ZeroTrailLength,

    #[error("fruit radius range {min}..={max} is empty or zero")]
    InvalidRadiusRange { min: u32, max: u32 },

    #[error("launch speed range {min}..{max} is empty or non-positive")]
    InvalidSpeedRange { min: f32, max: f32 },

    #[error("gravity must be finite and positive, got {0}")]
    InvalidGravity(f32),

    #[error("playfield width {width} cannot fit a fruit of radius {radius}")]
    PlayfieldTooNarrow { width: f32, radius: u32 },

    #[error("failed to read config {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] serde_json::Error),
}

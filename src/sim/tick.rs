//! Per-frame simulation tick
//!
//! The host calls `tick` once per frame with that frame's fingertip sample,
//! commands, and a single timestamp.

use glam::Vec2;

use super::slice::detect_slices;
use super::state::{GameEvent, GameSession, RoundState};

/// Host commands for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a new round (only honored in RoundOver)
    Restart,
    /// Stop the game; terminal
    Quit,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Fingertip position in playfield coordinates, `None` when no hand is seen
    pub fingertip: Option<Vec2>,
    /// Commands received since the previous tick, in arrival order
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn with_fingertip(point: Vec2) -> Self {
        Self {
            fingertip: Some(point),
            ..Default::default()
        }
    }

    pub fn command(command: Command) -> Self {
        Self {
            commands: vec![command],
            ..Default::default()
        }
    }
}

/// What the host should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Release external resources and stop calling `tick`
    Quit,
}

impl GameSession {
    /// Advance the session by one frame at timestamp `now` (seconds)
    pub fn tick(&mut self, input: &TickInput, now: f64) -> Flow {
        if self.quit {
            return Flow::Quit;
        }

        // Quit wins over anything else queued this frame
        if input.commands.contains(&Command::Quit) {
            log::info!("Quit requested (score {})", self.score);
            self.quit = true;
            self.events.push(GameEvent::Quit);
            return Flow::Quit;
        }

        if input.commands.contains(&Command::Restart) {
            match self.round_state {
                RoundState::RoundOver => {
                    self.reset(now);
                    self.events.push(GameEvent::Restarted);
                    // The restart frame only resets
                    return Flow::Continue;
                }
                RoundState::Playing => {
                    log::warn!("Restart ignored while a round is playing");
                }
            }
        }

        match self.round_state {
            RoundState::RoundOver => Flow::Continue,
            RoundState::Playing => {
                self.step_playing(input.fingertip, now);
                Flow::Continue
            }
        }
    }

    fn step_playing(&mut self, fingertip: Option<Vec2>, now: f64) {
        // Timer
        self.last_remaining = self.clock.remaining(now);
        if self.last_remaining == 0 {
            self.round_state = RoundState::RoundOver;
            self.events.push(GameEvent::RoundOver {
                final_score: self.score,
            });
            log::info!("Round over, final score {}", self.score);
            return;
        }

        self.tick_count += 1;

        // A frame without a hand drops the whole trail
        match fingertip {
            Some(point) => self.trail.push(point),
            None => self.trail.clear(),
        }

        // Slicing
        let sliced = detect_slices(self.trail.segments(), &mut self.projectiles);
        for &i in &sliced {
            let fruit = &self.projectiles[i];
            log::debug!("Sliced {:?} fruit at {:?}", fruit.color, fruit.pos);
            self.events.push(GameEvent::Sliced {
                position: fruit.pos,
                color: fruit.color,
            });
        }
        self.score += sliced.len() as u32;

        // Spawning
        if let Some(fruit) = self.spawner.advance(&mut self.rng) {
            log::debug!(
                "Spawned {:?} fruit r={} at x={:.1}",
                fruit.color,
                fruit.radius,
                fruit.pos.x
            );
            self.events.push(GameEvent::Spawned {
                position: fruit.pos,
                radius: fruit.radius,
                color: fruit.color,
            });
            self.projectiles.push(fruit);
        }

        // Physics, then drop everything that finished this tick
        let height = self.config.height;
        for fruit in &mut self.projectiles {
            fruit.advance(height);
        }
        self.projectiles.retain(|p| p.is_active());

        log::trace!(
            "Tick {}: {} fruits, trail {}, score {}, {}s left, spawn counter {}",
            self.tick_count,
            self.projectiles.len(),
            self.trail.len(),
            self.score,
            self.last_remaining,
            self.spawner.counter()
        );
    }
}

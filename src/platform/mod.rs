//! Platform abstraction layer
//!
//! The simulation never talks to cameras, clocks, or keyboards directly.
//! Hosts implement these traits and feed one sample per frame:
//! - `FingertipSource`: tracked fingertip in playfield coordinates
//! - `TimeSource`: monotonic seconds
//! - `run_frames`: the frame loop gluing them to a `GameSession`

use std::time::Instant;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Command, Flow, GameEvent, GameSession, Snapshot, TickInput};

/// Produces at most one fingertip position per frame
pub trait FingertipSource {
    /// `None` when no hand is visible this frame
    fn sample(&mut self) -> Option<Vec2>;
}

/// Monotonic clock in fractional seconds
pub trait TimeSource {
    fn now(&mut self) -> f64;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Simulated clock advancing a fixed step per reading (headless runs)
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    time: f64,
    step: f64,
}

impl FixedStepClock {
    pub fn new(fps: u32) -> Self {
        Self {
            time: 0.0,
            step: 1.0 / fps.max(1) as f64,
        }
    }
}

impl TimeSource for FixedStepClock {
    fn now(&mut self) -> f64 {
        let t = self.time;
        self.time += self.step;
        t
    }
}

/// Map a normalized camera landmark to mirrored playfield coordinates
///
/// Front cameras see the player flipped; mirroring x makes the trail follow
/// the hand the way a mirror would.
pub fn mirror_landmark(norm_x: f32, norm_y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(width - norm_x * width, norm_y * height)
}

/// Synthetic hand sweeping side to side across the playfield
///
/// Drops out for a few frames now and then, like a real tracker losing
/// the hand.
#[derive(Debug, Clone)]
pub struct ScriptedSwipe {
    width: f32,
    height: f32,
    frame: u64,
    rng: Pcg32,
    dropout_left: u32,
}

impl ScriptedSwipe {
    /// Frames per full left-right-left sweep
    const PERIOD: f32 = 90.0;
    /// Chance per frame that tracking drops out
    const DROPOUT_CHANCE: f64 = 0.02;

    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self {
            width,
            height,
            frame: 0,
            rng: Pcg32::seed_from_u64(seed),
            dropout_left: 0,
        }
    }
}

impl FingertipSource for ScriptedSwipe {
    fn sample(&mut self) -> Option<Vec2> {
        self.frame += 1;
        if self.dropout_left > 0 {
            self.dropout_left -= 1;
            return None;
        }
        if self.rng.random_bool(Self::DROPOUT_CHANCE) {
            self.dropout_left = self.rng.random_range(1..6);
            return None;
        }
        let phase = self.frame as f32 / Self::PERIOD * std::f32::consts::TAU;
        let norm_x = 0.5 + 0.45 * phase.sin();
        let norm_y = 0.35 + 0.2 * (phase * 2.0).cos();
        Some(mirror_landmark(norm_x, norm_y, self.width, self.height))
    }
}

/// Drive a session for up to `max_frames` frames
///
/// `commands` is polled once per frame with the previous frame's snapshot;
/// `on_frame` sees each new snapshot together with the events that tick
/// produced, so nothing queues up inside the session. Stops early when the
/// session quits. Returns the number of frames run.
pub fn run_frames<F, T, C, O>(
    session: &mut GameSession,
    fingertips: &mut F,
    clock: &mut T,
    max_frames: u64,
    mut commands: C,
    mut on_frame: O,
) -> u64
where
    F: FingertipSource,
    T: TimeSource,
    C: FnMut(&Snapshot) -> Vec<Command>,
    O: FnMut(u64, &Snapshot, Vec<GameEvent>),
{
    let mut snapshot = session.snapshot();
    for frame in 0..max_frames {
        let input = TickInput {
            fingertip: fingertips.sample(),
            commands: commands(&snapshot),
        };
        let now = clock.now();
        let flow = session.tick(&input, now);
        snapshot = session.snapshot();
        on_frame(frame, &snapshot, session.drain_events());
        if flow == Flow::Quit {
            return frame + 1;
        }
    }
    max_frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SessionConfig;
    use crate::sim::RoundState;

    #[test]
    fn test_mirror_landmark() {
        assert_eq!(mirror_landmark(0.25, 0.5, 800.0, 600.0), Vec2::new(600.0, 300.0));
        assert_eq!(mirror_landmark(0.0, 0.0, 800.0, 600.0), Vec2::new(800.0, 0.0));
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let mut clock = SystemClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(a >= 0.0 && b >= a);
    }

    #[test]
    fn test_fixed_step_clock() {
        let mut clock = FixedStepClock::new(60);
        assert_eq!(clock.now(), 0.0);
        let t = clock.now();
        assert!((t - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_scripted_swipe_stays_in_playfield() {
        let mut swipe = ScriptedSwipe::new(800.0, 600.0, 3);
        let mut seen = 0;
        for _ in 0..1000 {
            if let Some(p) = swipe.sample() {
                seen += 1;
                assert!((0.0..=800.0).contains(&p.x));
                assert!((0.0..=600.0).contains(&p.y));
            }
        }
        assert!(seen > 800);
    }

    #[test]
    fn test_run_frames_stops_on_quit() {
        let mut session = GameSession::new(SessionConfig::default(), 5, 0.0).unwrap();
        let mut swipe = ScriptedSwipe::new(800.0, 600.0, 5);
        let mut clock = FixedStepClock::new(60);
        let mut frames_seen = 0;
        let mut quit_events = 0;
        let ran = run_frames(
            &mut session,
            &mut swipe,
            &mut clock,
            1000,
            |_| {
                frames_seen += 1;
                if frames_seen == 10 { vec![Command::Quit] } else { Vec::new() }
            },
            |_, _, events| quit_events += events.iter().filter(|e| **e == GameEvent::Quit).count(),
        );
        assert_eq!(ran, 10);
        assert!(session.is_quit());
        assert_eq!(quit_events, 1);
    }

    #[test]
    fn test_run_frames_plays_a_round() {
        let config = SessionConfig {
            round_duration_secs: 5.0,
            ..Default::default()
        };
        let mut session = GameSession::new(config, 5, 0.0).unwrap();
        let mut swipe = ScriptedSwipe::new(800.0, 600.0, 5);
        let mut clock = FixedStepClock::new(60);
        let mut last = None;
        let mut spawned = 0;
        run_frames(&mut session, &mut swipe, &mut clock, 400, |_| Vec::new(), |_, s, events| {
            spawned += events
                .iter()
                .filter(|e| matches!(e, GameEvent::Spawned { .. }))
                .count();
            last = Some(s.clone())
        });
        let last = last.unwrap();
        assert_eq!(last.round_state, RoundState::RoundOver);
        assert_eq!(last.remaining_seconds, 0);
        assert!(spawned > 0);
        assert!(session.drain_events().is_empty(), "events handed out every frame");
    }
}

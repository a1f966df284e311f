//! Slice Arcade entry point
//!
//! Headless host: a scripted hand swipes across the playfield and the
//! session is driven at a fixed frame rate. Snapshots or draw lists can be
//! streamed as JSON lines for an external renderer.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use clap::Parser;

    use slice_arcade::consts::TARGET_FPS;
    use slice_arcade::platform::{FixedStepClock, ScriptedSwipe, SystemClock, TimeSource, run_frames};
    use slice_arcade::scene::build_scene;
    use slice_arcade::scene::vertex::as_bytes;
    use slice_arcade::sim::{Command, GameEvent, GameSession, RoundState, Snapshot};
    use slice_arcade::SessionConfig;

    #[derive(Parser, Debug)]
    #[command(name = "slice-arcade", about = "Headless fruit slicing simulation")]
    struct Args {
        /// JSON session config (defaults fill any missing field)
        #[arg(long)]
        config: Option<PathBuf>,

        /// RNG seed for fruit spawns and the scripted hand
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Simulated frames per second
        #[arg(long, default_value_t = TARGET_FPS)]
        fps: u32,

        /// Stop after this many frames
        #[arg(long, default_value_t = 10_000)]
        frames: u64,

        /// Rounds to play before quitting
        #[arg(long, default_value_t = 1)]
        rounds: u32,

        /// Print one JSON line per frame
        #[arg(long, value_enum)]
        json: Option<JsonOutput>,

        /// Time source: simulated fixed steps, or real time paced at `--fps`
        #[arg(long, value_enum, default_value_t = ClockKind::Fixed)]
        clock: ClockKind,
    }

    #[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
    enum ClockKind {
        Fixed,
        Wall,
    }

    #[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
    enum JsonOutput {
        Snapshot,
        Scene,
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();
        log::info!("Slice Arcade (headless) starting...");

        let config = match &args.config {
            Some(path) => SessionConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SessionConfig::default(),
        };

        let mut session =
            GameSession::new(config.clone(), args.seed, 0.0).context("starting session")?;
        let mut swipe = ScriptedSwipe::new(config.width, config.height, args.seed);

        let totals = match args.clock {
            ClockKind::Fixed => drive(
                &args,
                &config,
                &mut session,
                &mut swipe,
                &mut FixedStepClock::new(args.fps),
            ),
            ClockKind::Wall => drive(&args, &config, &mut session, &mut swipe, &mut SystemClock::new()),
        };

        log::info!(
            "Ran {} frames, {} fruits sliced, round scores {:?}",
            totals.frames,
            totals.sliced,
            totals.final_scores
        );
        if args.json.is_none() {
            println!("Final scores: {:?}", totals.final_scores);
        }
        Ok(())
    }

    #[derive(Debug, Default)]
    struct Totals {
        frames: u64,
        sliced: u64,
        final_scores: Vec<u32>,
    }

    fn drive<T: TimeSource>(
        args: &Args,
        config: &SessionConfig,
        session: &mut GameSession,
        swipe: &mut ScriptedSwipe,
        clock: &mut T,
    ) -> Totals {
        let frame_time = Duration::from_secs_f64(1.0 / args.fps.max(1) as f64);
        let mut rounds_done = 0u32;
        let mut totals = Totals::default();

        let frames = run_frames(
            session,
            swipe,
            clock,
            args.frames,
            |snapshot| {
                if snapshot.round_state != RoundState::RoundOver {
                    return Vec::new();
                }
                rounds_done += 1;
                if rounds_done >= args.rounds {
                    vec![Command::Quit]
                } else {
                    vec![Command::Restart]
                }
            },
            |frame, snapshot, events| {
                for event in events {
                    match event {
                        GameEvent::Sliced { .. } => totals.sliced += 1,
                        GameEvent::RoundOver { final_score } => totals.final_scores.push(final_score),
                        _ => {}
                    }
                }
                emit(args.json, frame, snapshot, config);
                if args.clock == ClockKind::Wall {
                    std::thread::sleep(frame_time);
                }
            },
        );
        totals.frames = frames;
        totals
    }

    fn emit(json: Option<JsonOutput>, frame: u64, snapshot: &Snapshot, config: &SessionConfig) {
        match json {
            Some(JsonOutput::Snapshot) => match serde_json::to_string(snapshot) {
                Ok(line) => println!("{line}"),
                Err(e) => log::warn!("Snapshot encode failed: {e}"),
            },
            Some(JsonOutput::Scene) => {
                let scene = build_scene(snapshot, config);
                if log::log_enabled!(log::Level::Trace) {
                    let triangles = scene.triangles();
                    log::trace!(
                        "Frame {}: {} vertices ({} bytes)",
                        frame,
                        triangles.len(),
                        as_bytes(&triangles).len()
                    );
                }
                match serde_json::to_string(&scene) {
                    Ok(line) => println!("{line}"),
                    Err(e) => log::warn!("Scene encode failed: {e}"),
                }
            }
            None => {}
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless host on the web; embed the library instead
}

//! Lane Dodge headless demo
//!
//! Runs one session against a simulated 60 Hz host with a scripted weaving
//! pointer, logging progress until the car crashes or the step cap is hit.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use lane_dodge::PlayfieldConfig;
use lane_dodge::SessionController;
use lane_dodge::renderer::{DrawCommand, Renderer};
use lane_dodge::sim::{GameEvent, GamePhase};

#[derive(Debug, Parser)]
#[command(name = "lane-dodge", about = "Run a headless lane-dodge session")]
struct Args {
    /// JSON playfield config (defaults are used when omitted)
    config: Option<PathBuf>,

    /// RNG seed for the obstacle stream
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Give up after this many host frames
    #[arg(long, default_value_t = 60 * 60)]
    max_frames: u32,

    /// Gap between the car and the bottom edge, overriding the config
    #[arg(long)]
    player_bottom_margin: Option<f64>,

    /// Host frame time in milliseconds
    #[arg(long, default_value_t = 1000.0 / 60.0)]
    frame_ms: f64,
}

/// Logs a frame summary every second of game time
#[derive(Default)]
struct LogRenderer {
    frames: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, commands: &[DrawCommand]) {
        self.frames += 1;
        if self.frames % 60 != 0 {
            return;
        }
        let obstacles = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Obstacle { .. }))
            .count();
        let score = commands.iter().find_map(|c| match c {
            DrawCommand::Score(score) => Some(*score),
            _ => None,
        });
        log::info!(
            "frame {}: {} obstacles on road, score {:?}",
            self.frames,
            obstacles,
            score
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PlayfieldConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlayfieldConfig::default(),
    };
    if let Some(margin) = args.player_bottom_margin {
        config = config.with_player_bottom_margin(margin);
    }

    let mut controller =
        SessionController::new(config, args.seed).context("creating session")?;
    let mut renderer = LogRenderer::default();
    log::info!("Lane Dodge (native) starting with seed {}", args.seed);

    controller.start();
    let mut passed = 0u64;
    for frame in 0..args.max_frames {
        // Weave across the road
        let t = frame as f64 * args.frame_ms / 1000.0;
        let pointer = config.width * (0.5 + 0.45 * (t * 1.3).sin());
        controller.on_drag(pointer);

        controller.tick(args.frame_ms);
        controller.render(&mut renderer);

        for event in controller.drain_events() {
            match event {
                GameEvent::ObstaclePassed { .. } => passed += 1,
                GameEvent::Collision { obstacle_id } => {
                    log::info!("Crashed into obstacle {}", obstacle_id)
                }
                _ => {}
            }
        }

        if controller.phase() == GamePhase::GameOver {
            break;
        }
    }
    controller.stop();

    let snapshot = controller.snapshot();
    println!(
        "{:?} after {} steps, score {} ({} dodged)",
        snapshot.phase, snapshot.elapsed_steps, snapshot.score, passed
    );
    Ok(())
}

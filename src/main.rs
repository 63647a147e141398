//! Bomb Grid entry point
//!
//! Native driver: builds a game from an optional config file and seed, then
//! runs a self-playing demo in the terminal.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use bomb_grid::render::{Renderer, Snapshot, TextRenderer};
use bomb_grid::sim::{Direction, Intent};
use bomb_grid::{FrameScheduler, GameConfig};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Frames between demo-bot decisions
const BOT_INTERVAL: u64 = 8;
/// Frames between terminal redraws
const PRINT_INTERVAL: u64 = 6;
/// Frames the demo keeps running after the outcome is decided
const LINGER_FRAMES: u64 = 90;

#[derive(Debug, Parser)]
#[command(name = "bomb-grid")]
#[command(about = "Tile-based bomb arcade game (self-playing terminal demo)")]
struct Args {
    /// JSON config file; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Run seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,
}

/// Prints every few frames to the terminal
struct TerminalRenderer {
    text: TextRenderer,
}

impl Renderer for TerminalRenderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>) {
        self.text.draw(snapshot);
        if snapshot.tick % PRINT_INTERVAL == 0 {
            // Clear screen, cursor home
            println!("\x1b[2J\x1b[H{}", self.text.frame);
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Bomb Grid (native) starting...");

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let mut scheduler = match FrameScheduler::new(config, seed) {
        Ok(scheduler) => scheduler,
        Err(err) => {
            log::error!("Could not start game: {}", err);
            std::process::exit(1);
        }
    };
    log::info!("Started new game with seed: {}", seed);

    let mut bot = Pcg32::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15);
    let mut renderer = TerminalRenderer {
        text: TextRenderer::new(),
    };
    let mut frame = 0u64;
    let mut over_at: Option<u64> = None;

    scheduler.run(&mut renderer, |scheduler| {
        frame += 1;
        if args.frames.is_some_and(|max| frame > max) {
            return false;
        }
        if scheduler.status().is_over() {
            let start = *over_at.get_or_insert(frame);
            return frame - start < LINGER_FRAMES;
        }

        if frame % BOT_INTERVAL == 0 {
            let i = bot.random_range(0..Direction::ALL.len());
            scheduler.queue(Intent::Move(Direction::ALL[i]));
            if scheduler.state().bombs.is_empty() && bot.random::<f64>() < 0.15 {
                scheduler.queue(Intent::PlaceBomb);
            }
        }
        true
    });

    println!("{}", scheduler.status().message());
}

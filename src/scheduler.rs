//! Frame scheduler
//!
//! Owns the game state and runs exactly one simulation tick per displayed
//! frame, then hands the frame to a renderer. It never stops on its own: a
//! finished game keeps ticking so explosions play out, while player input is
//! ignored.

use std::time::{Duration, Instant};

use crate::error::GameError;
use crate::render::{Renderer, Snapshot};
use crate::settings::GameConfig;
use crate::sim::{GameEvent, GameState, GameStatus, Intent, TickInput, tick};

pub struct FrameScheduler {
    state: GameState,
    /// Intents queued since the last frame
    input: TickInput,
    last_status: GameStatus,
}

impl FrameScheduler {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Ok(Self::from_state(GameState::new(config, seed)?))
    }

    pub fn from_state(state: GameState) -> Self {
        let last_status = state.status();
        Self {
            state,
            input: TickInput::default(),
            last_status,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        self.last_status
    }

    /// Queue an intent for the next frame. Dropped once the player is dead.
    pub fn queue(&mut self, intent: Intent) {
        if self.state.player.alive {
            self.input.intents.push(intent);
        }
    }

    /// Run one frame: tick, then draw. Returns the events the tick produced.
    pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Vec<GameEvent> {
        let input = std::mem::take(&mut self.input);
        let status = tick(&mut self.state, &input);

        if status != self.last_status {
            log::info!("Status: {:?} {}", status, status.message());
            self.last_status = status;
        }

        renderer.draw(&Snapshot::of(&self.state));
        self.state.drain_events()
    }

    /// Frame period for the configured frame rate
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.state.config.frame_rate))
    }

    /// Run frames paced to the frame rate
    ///
    /// `before_frame` is called ahead of every frame so the caller can queue
    /// input; it returns false to stop the loop.
    pub fn run<R, F>(&mut self, renderer: &mut R, mut before_frame: F)
    where
        R: Renderer + ?Sized,
        F: FnMut(&mut Self) -> bool,
    {
        let period = self.frame_period();
        let mut next = Instant::now();

        while before_frame(self) {
            self.frame(renderer);

            next += period;
            let now = Instant::now();
            if next > now {
                std::thread::sleep(next - now);
            } else {
                next = now;
            }
        }
    }
}

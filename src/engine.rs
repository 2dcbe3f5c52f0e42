//! The game-loop driver and the only host-facing surface.
//!
//! Hosts call `start`, `pause`/`resume`, and `handle_input`, tick once per
//! scheduled frame, and read `snapshot()` for rendering. All mutable engine
//! state stays behind these methods; nothing reaches into the internals.

use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::error::{EngineError, EngineResult};
use crate::sim::state::{RunPhase, RunState};
use crate::sim::tick::{self, InputState};
use crate::snapshot::Snapshot;

/// Directional input the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
}

impl Key {
    /// Map a DOM-style `KeyboardEvent.code` to a key, for browser-shaped
    /// hosts. Unknown codes are simply not the engine's business.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" | "KeyW" => Some(Key::Up),
            "ArrowDown" | "KeyS" => Some(Key::Down),
            "ArrowLeft" | "KeyA" => Some(Key::Left),
            "ArrowRight" | "KeyD" => Some(Key::Right),
            _ => None,
        }
    }
}

/// One game instance: a validated config, the current run, and its RNG.
pub struct Engine {
    config: GameConfig,
    pub(crate) state: RunState,
    rng: Pcg32,
    input: InputState,
}

impl Engine {
    /// Validates the config up front; a bad config never becomes an engine.
    pub fn new(config: GameConfig, seed: u64) -> EngineResult<Self> {
        config.validate()?;
        let state = RunState::new(&config, seed);
        let rng = state.rng_state.to_rng();
        Ok(Self {
            config,
            state,
            rng,
            input: InputState::default(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> RunPhase {
        self.state.phase
    }

    /// Begin a run from `Idle` or `Over`, resetting entities, score, gauges,
    /// the frame counter, and the RNG to the run seed. Starting a run that
    /// is already in flight is an error, never a silent restart.
    pub fn start(&mut self) -> EngineResult<()> {
        match self.state.phase {
            RunPhase::Idle | RunPhase::Over => {
                self.state = RunState::new(&self.config, self.state.seed);
                self.rng = self.state.rng_state.to_rng();
                self.state.phase = RunPhase::Running;
                log::info!("run started (seed {})", self.state.seed);
                Ok(())
            }
            from => Err(EngineError::InvalidTransition {
                from,
                action: "start",
            }),
        }
    }

    /// Cease scheduling without resetting state.
    pub fn pause(&mut self) -> EngineResult<()> {
        match self.state.phase {
            RunPhase::Running => {
                self.state.phase = RunPhase::Paused;
                Ok(())
            }
            from => Err(EngineError::InvalidTransition {
                from,
                action: "pause",
            }),
        }
    }

    pub fn resume(&mut self) -> EngineResult<()> {
        match self.state.phase {
            RunPhase::Paused => {
                self.state.phase = RunPhase::Running;
                Ok(())
            }
            from => Err(EngineError::InvalidTransition {
                from,
                action: "resume",
            }),
        }
    }

    /// Record held input. May be called at any time relative to ticks;
    /// the motion step reads the most recent state, last write wins.
    pub fn handle_input(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Up => self.input.up = pressed,
            Key::Down => self.input.down = pressed,
            Key::Left => self.input.left = pressed,
            Key::Right => self.input.right = pressed,
        }
    }

    /// Advance one frame. A no-op unless `Running`.
    pub fn tick(&mut self) {
        tick::tick(&mut self.state, &self.config, self.input, &mut self.rng);
    }

    /// Read-only view for the rendering boundary.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }
}

//! Astro Arcade - a deterministic 2D mini-game engine
//!
//! One parametrized spawn/move/collide/score loop behind several arcade
//! mini-games (an endless dodge runner, a side-scrolling collector) and a
//! pair of delta-time physics toys (rocket ascent, n-body gravity).
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, motion, collisions, tick)
//! - `config`: Per-game configuration, validated at construction
//! - `engine`: The game-loop driver and host-facing surface
//! - `scheduler`: Frame pacing abstraction (wall-clock or manual)
//! - `tuning`: Data-driven tunings for the concrete games
//!
//! Rendering is a host concern: the engine only hands out [`Snapshot`]s.

pub mod config;
pub mod engine;
pub mod error;
pub mod scheduler;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use config::GameConfig;
pub use engine::{Engine, Key};
pub use error::{EngineError, EngineResult};
pub use snapshot::Snapshot;

/// Engine-wide constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the animation-frame cadence the
    /// arcade tunings are calibrated against)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Default frame rate for wall-clock schedulers
    pub const DEFAULT_FPS: u32 = 60;
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame stepping (arcade) or explicit dt integration (toys)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::overlaps;
pub use physics::{Body, NBodySim, RocketConfig, RocketSim};
pub use state::{Aabb, Entity, Gauge, Player, RngState, RunPhase, RunState};
pub use tick::{InputState, tick};

//! Run state and core simulation types
//!
//! Everything that must be reset on restart (and compared for the
//! restart-equals-fresh guarantee) lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{EntityKind, GameConfig};

/// Axis-aligned bounding box, canvas coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True when no part of the box is inside `[0, canvas)`.
    pub fn outside(&self, canvas: Vec2) -> bool {
        self.right() < 0.0 || self.left() > canvas.x || self.bottom() < 0.0 || self.top() > canvas.y
    }
}

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Constructed, never started (or stopped without a restart)
    Idle,
    /// Active gameplay
    Running,
    /// Scheduling ceased, state preserved
    Paused,
    /// Run ended
    Over,
}

/// A spawned object (hazard or collectible).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    /// Index into the config's category list
    pub category: usize,
    pub kind: EntityKind,
    pub bounds: Aabb,
    /// Speed in px/frame before the difficulty ramp
    pub base_speed: f32,
}

/// The player (or rover) box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub bounds: Aabb,
    pub speed: f32,
}

/// A bounded resource counter. Every mutation clamps to `[floor, max]`,
/// so the value can never leave `[0, max]` however many events land in
/// one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    pub name: String,
    pub value: f32,
    pub max: f32,
    pub floor: f32,
}

impl Gauge {
    pub fn new(name: impl Into<String>, initial: f32, max: f32, floor: f32) -> Self {
        Self {
            name: name.into(),
            value: initial.clamp(floor, max),
            max,
            floor,
        }
    }

    pub fn apply(&mut self, delta: f32) {
        self.value = (self.value + delta).clamp(self.floor, self.max);
    }

    pub fn at_floor(&self) -> bool {
        self.value <= self.floor
    }
}

/// RNG state wrapper so a run's randomness is reproducible from its seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete state of one run (deterministic, serializable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub seed: u64,
    pub rng_state: RngState,
    pub phase: RunPhase,
    /// Elapsed-frame counter, advanced at the top of every tick
    pub frame: u64,
    pub score: u64,
    pub player: Player,
    /// Active spawned objects in spawn order
    pub entities: Vec<Entity>,
    pub gauges: Vec<Gauge>,
    next_id: u32,
}

impl RunState {
    /// Baseline state for a config: phase `Idle`, empty store, gauges at
    /// their configured initial values.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            seed,
            rng_state: RngState::new(seed),
            phase: RunPhase::Idle,
            frame: 0,
            score: 0,
            player: Player {
                bounds: Aabb::new(config.player.start, config.player.size),
                speed: config.player.speed,
            },
            entities: Vec::new(),
            gauges: config
                .gauges
                .iter()
                .map(|g| Gauge::new(g.name.clone(), g.initial, g.max, g.floor))
                .collect(),
            next_id: 1,
        }
    }

    /// Append a spawned object, allocating its id.
    pub fn spawn_entity(
        &mut self,
        category: usize,
        kind: EntityKind,
        bounds: Aabb,
        base_speed: f32,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.push(Entity {
            id,
            category,
            kind,
            bounds,
            base_speed,
        });
        id
    }
}

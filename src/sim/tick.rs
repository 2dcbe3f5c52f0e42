//! Per-frame simulation step
//!
//! One tick runs the fixed sequence: spawn, move player, move entities,
//! resolve collisions (before off-screen culling), then score and gauge
//! bookkeeping. A terminal collision is a normal transition, not a fault;
//! ticking a run that is not `Running` is a no-op.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{EntityKind, GameConfig, MoveAxes, ScoringPolicy};

use super::collision::overlaps;
use super::spawn::maybe_spawn;
use super::state::{RunPhase, RunState};

/// Held directional input. Written asynchronously by the host, consulted
/// once at the start of the motion step; last write wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the run by one frame.
pub fn tick(state: &mut RunState, config: &GameConfig, input: InputState, rng: &mut Pcg32) {
    if state.phase != RunPhase::Running {
        return;
    }

    state.frame += 1;
    let frame = state.frame;

    // Spawn pass: deterministic timing, randomized attributes.
    for (idx, spec) in config.categories.iter().enumerate() {
        if let Some((bounds, base_speed)) =
            maybe_spawn(spec, frame, config.canvas, config.scroll, rng)
        {
            state.spawn_entity(idx, spec.kind, bounds, base_speed);
        }
    }

    move_player(state, config, input);

    // Entity motion: base speed plus the difficulty ramp, capped.
    let travel = config.scroll.travel();
    for entity in &mut state.entities {
        let speed =
            (entity.base_speed + frame as f32 * config.speed_ramp).min(config.max_entity_speed);
        entity.bounds.pos += travel * speed;
    }

    // Collision pass. Overlap is checked before off-screen culling so an
    // object cannot despawn out of a fatal (or rewarding) overlap in its
    // final frame.
    let player_box = state.player.bounds;
    let mut collected: u64 = 0;
    let mut i = 0;
    while i < state.entities.len() {
        let entity = &state.entities[i];
        if overlaps(&entity.bounds, &player_box) {
            match entity.kind {
                EntityKind::Hazard => {
                    let name = config
                        .categories
                        .get(entity.category)
                        .map_or("?", |c| c.name.as_str());
                    log::debug!("hazard '{name}' (id {}) ended the run at frame {frame}", entity.id);
                    state.phase = RunPhase::Over;
                    break;
                }
                EntityKind::Collectible { gauge, value } => {
                    state.gauges[gauge].apply(value);
                    collected += 1;
                    state.entities.remove(i);
                }
            }
        } else if entity.bounds.outside(config.canvas) {
            state.entities.remove(i);
        } else {
            i += 1;
        }
    }

    // Score and gauges freeze the moment the run ends.
    if state.phase == RunPhase::Over {
        return;
    }

    match config.scoring {
        ScoringPolicy::TimeSurvived {
            points,
            every_frames,
        } => {
            if frame % u64::from(every_frames) == 0 {
                state.score += points;
            }
        }
        ScoringPolicy::PerCollection { points } => {
            state.score += points * collected;
        }
    }

    for (gauge, spec) in state.gauges.iter_mut().zip(&config.gauges) {
        if spec.drain_per_frame > 0.0 {
            gauge.apply(-spec.drain_per_frame);
        }
        if spec.empty_ends_run && gauge.at_floor() {
            log::debug!("gauge '{}' exhausted at frame {frame}", gauge.name);
            state.phase = RunPhase::Over;
        }
    }
}

/// Apply held input to the player and clamp its box to the canvas.
fn move_player(state: &mut RunState, config: &GameConfig, input: InputState) {
    let mut delta = glam::Vec2::ZERO;
    let axes = config.player.axes;

    if matches!(axes, MoveAxes::Horizontal | MoveAxes::Both) {
        if input.left {
            delta.x -= 1.0;
        }
        if input.right {
            delta.x += 1.0;
        }
    }
    if matches!(axes, MoveAxes::Vertical | MoveAxes::Both) {
        if input.up {
            delta.y -= 1.0;
        }
        if input.down {
            delta.y += 1.0;
        }
    }

    let player = &mut state.player;
    player.bounds.pos += delta * player.speed;
    player.bounds.pos = player
        .bounds
        .pos
        .clamp(glam::Vec2::ZERO, config.canvas - player.bounds.size);
}

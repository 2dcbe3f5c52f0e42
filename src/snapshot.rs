//! Read-only view handed to the rendering boundary once per frame.
//!
//! The snapshot is a plain value: serializable for hosts that ship it over
//! a boundary (worker, FFI, inspector) and comparable so "restart equals a
//! fresh run" can be asserted exactly.

use serde::{Deserialize, Serialize};

use crate::config::EntityKind;
use crate::sim::state::{Aabb, RunPhase, RunState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: u32,
    pub category: usize,
    pub kind: EntityKind,
    pub bounds: Aabb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeView {
    pub name: String,
    pub value: f32,
    pub max: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: RunPhase,
    pub frame: u64,
    pub score: u64,
    pub player: Aabb,
    pub entities: Vec<EntityView>,
    pub gauges: Vec<GaugeView>,
}

impl Snapshot {
    pub(crate) fn capture(state: &RunState) -> Self {
        Self {
            phase: state.phase,
            frame: state.frame,
            score: state.score,
            player: state.player.bounds,
            entities: state
                .entities
                .iter()
                .map(|e| EntityView {
                    id: e.id,
                    category: e.category,
                    kind: e.kind,
                    bounds: e.bounds,
                })
                .collect(),
            gauges: state
                .gauges
                .iter()
                .map(|g| GaugeView {
                    name: g.name.clone(),
                    value: g.value,
                    max: g.max,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning;

    #[test]
    fn fresh_snapshot_matches_the_config_baseline() {
        let cfg = tuning::red_planet_rover();
        let state = RunState::new(&cfg, 9);
        let snap = Snapshot::capture(&state);
        assert_eq!(snap.phase, RunPhase::Idle);
        assert_eq!(snap.frame, 0);
        assert_eq!(snap.score, 0);
        assert!(snap.entities.is_empty());
        assert_eq!(snap.gauges.len(), 2);
        assert_eq!(snap.gauges[tuning::ROVER_SIGNAL].value, 100.0);
    }

    #[test]
    fn snapshot_serializes() {
        let cfg = tuning::astro_run();
        let snap = Snapshot::capture(&RunState::new(&cfg, 1));
        let json = snap.to_json().unwrap();
        assert!(json.contains("\"score\":0"));
    }
}

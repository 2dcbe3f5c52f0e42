//! Data-driven game tunings
//!
//! Each concrete mini-game is a configuration over the same engine; the
//! numbers here are the game balance, nothing else.

use glam::Vec2;

use crate::config::{
    CategorySpec, EntityKind, GameConfig, GaugeSpec, MoveAxes, PlayerConfig, Range, ScoringPolicy,
    ScrollDirection, SizeSpec,
};
use crate::sim::physics::{Body, NBodySim};

/// Gauge indices for [`red_planet_rover`].
pub const ROVER_WATER: usize = 0;
pub const ROVER_SIGNAL: usize = 1;

/// Endless dodge runner: the ship holds x=50 and steers vertically while
/// asteroids stream in from the right, ramping up in speed.
pub fn astro_run() -> GameConfig {
    GameConfig {
        canvas: Vec2::new(600.0, 400.0),
        scroll: ScrollDirection::Left,
        player: PlayerConfig {
            start: Vec2::new(50.0, 180.0),
            size: Vec2::splat(40.0),
            speed: 6.0,
            axes: MoveAxes::Vertical,
        },
        categories: vec![CategorySpec {
            name: "asteroid".to_string(),
            kind: EntityKind::Hazard,
            interval: 33,
            size: SizeSpec::Square(Range::new(20.0, 50.0)),
            speed: Range::new(3.0, 5.0),
        }],
        gauges: Vec::new(),
        scoring: ScoringPolicy::TimeSurvived {
            points: 1,
            every_frames: 1,
        },
        speed_ramp: 0.0005,
        max_entity_speed: 6.0,
    }
}

/// Side-scrolling collector: the rover steers horizontally along the bottom
/// while ice (worth water points), dust, and rocks fall from above. Signal
/// strength fades with distance travelled but bottoms out at 20.
pub fn red_planet_rover() -> GameConfig {
    GameConfig {
        canvas: Vec2::new(640.0, 360.0),
        scroll: ScrollDirection::Down,
        player: PlayerConfig {
            start: Vec2::new(40.0, 285.0),
            size: Vec2::new(64.0, 48.0),
            speed: 8.0,
            axes: MoveAxes::Horizontal,
        },
        categories: vec![
            CategorySpec {
                name: "ice".to_string(),
                kind: EntityKind::Collectible {
                    gauge: ROVER_WATER,
                    value: 50.0,
                },
                interval: 90,
                size: SizeSpec::Square(Range::fixed(16.0)),
                speed: Range::fixed(2.0),
            },
            CategorySpec {
                name: "dust".to_string(),
                kind: EntityKind::Hazard,
                interval: 150,
                size: SizeSpec::Square(Range::fixed(32.0)),
                speed: Range::fixed(1.5),
            },
            CategorySpec {
                name: "rock".to_string(),
                kind: EntityKind::Hazard,
                interval: 200,
                size: SizeSpec::Fixed { w: 28.0, h: 24.0 },
                speed: Range::fixed(1.8),
            },
        ],
        gauges: vec![
            GaugeSpec {
                name: "water".to_string(),
                initial: 0.0,
                max: 1_000_000.0,
                floor: 0.0,
                drain_per_frame: 0.0,
                empty_ends_run: false,
            },
            GaugeSpec {
                name: "signal".to_string(),
                initial: 100.0,
                max: 100.0,
                floor: 20.0,
                drain_per_frame: 0.01,
                empty_ends_run: false,
            },
        ],
        scoring: ScoringPolicy::TimeSurvived {
            points: 1,
            every_frames: 10,
        },
        speed_ramp: 0.003,
        max_entity_speed: 12.0,
    }
}

/// The zero-gravity sandbox's opening constellation: three bodies on
/// crossing paths.
pub fn gravity_sandbox() -> NBodySim {
    NBodySim::with_bodies(
        1800.0,
        vec![
            Body::new(Vec2::new(200.0, 200.0), Vec2::new(60.0, 0.0)),
            Body::new(Vec2::new(400.0, 200.0), Vec2::new(-60.0, 0.0)),
            Body::new(Vec2::new(300.0, 300.0), Vec2::new(0.0, 60.0)),
        ],
    )
}

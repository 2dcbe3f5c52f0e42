//! Game configuration
//!
//! Each concrete mini-game is one [`GameConfig`]; the engine itself is
//! generic. Configs are validated up front so a bad interval or a zero-size
//! entity is a construction-time error, never a NaN position at runtime.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas must have positive extent, got {width}x{height}")]
    BadCanvas { width: f32, height: f32 },

    #[error("spawn interval for '{category}' must be at least 1 frame")]
    ZeroSpawnInterval { category: String },

    #[error("{what} range is invalid: {min}..{max}")]
    BadRange { what: String, min: f32, max: f32 },

    #[error("{what} must be finite and non-negative, got {value}")]
    BadScalar { what: String, value: f32 },

    #[error("player box at ({x}, {y}) sized {w}x{h} does not fit the canvas")]
    PlayerOutOfBounds { x: f32, y: f32, w: f32, h: f32 },

    #[error("gauge '{name}' needs 0 <= floor <= initial <= max, got floor {floor}, initial {initial}, max {max}")]
    BadGauge {
        name: String,
        floor: f32,
        initial: f32,
        max: f32,
    },

    #[error("category '{category}' credits gauge #{gauge}, but only {count} gauges are configured")]
    UnknownGauge {
        category: String,
        gauge: usize,
        count: usize,
    },
}

/// Direction spawned objects travel across the canvas. The spawn edge is
/// the opposite one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollDirection {
    Left,
    Right,
    Up,
    Down,
}

impl ScrollDirection {
    /// Unit travel vector in canvas coordinates (y grows downward).
    pub fn travel(self) -> Vec2 {
        match self {
            ScrollDirection::Left => Vec2::new(-1.0, 0.0),
            ScrollDirection::Right => Vec2::new(1.0, 0.0),
            ScrollDirection::Up => Vec2::new(0.0, -1.0),
            ScrollDirection::Down => Vec2::new(0.0, 1.0),
        }
    }
}

/// What touching an entity does to the run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EntityKind {
    /// Ends the run on contact.
    Hazard,
    /// Removed on contact, crediting `value` to the gauge at `gauge`.
    Collectible { gauge: usize, value: f32 },
}

/// Inclusive numeric range sampled uniformly at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f32,
    pub max: f32,
}

impl Range {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A degenerate range that always yields `value`.
    pub fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        if self.min >= self.max {
            self.min
        } else {
            rng.random_range(self.min..=self.max)
        }
    }

    fn validate(&self, what: &str, min_allowed: f32) -> Result<(), ConfigError> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min >= min_allowed
            && self.min <= self.max;
        if ok {
            Ok(())
        } else {
            Err(ConfigError::BadRange {
                what: what.to_string(),
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Spawned-object footprint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SizeSpec {
    /// Square with side sampled from the range.
    Square(Range),
    /// Fixed rectangle.
    Fixed { w: f32, h: f32 },
}

impl SizeSpec {
    pub fn sample(&self, rng: &mut impl Rng) -> Vec2 {
        match *self {
            SizeSpec::Square(range) => Vec2::splat(range.sample(rng)),
            SizeSpec::Fixed { w, h } => Vec2::new(w, h),
        }
    }

    fn validate(&self, category: &str) -> Result<(), ConfigError> {
        match *self {
            SizeSpec::Square(range) => range.validate(&format!("size of '{category}'"), f32::EPSILON),
            SizeSpec::Fixed { w, h } => {
                if w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite() {
                    Ok(())
                } else {
                    Err(ConfigError::BadRange {
                        what: format!("size of '{category}'"),
                        min: w,
                        max: h,
                    })
                }
            }
        }
    }
}

/// One category of spawned object (asteroids, ice chunks, rocks, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    pub kind: EntityKind,
    /// Frames between spawns. Timing is deterministic; only attributes
    /// (cross-axis position, size, base speed) are randomized.
    pub interval: u32,
    pub size: SizeSpec,
    /// Per-object base speed in px/frame, before the difficulty ramp.
    pub speed: Range,
}

/// Which movement inputs the player responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveAxes {
    Horizontal,
    Vertical,
    Both,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Top-left corner of the starting bounding box.
    pub start: Vec2,
    pub size: Vec2,
    /// Movement speed in px/frame while a direction is held.
    pub speed: f32,
    pub axes: MoveAxes,
}

/// A bounded resource counter (fuel, signal strength, water points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeSpec {
    pub name: String,
    pub initial: f32,
    pub max: f32,
    /// Lowest value the gauge can reach; clamped, never crossed.
    pub floor: f32,
    /// Passive depletion per frame (0 for event-driven gauges).
    pub drain_per_frame: f32,
    /// Reaching the floor ends the run when set.
    pub empty_ends_run: bool,
}

/// How score accrues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringPolicy {
    /// Fixed points every `every_frames` frames survived.
    TimeSurvived { points: u64, every_frames: u32 },
    /// Fixed points per collectible picked up.
    PerCollection { points: u64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Canvas extent in pixels; all positions live in `[0, canvas)`.
    pub canvas: Vec2,
    pub scroll: ScrollDirection,
    pub player: PlayerConfig,
    pub categories: Vec<CategorySpec>,
    pub gauges: Vec<GaugeSpec>,
    pub scoring: ScoringPolicy,
    /// Added to every entity's base speed per elapsed frame (difficulty ramp).
    pub speed_ramp: f32,
    /// Hard cap on ramped entity speed, px/frame.
    pub max_entity_speed: f32,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas.x > 0.0 && self.canvas.y > 0.0)
            || !self.canvas.x.is_finite()
            || !self.canvas.y.is_finite()
        {
            return Err(ConfigError::BadCanvas {
                width: self.canvas.x,
                height: self.canvas.y,
            });
        }

        let p = &self.player;
        let fits = p.size.x > 0.0
            && p.size.y > 0.0
            && p.start.x >= 0.0
            && p.start.y >= 0.0
            && p.start.x + p.size.x <= self.canvas.x
            && p.start.y + p.size.y <= self.canvas.y;
        if !fits {
            return Err(ConfigError::PlayerOutOfBounds {
                x: p.start.x,
                y: p.start.y,
                w: p.size.x,
                h: p.size.y,
            });
        }
        scalar(p.speed, "player speed")?;
        scalar(self.speed_ramp, "speed ramp")?;
        scalar(self.max_entity_speed, "max entity speed")?;

        for spec in &self.categories {
            if spec.interval == 0 {
                return Err(ConfigError::ZeroSpawnInterval {
                    category: spec.name.clone(),
                });
            }
            spec.size.validate(&spec.name)?;
            spec.speed.validate(&format!("speed of '{}'", spec.name), 0.0)?;
            if let EntityKind::Collectible { gauge, value } = spec.kind {
                scalar(value, &format!("value of '{}'", spec.name))?;
                if gauge >= self.gauges.len() {
                    return Err(ConfigError::UnknownGauge {
                        category: spec.name.clone(),
                        gauge,
                        count: self.gauges.len(),
                    });
                }
            }
        }

        for g in &self.gauges {
            let ordered = g.floor >= 0.0
                && g.floor <= g.initial
                && g.initial <= g.max
                && g.max.is_finite()
                && g.max > 0.0;
            if !ordered {
                return Err(ConfigError::BadGauge {
                    name: g.name.clone(),
                    floor: g.floor,
                    initial: g.initial,
                    max: g.max,
                });
            }
            scalar(g.drain_per_frame, &format!("drain of '{}'", g.name))?;
        }

        if let ScoringPolicy::TimeSurvived { every_frames, .. } = self.scoring
            && every_frames == 0
        {
            return Err(ConfigError::BadScalar {
                what: "scoring cadence".to_string(),
                value: 0.0,
            });
        }

        Ok(())
    }
}

fn scalar(value: f32, what: &str) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::BadScalar {
            what: what.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> GameConfig {
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
                interval: 30,
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

    #[test]
    fn minimal_config_validates() {
        assert!(minimal().validate().is_ok());
    }

    #[test]
    fn zero_spawn_interval_rejected() {
        let mut cfg = minimal();
        cfg.categories[0].interval = 0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ZeroSpawnInterval { .. })
        ));
    }

    #[test]
    fn zero_size_entity_rejected() {
        let mut cfg = minimal();
        cfg.categories[0].size = SizeSpec::Square(Range::fixed(0.0));
        assert!(matches!(cfg.validate(), Err(ConfigError::BadRange { .. })));

        cfg.categories[0].size = SizeSpec::Fixed { w: 10.0, h: 0.0 };
        assert!(matches!(cfg.validate(), Err(ConfigError::BadRange { .. })));
    }

    #[test]
    fn negative_speed_rejected() {
        let mut cfg = minimal();
        cfg.categories[0].speed = Range::new(-1.0, 2.0);
        assert!(matches!(cfg.validate(), Err(ConfigError::BadRange { .. })));
    }

    #[test]
    fn player_outside_canvas_rejected() {
        let mut cfg = minimal();
        cfg.player.start = Vec2::new(590.0, 180.0);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::PlayerOutOfBounds { .. })
        ));
    }

    #[test]
    fn inverted_gauge_bounds_rejected() {
        let mut cfg = minimal();
        cfg.gauges.push(GaugeSpec {
            name: "fuel".to_string(),
            initial: 150.0,
            max: 100.0,
            floor: 0.0,
            drain_per_frame: 0.0,
            empty_ends_run: false,
        });
        assert!(matches!(cfg.validate(), Err(ConfigError::BadGauge { .. })));
    }

    #[test]
    fn collectible_must_name_existing_gauge() {
        let mut cfg = minimal();
        cfg.categories[0].kind = EntityKind::Collectible {
            gauge: 0,
            value: 50.0,
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::UnknownGauge { .. })
        ));
    }

    #[test]
    fn fixed_range_samples_to_its_value() {
        let mut rng = rand::rng();
        assert_eq!(Range::fixed(16.0).sample(&mut rng), 16.0);
    }
}

//! Delta-time physics toys
//!
//! Unlike the arcade games, these integrate over elapsed wall-clock time so
//! altitude and velocity stay in physical units under variable frame rate:
//! acceleration into velocity, velocity into position, each step.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Gauge;

/// Rocket-ascent tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocketConfig {
    /// Downward acceleration, m/s^2
    pub gravity: f32,
    /// Upward acceleration per throttle step, m/s^2
    pub thrust_accel: f32,
    /// Fuel burned per throttle step per second, % of tank
    pub burn_rate: f32,
    pub max_throttle: u8,
}

impl Default for RocketConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            thrust_accel: 1.5,
            burn_rate: 0.25,
            max_throttle: 10,
        }
    }
}

/// 1D rocket ascent: thrust against gravity with a finite fuel tank.
/// Thrust cuts out at empty; the ground clamps altitude at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocketSim {
    config: RocketConfig,
    /// Meters above the pad
    pub altitude: f32,
    /// m/s, positive up
    pub velocity: f32,
    /// Throttle steps, 0..=max_throttle
    pub throttle: u8,
    pub fuel: Gauge,
}

impl RocketSim {
    pub fn new(config: RocketConfig) -> Self {
        Self {
            config,
            altitude: 0.0,
            velocity: 0.0,
            throttle: 0,
            fuel: Gauge::new("fuel", 100.0, 100.0, 0.0),
        }
    }

    /// Throttle up two steps, capped; ignored once the tank is dry.
    pub fn throttle_up(&mut self) {
        if !self.fuel.at_floor() {
            self.throttle = (self.throttle + 2).min(self.config.max_throttle);
        }
    }

    /// Throttle down two steps.
    pub fn throttle_down(&mut self) {
        self.throttle = self.throttle.saturating_sub(2);
    }

    pub fn grounded(&self) -> bool {
        self.altitude <= 0.0 && self.velocity <= 0.0
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let throttle = if self.fuel.at_floor() { 0 } else { self.throttle };
        let accel = self.config.thrust_accel * f32::from(throttle) - self.config.gravity;

        self.velocity += accel * dt;
        if throttle > 0 {
            self.fuel
                .apply(-(self.config.burn_rate * f32::from(throttle) * dt));
        }
        self.altitude += self.velocity * dt;

        if self.altitude <= 0.0 {
            self.altitude = 0.0;
            if self.velocity < 0.0 {
                self.velocity = 0.0;
            }
        }
    }
}

/// A point mass in the gravity sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }
}

/// N-body gravity sandbox: pairwise inverse-square attraction, semi-implicit
/// Euler. Distances are floored at `softening` so near-coincident bodies do
/// not produce unbounded accelerations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NBodySim {
    pub bodies: Vec<Body>,
    /// Gravitational constant, px^3/s^2 per unit mass (all bodies weigh 1)
    pub g: f32,
    pub softening: f32,
}

impl NBodySim {
    pub fn new(g: f32) -> Self {
        Self {
            bodies: Vec::new(),
            g,
            softening: 4.0,
        }
    }

    pub fn with_bodies(g: f32, bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            g,
            softening: 4.0,
        }
    }

    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Drop a body somewhere on the canvas with a small random velocity.
    pub fn add_random_body(&mut self, extent: Vec2, rng: &mut impl Rng) {
        let pos = Vec2::new(
            rng.random_range(0.0..extent.x),
            rng.random_range(0.0..extent.y),
        );
        let vel = Vec2::new(rng.random_range(-60.0..60.0), rng.random_range(-60.0..60.0));
        self.bodies.push(Body::new(pos, vel));
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let accels: Vec<Vec2> = self
            .bodies
            .iter()
            .map(|body| {
                let mut accel = Vec2::ZERO;
                for other in &self.bodies {
                    let offset = other.pos - body.pos;
                    let dist = offset.length().max(self.softening);
                    // offset is zero against itself, contributing nothing.
                    accel += (self.g / (dist * dist)) * (offset / dist);
                }
                accel
            })
            .collect();

        for (body, accel) in self.bodies.iter_mut().zip(accels) {
            body.vel += accel * dt;
            body.pos += body.vel * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn rocket_stays_on_the_pad_without_thrust() {
        let mut rocket = RocketSim::new(RocketConfig::default());
        for _ in 0..600 {
            rocket.step(SIM_DT);
        }
        assert_eq!(rocket.altitude, 0.0);
        assert_eq!(rocket.velocity, 0.0);
    }

    #[test]
    fn full_throttle_climbs_and_burns_fuel() {
        let mut rocket = RocketSim::new(RocketConfig::default());
        for _ in 0..5 {
            rocket.throttle_up();
        }
        assert_eq!(rocket.throttle, 10);
        for _ in 0..600 {
            rocket.step(SIM_DT);
        }
        assert!(rocket.altitude > 0.0);
        assert!(rocket.velocity > 0.0);
        assert!(rocket.fuel.value < 100.0);
    }

    #[test]
    fn throttle_steps_are_clamped() {
        let mut rocket = RocketSim::new(RocketConfig::default());
        for _ in 0..20 {
            rocket.throttle_up();
        }
        assert_eq!(rocket.throttle, 10);
        for _ in 0..20 {
            rocket.throttle_down();
        }
        assert_eq!(rocket.throttle, 0);
    }

    #[test]
    fn empty_tank_cuts_thrust_and_the_rocket_comes_home() {
        let mut rocket = RocketSim::new(RocketConfig::default());
        for _ in 0..5 {
            rocket.throttle_up();
        }
        // Burn the whole tank, then coast: fuel clamps at zero, altitude
        // never goes negative, and the rocket eventually lands.
        let mut steps = 0u32;
        while !(rocket.fuel.at_floor() && rocket.grounded()) && steps < 600_000 {
            rocket.step(SIM_DT);
            steps += 1;
            assert!(rocket.altitude >= 0.0);
            assert!(rocket.fuel.value >= 0.0);
        }
        assert!(rocket.fuel.at_floor());
        assert!(rocket.grounded());
    }

    #[test]
    fn two_bodies_attract() {
        let mut sim = NBodySim::with_bodies(
            1800.0,
            vec![
                Body::new(Vec2::new(200.0, 200.0), Vec2::ZERO),
                Body::new(Vec2::new(400.0, 200.0), Vec2::ZERO),
            ],
        );
        let before = (sim.bodies[0].pos - sim.bodies[1].pos).length();
        for _ in 0..60 {
            sim.step(SIM_DT);
        }
        let after = (sim.bodies[0].pos - sim.bodies[1].pos).length();
        assert!(after < before);
    }

    #[test]
    fn symmetric_pair_conserves_momentum() {
        let mut sim = NBodySim::with_bodies(
            1800.0,
            vec![
                Body::new(Vec2::new(200.0, 200.0), Vec2::new(30.0, 0.0)),
                Body::new(Vec2::new(400.0, 200.0), Vec2::new(-30.0, 0.0)),
            ],
        );
        for _ in 0..120 {
            sim.step(SIM_DT);
        }
        let total = sim.bodies[0].vel + sim.bodies[1].vel;
        assert!(total.length() < 1e-3, "drift {total:?}");
    }

    #[test]
    fn coincident_bodies_stay_finite() {
        let mut sim = NBodySim::with_bodies(
            1800.0,
            vec![
                Body::new(Vec2::new(300.0, 300.0), Vec2::ZERO),
                Body::new(Vec2::new(300.0, 300.0), Vec2::ZERO),
            ],
        );
        for _ in 0..120 {
            sim.step(SIM_DT);
        }
        for body in &sim.bodies {
            assert!(body.pos.is_finite());
            assert!(body.vel.is_finite());
        }
    }
}

//! Astro Arcade headless demo
//!
//! Runs each mini-game and physics toy with a seeded engine on the manual
//! scheduler and prints the final snapshots as JSON. Useful as a smoke run
//! and as a reference for wiring a real rendering host.

use std::error::Error;

use astro_arcade::consts::SIM_DT;
use astro_arcade::engine::{Engine, Key};
use astro_arcade::scheduler::{Manual, drive};
use astro_arcade::sim::physics::{RocketConfig, RocketSim};
use astro_arcade::{GameConfig, tuning};

const DEMO_SEED: u64 = 0xA57A0;
const MAX_DEMO_FRAMES: u64 = 20_000;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        log::error!("demo failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    demo_game("astro-run", tuning::astro_run(), Some("ArrowUp"))?;
    demo_game("red-planet-rover", tuning::red_planet_rover(), Some("ArrowRight"))?;
    demo_rocket();
    demo_gravity();
    Ok(())
}

/// Drive one arcade game to its natural end (or the frame cap) and print
/// the final snapshot.
fn demo_game(name: &str, config: GameConfig, held: Option<&str>) -> Result<(), Box<dyn Error>> {
    let mut engine = Engine::new(config, DEMO_SEED)?;
    if let Some(code) = held
        && let Some(key) = Key::from_code(code)
    {
        engine.handle_input(key, true);
    }
    engine.start()?;

    let mut scheduler = Manual::new(SIM_DT);
    drive(&mut engine, &mut scheduler, MAX_DEMO_FRAMES);

    let snap = engine.snapshot();
    log::info!(
        "{name}: {:?} at frame {} with score {}",
        snap.phase,
        snap.frame,
        snap.score
    );
    println!("{}", snap.to_json()?);
    Ok(())
}

/// Full-throttle ascent until the tank runs dry and the rocket is back on
/// the pad.
fn demo_rocket() {
    let mut rocket = RocketSim::new(RocketConfig::default());
    for _ in 0..5 {
        rocket.throttle_up();
    }

    let mut apogee = 0.0f32;
    let mut steps = 0u64;
    while !(rocket.fuel.at_floor() && rocket.grounded()) && steps < 1_000_000 {
        rocket.step(SIM_DT);
        apogee = apogee.max(rocket.altitude);
        steps += 1;
    }
    log::info!(
        "rocket: apogee {:.0} m after {:.0} s, fuel {:.1}%",
        apogee,
        steps as f32 * SIM_DT,
        rocket.fuel.value
    );
}

/// Let the three-body constellation evolve for ten seconds.
fn demo_gravity() {
    let mut sim = tuning::gravity_sandbox();
    for _ in 0..600 {
        sim.step(SIM_DT);
    }
    for (i, body) in sim.bodies.iter().enumerate() {
        log::info!(
            "body {i}: pos ({:.1}, {:.1}) vel ({:.1}, {:.1})",
            body.pos.x,
            body.pos.y,
            body.vel.x,
            body.vel.y
        );
    }
}

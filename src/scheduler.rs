//! Frame scheduling
//!
//! The browser shell reschedules itself through an animation-frame callback;
//! that capability is explicit here so hosts pick their own pacing: a
//! sleep-based fixed rate for native loops, or immediate manual frames for
//! tests and headless runs that must not depend on the wall clock.

use std::thread;
use std::time::{Duration, Instant};

use crate::engine::Engine;
use crate::sim::state::RunPhase;

pub trait Scheduler {
    /// Block until the next frame is due. Returns the elapsed seconds since
    /// the previous frame.
    fn next_frame(&mut self) -> f32;
}

/// Wall-clock pacing at a fixed frame rate.
pub struct FixedRate {
    period: Duration,
    last: Option<Instant>,
}

impl FixedRate {
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            last: None,
        }
    }
}

impl Scheduler for FixedRate {
    fn next_frame(&mut self) -> f32 {
        let now = Instant::now();
        let Some(prev) = self.last else {
            self.last = Some(now);
            return self.period.as_secs_f32();
        };
        let due = prev + self.period;
        if due > now {
            thread::sleep(due - now);
        }
        let woke = Instant::now();
        self.last = Some(woke);
        (woke - prev).as_secs_f32()
    }
}

/// Immediate frames with a constant dt. Deterministic driving for tests
/// and headless demo runs.
pub struct Manual {
    pub dt: f32,
}

impl Manual {
    pub fn new(dt: f32) -> Self {
        Self { dt }
    }
}

impl Scheduler for Manual {
    fn next_frame(&mut self) -> f32 {
        self.dt
    }
}

/// Drive a step closure until it reports it is done. The closure receives
/// the frame's dt and returns whether another frame should be scheduled.
pub fn drive_with<S, F>(scheduler: &mut S, mut step: F)
where
    S: Scheduler + ?Sized,
    F: FnMut(f32) -> bool,
{
    loop {
        let dt = scheduler.next_frame();
        if !step(dt) {
            return;
        }
    }
}

/// Tick an engine until it leaves `Running` (game over or pause), or until
/// `max_frames` frames have elapsed.
pub fn drive(engine: &mut Engine, scheduler: &mut impl Scheduler, max_frames: u64) {
    let mut frames = 0u64;
    drive_with(scheduler, |_dt| {
        engine.tick();
        frames += 1;
        engine.phase() == RunPhase::Running && frames < max_frames
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::tuning;

    #[test]
    fn manual_scheduler_reports_its_dt() {
        let mut sched = Manual::new(SIM_DT);
        assert_eq!(sched.next_frame(), SIM_DT);
        assert_eq!(sched.next_frame(), SIM_DT);
    }

    #[test]
    fn fixed_rate_paces_frames() {
        let mut sched = FixedRate::new(1000);
        sched.next_frame();
        let dt = sched.next_frame();
        assert!(dt >= 0.001, "dt {dt}");
    }

    #[test]
    fn drive_stops_at_the_frame_cap() {
        let mut engine = Engine::new(tuning::red_planet_rover(), 3).unwrap();
        engine.start().unwrap();
        drive(&mut engine, &mut Manual::new(SIM_DT), 50);
        assert!(engine.snapshot().frame <= 50);
    }

    #[test]
    fn drive_with_counts_frames() {
        let mut frames = 0;
        drive_with(&mut Manual::new(SIM_DT), |_| {
            frames += 1;
            frames < 10
        });
        assert_eq!(frames, 10);
    }
}

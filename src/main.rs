//! Headless demo driver for the bounce simulation
//!
//! Stands in for the out-of-scope presentation and input collaborators:
//! ticks the core at a fixed cadence, sweeps the paddle back and forth like
//! a drag gesture, and surfaces the published state as log lines plus
//! periodic JSON snapshots on stdout.
//!
//! Environment knobs: `BOUNCE_SEED` (serve direction), `BOUNCE_TICKS`
//! (run length).

use std::thread;
use std::time::Duration;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use bounce_sim::consts::*;
use bounce_sim::{BallSnapshot, BounceEvent, Simulation, StateSink};

/// Sink standing in for the HUD: bounce ratios become log lines
#[derive(Default)]
struct LogSink {
    last: Option<BallSnapshot>,
    bounces: u32,
}

impl StateSink for LogSink {
    fn ball_moved(&mut self, snapshot: BallSnapshot) {
        self.last = Some(snapshot);
    }

    fn paddle_bounce(&mut self, event: BounceEvent) {
        self.bounces += 1;
        log::info!("paddle bounce, ratio {:.3}", event.ratio);
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() {
    env_logger::init();

    let seed = env_u64("BOUNCE_SEED", 0xB0C5);
    let ticks = env_u64("BOUNCE_TICKS", 2000);
    log::info!("bounce demo starting, seed {seed}, {ticks} ticks");

    let (screen_w, screen_h) = (360.0, 640.0);
    let mut sim = Simulation::new(screen_w, screen_h);

    // Seeded serve: pick the axis signs, keep unit magnitudes
    let mut rng = Pcg32::seed_from_u64(seed);
    sim.ball.dir = Vec2::new(
        if rng.random::<bool>() { 1.0 } else { -1.0 },
        if rng.random::<bool>() { 1.0 } else { -1.0 },
    );
    log::info!("serving from {:?} toward {:?}", sim.ball.pos, sim.ball.dir);

    // Paddle geometry the layout pass would normally report
    let paddle_y = screen_h - 40.0;
    let mut paddle_x = (screen_w - DEMO_PADDLE_WIDTH) / 2.0;
    let mut drag = 2.0f32;
    sim.set_paddle_state(Vec2::new(paddle_x, paddle_y), DEMO_PADDLE_WIDTH);

    let mut sink = LogSink::default();
    for t in 0..ticks {
        // Same strict clamp the drag handler applies: reverse at the limits
        let next = paddle_x + drag;
        if next > 0.0 && next + DEMO_PADDLE_WIDTH < screen_w {
            paddle_x = next;
            sim.set_paddle_state(Vec2::new(paddle_x, paddle_y), DEMO_PADDLE_WIDTH);
        } else {
            drag = -drag;
        }

        sim.tick(&mut sink);

        if t % 200 == 0 {
            if let Some(snapshot) = sink.last {
                match serde_json::to_string(&snapshot) {
                    Ok(line) => println!("{line}"),
                    Err(e) => log::warn!("snapshot serialization failed: {e}"),
                }
            }
        }

        thread::sleep(Duration::from_millis(TICK_INTERVAL_MS));
    }

    log::info!(
        "demo finished after {} ticks, {} paddle bounces, ball at {:?}",
        sim.time_ticks,
        sink.bounces,
        sim.ball.pos
    );
}

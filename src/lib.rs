//! Bounce Sim - a paddle-and-ball bounce simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball movement, paddle/border collisions,
//!   bounce telemetry)
//!
//! The crate has no rendering, input, or timer surface. An external driver
//! calls [`Simulation::tick`] at whatever cadence it likes and feeds paddle
//! input through [`Simulation::set_paddle_state`]; published ball snapshots
//! and bounce events flow out through a [`StateSink`].

pub mod sim;

pub use sim::{
    Ball, BallSnapshot, BounceEvent, EventRecorder, NullSink, Paddle, Simulation, StateSink,
};

/// Simulation configuration constants
pub mod consts {
    use glam::Vec2;

    /// Ball diameter in screen units
    pub const BALL_SIZE: f32 = 10.0;
    /// Distance the ball travels per tick
    pub const BALL_SPEED: f32 = 1.0;
    /// Serve direction before any driver override (down-right diagonal)
    pub const BALL_START_DIR: Vec2 = Vec2::new(1.0, 1.0);

    /// Paddle width the demo driver uses before real layout input arrives
    pub const DEMO_PADDLE_WIDTH: f32 = 80.0;
    /// Demo driver tick cadence in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 5;
}

//! Deterministic simulation module
//!
//! All bounce logic lives here. This module must be pure and deterministic:
//! - Externally driven ticks only (no internal timer, no blocking)
//! - No RNG
//! - No rendering or platform dependencies
//!
//! State flows out through the [`StateSink`] boundary as immutable snapshots;
//! paddle input flows in through [`Simulation::set_paddle_state`].

pub mod collision;
pub mod sink;
pub mod state;
pub mod tick;

pub use collision::{ball_border_collision, ball_paddle_collision, bounce_ratio, BorderHit};
pub use sink::{BallSnapshot, BounceEvent, EventRecorder, NullSink, StateSink};
pub use state::{Ball, Paddle, Simulation};

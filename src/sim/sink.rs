//! State-publisher boundary between the simulation and a presentation layer
//!
//! The simulation never shares live mutable state with its consumers: it
//! pushes `Copy` snapshots through a sink and every consumer owns its copy.
//! The core has no opinion on delivery beyond "after every tick that
//! changes them".

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ball state published after every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub pos: Vec2,
    pub size: f32,
}

/// Emitted once per tick in which the ball bounced off the paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BounceEvent {
    /// Horizontal collision point relative to the paddle, as a fraction of
    /// its width. In `[0, 1]` under normal play; not clamped, so discrete
    /// stepping can land it marginally outside at the edges.
    pub ratio: f32,
}

/// Sink the simulation publishes through
///
/// Implementations must not block; `tick()` calls these synchronously.
pub trait StateSink {
    fn ball_moved(&mut self, snapshot: BallSnapshot);
    fn paddle_bounce(&mut self, event: BounceEvent);
}

/// Sink that records everything it receives, for tests and headless drivers
#[derive(Debug, Default)]
pub struct EventRecorder {
    pub snapshots: Vec<BallSnapshot>,
    pub bounces: Vec<BounceEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest published ball state, if any tick has run
    pub fn last_snapshot(&self) -> Option<BallSnapshot> {
        self.snapshots.last().copied()
    }
}

impl StateSink for EventRecorder {
    fn ball_moved(&mut self, snapshot: BallSnapshot) {
        self.snapshots.push(snapshot);
    }

    fn paddle_bounce(&mut self, event: BounceEvent) {
        self.bounces.push(event);
    }
}

/// Sink that drops everything, for drivers that only inspect `Simulation`
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl StateSink for NullSink {
    fn ball_moved(&mut self, _snapshot: BallSnapshot) {}
    fn paddle_bounce(&mut self, _event: BounceEvent) {}
}

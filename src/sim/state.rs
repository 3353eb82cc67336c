//! Simulation entities and the owning `Simulation` aggregate

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The bouncing ball
///
/// `dir` is an axis-sign vector: collisions only ever negate one of its
/// components, they never renormalize it. `size` is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub dir: Vec2,
    pub size: f32,
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            dir: BALL_START_DIR,
            size: BALL_SIZE,
            speed: BALL_SPEED,
        }
    }

    /// Move one tick's travel along the current direction
    pub fn advance(&mut self) {
        self.pos += self.dir * self.speed;
    }

    /// Flip the horizontal direction component
    ///
    /// Calling twice restores the original sign; the border test relies on
    /// this when both borders of one axis fire in the same tick.
    pub fn reflect_x(&mut self) {
        self.dir.x = -self.dir.x;
    }

    /// Flip the vertical direction component
    pub fn reflect_y(&mut self) {
        self.dir.y = -self.dir.y;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

/// The player's paddle
///
/// `pos` is the top-left corner. Only `pos.x` and `width` enter the collision
/// test; `pos.y` is whatever the external layout reported. Width stays zero
/// until the first layout pass delivers real geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
}

impl Paddle {
    pub fn left_edge(&self) -> f32 {
        self.pos.x
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.width
    }
}

/// The simulation aggregate: one ball, one paddle, fixed screen bounds
///
/// All mutation goes through `&mut self`, so a driver that shares a
/// `Simulation` across threads wraps it in a mutex and gets the input
/// contract for free: a tick observes the paddle state entirely before or
/// entirely after any `set_paddle_state` call, never a torn mix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    /// Bounding box the ball bounces inside (width, height)
    pub bounds: Vec2,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Tick counter
    pub time_ticks: u64,
}

impl Simulation {
    /// Create a simulation for a `screen_width` x `screen_height` box
    ///
    /// The ball serves from the origin heading down-right; the paddle starts
    /// zero-width until the input collaborator reports real geometry.
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        Self {
            bounds: Vec2::new(screen_width, screen_height),
            ball: Ball::default(),
            paddle: Paddle::default(),
            time_ticks: 0,
        }
    }

    /// Replace the paddle state from input
    ///
    /// Single struct assignment: a tick never sees the new position paired
    /// with the old width or vice versa. Callable at any time between ticks;
    /// negative widths are a caller contract violation and are not checked.
    pub fn set_paddle_state(&mut self, position: Vec2, width: f32) {
        self.paddle = Paddle {
            pos: position,
            width,
        };
    }
}

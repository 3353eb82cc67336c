//! Per-tick simulation step
//!
//! One tick runs in fixed order: advance the ball, resolve the paddle
//! collision, resolve the border collisions (x, then y), publish the ball
//! state. Moving before colliding means the response lags the position
//! update by exactly one tick, so the ball can visibly overlap the paddle or
//! a border for one frame before the bounce lands. That lag is intended
//! behavior, not a candidate for swept collision.

use super::collision::{ball_border_collision, ball_paddle_collision};
use super::sink::{BallSnapshot, BounceEvent, StateSink};
use super::state::Simulation;

impl Simulation {
    /// Advance one tick and publish the results through `sink`
    ///
    /// Synchronous and non-blocking; the sink is invoked inline. A
    /// [`BounceEvent`] is published at the moment the paddle collision
    /// resolves, the [`BallSnapshot`] once at the end of every tick.
    pub fn tick(&mut self, sink: &mut impl StateSink) {
        self.ball.advance();

        if let Some(ratio) = ball_paddle_collision(&self.ball, &self.paddle) {
            self.ball.reflect_y();
            log::debug!("paddle bounce at ratio {ratio}");
            sink.paddle_bounce(BounceEvent { ratio });
        }

        let border = ball_border_collision(&self.ball, self.bounds);
        if border.x {
            self.ball.reflect_x();
        }
        if border.y {
            self.ball.reflect_y();
        }

        self.time_ticks += 1;
        sink.ball_moved(BallSnapshot {
            pos: self.ball.pos,
            size: self.ball.size,
        });
    }
}

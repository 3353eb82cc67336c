//! Collision detection for the axis-aligned bounce arena
//!
//! Pure overlap tests against the four screen borders and the paddle, plus
//! the bounce-ratio telemetry computed at a paddle hit. The rule is plain
//! "overlap, then flip": no penetration-depth resolution and no position
//! correction, so the ball may sit inside a border by up to one tick's
//! travel before the reflection shows.

use glam::Vec2;

use super::state::{Ball, Paddle};

/// Which border axes the ball overlaps after its latest move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BorderHit {
    pub x: bool,
    pub y: bool,
}

impl BorderHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Test the ball against the paddle; returns the bounce ratio on a hit
///
/// Fires when the ball has reached or passed the paddle's top edge and its
/// x-position lies strictly between the paddle's left and right edges. The
/// strict interval is empty while `width == 0`, so the ratio's division can
/// never divide by zero before the first real paddle layout arrives.
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle) -> Option<f32> {
    let hit = ball.pos.y >= paddle.pos.y
        && ball.pos.x < paddle.right_edge()
        && ball.pos.x > paddle.left_edge();

    if hit {
        Some(bounce_ratio(ball.pos.x, paddle.pos.x, paddle.width))
    } else {
        None
    }
}

/// Horizontal collision point relative to the paddle, normalized by width
///
/// Not clamped to `[0, 1]`; see [`crate::BounceEvent::ratio`].
#[inline]
pub fn bounce_ratio(ball_x: f32, paddle_x: f32, paddle_width: f32) -> f32 {
    (ball_x - paddle_x) / paddle_width
}

/// Test the ball against the four borders of the bounding box
///
/// Strict overlap on both sides of each axis: a ball whose far edge sits
/// exactly on a border does not count. Axes are reported independently so a
/// corner hit flips both in the same tick.
pub fn ball_border_collision(ball: &Ball, bounds: Vec2) -> BorderHit {
    BorderHit {
        x: ball.pos.x + ball.size > bounds.x || ball.pos.x < 0.0,
        y: ball.pos.y + ball.size > bounds.y || ball.pos.y < 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::new(Vec2::new(x, y))
    }

    fn paddle() -> Paddle {
        Paddle {
            pos: Vec2::new(100.0, 400.0),
            width: 80.0,
        }
    }

    #[test]
    fn test_paddle_hit_reports_ratio() {
        let ratio = ball_paddle_collision(&ball_at(130.0, 400.5), &paddle());
        assert_eq!(ratio, Some(0.375));
    }

    #[test]
    fn test_paddle_miss_above() {
        assert_eq!(ball_paddle_collision(&ball_at(130.0, 399.9), &paddle()), None);
    }

    #[test]
    fn test_paddle_edges_are_strict() {
        // Exactly on the left or right edge does not count
        assert_eq!(ball_paddle_collision(&ball_at(100.0, 410.0), &paddle()), None);
        assert_eq!(ball_paddle_collision(&ball_at(180.0, 410.0), &paddle()), None);
        assert!(ball_paddle_collision(&ball_at(100.1, 410.0), &paddle()).is_some());
        assert!(ball_paddle_collision(&ball_at(179.9, 410.0), &paddle()).is_some());
    }

    #[test]
    fn test_zero_width_paddle_never_fires() {
        let unset = Paddle::default();
        // pos.y == 0 makes the y test pass for any ball below the top edge,
        // but the empty x interval keeps the hit (and the division) away
        assert_eq!(ball_paddle_collision(&ball_at(0.0, 100.0), &unset), None);
        assert_eq!(ball_paddle_collision(&ball_at(50.0, 100.0), &unset), None);
    }

    #[test]
    fn test_border_exactness() {
        let bounds = Vec2::new(360.0, 640.0);

        // Far edge exactly on the border: no hit
        assert!(!ball_border_collision(&ball_at(350.0, 100.0), bounds).x);
        // Any overlap past it: hit
        assert!(ball_border_collision(&ball_at(350.001, 100.0), bounds).x);

        // Near edge exactly at zero: no hit; past it: hit
        assert!(!ball_border_collision(&ball_at(0.0, 100.0), bounds).x);
        assert!(ball_border_collision(&ball_at(-0.001, 100.0), bounds).x);
    }

    #[test]
    fn test_border_axes_are_independent() {
        let bounds = Vec2::new(360.0, 640.0);
        let hit = ball_border_collision(&ball_at(355.0, 635.0), bounds);
        assert!(hit.x);
        assert!(hit.y);
        assert!(hit.any());

        let miss = ball_border_collision(&ball_at(100.0, 100.0), bounds);
        assert!(!miss.any());
    }

    #[test]
    fn test_bounce_ratio_unclamped() {
        // Discrete stepping can land the ball past the paddle's span on the
        // tick the y test first passes; the ratio is reported as-is
        assert_eq!(bounce_ratio(130.0, 100.0, 80.0), 0.375);
        assert!(bounce_ratio(190.0, 100.0, 80.0) > 1.0);
        assert!(bounce_ratio(90.0, 100.0, 80.0) < 0.0);
    }
}

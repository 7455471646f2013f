//! Free-flight ball integration
//!
//! Semi-implicit Euler under gravity, then floor and wall response, then
//! drag. One call per frame while the ball is in the air.

use super::court::CourtBounds;
use super::state::Ball;
use crate::dt_is_valid;
use crate::tuning::PhysicsTuning;

/// Outcome of one integration step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub ball: Ball,
    /// The ball settled on the floor during this step
    pub at_rest: bool,
    /// The ball bounced off the floor this step
    pub floor_hit: bool,
    /// The ball bounced off a baseline (x) or sideline (z) wall this step
    pub wall_hit: bool,
}

impl Step {
    fn unchanged(ball: &Ball) -> Self {
        Self {
            ball: *ball,
            at_rest: false,
            floor_hit: false,
            wall_hit: false,
        }
    }
}

/// Advance a free-flying ball by `dt` seconds.
///
/// A `dt` that is non-finite, non-positive, or above `tuning.max_dt` leaves
/// the ball untouched. Never fails.
pub fn advance(ball: &Ball, dt: f32, bounds: &CourtBounds, tuning: &PhysicsTuning) -> Step {
    if !dt_is_valid(dt, tuning.max_dt) {
        return Step::unchanged(ball);
    }

    let mut next = *ball;
    let mut at_rest = false;
    let mut floor_hit = false;

    // Velocity first, then position
    next.velocity.y += tuning.gravity * dt;
    next.position += next.velocity * dt;

    // Floor
    let min_y = bounds.rest_height(next.radius);
    if next.position.y <= min_y {
        next.position.y = min_y;
        if next.velocity.y < 0.0 {
            floor_hit = true;
            next.velocity.y *= -tuning.bounce_damping;
            if next.velocity.y.abs() < tuning.min_bounce_speed {
                next.velocity.y = 0.0;
                if next.speed() < tuning.rest_speed {
                    at_rest = true;
                }
            }
        }
    }

    // Walls, each axis on its own
    let (hit_x, hit_z) = bounds.clamp(&mut next.position, next.radius);
    if hit_x {
        next.velocity.x *= -tuning.bounce_damping;
    }
    if hit_z {
        next.velocity.z *= -tuning.bounce_damping;
    }

    next.velocity *= tuning.drag;

    Step {
        ball: next,
        at_rest,
        floor_hit,
        wall_hit: hit_x || hit_z,
    }
}

//! Damped-gravity integrator for the ball on the tilted bar.
//!
//! Position is normalised to the bar length: 0 is the left end, 1 the right
//! end. One call to [`step`] advances the ball by exactly one rendered frame;
//! there is no wall-clock timestep.

use crate::constants::{DAMPING, GRAVITY, RESET_POSITION, RESET_VELOCITY, RESTITUTION};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    pub gravity: f32,
    pub damping: f32,
    pub restitution: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            damping: DAMPING,
            restitution: RESTITUTION,
        }
    }
}

/// Ball state on the bar. `position` is kept in \[0, 1\] by [`step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub position: f32,
    pub velocity: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            position: RESET_POSITION,
            velocity: RESET_VELOCITY,
        }
    }
}

impl Ball {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepReport {
    pub bounced: Option<Wall>,
    /// Velocity after gravity and damping, before any bounce was applied.
    pub pre_bounce_velocity: f32,
}

/// Acceleration along the bar for a tilt given in degrees.
#[inline]
pub fn gravity_force(tilt_deg: f32, gravity: f32) -> f32 {
    tilt_deg.to_radians().sin() * gravity
}

/// Advance the ball by one frame.
///
/// The next state is computed entirely from the current one and written back
/// once at the end, so nothing observed mid-step can leak into the result.
pub fn step(ball: &mut Ball, tilt_deg: f32, params: &PhysicsParams) -> StepReport {
    let velocity = (ball.velocity + gravity_force(tilt_deg, params.gravity)) * params.damping;
    let position = ball.position + velocity;

    let (position, next_velocity, bounced) = if position < 0.0 {
        (0.0, -velocity * params.restitution, Some(Wall::Left))
    } else if position > 1.0 {
        (1.0, -velocity * params.restitution, Some(Wall::Right))
    } else if position.is_nan() {
        // a NaN velocity would otherwise stick the ball forever
        (RESET_POSITION, 0.0, None)
    } else {
        (position, velocity, None)
    };

    *ball = Ball {
        position,
        velocity: next_velocity,
    };
    StepReport {
        bounced,
        pre_bounce_velocity: velocity,
    }
}

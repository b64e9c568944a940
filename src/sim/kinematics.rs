//! Fixed-step kinematics
//!
//! One tick of motion for a single body. Acceleration is rebuilt from scratch
//! every tick and integrated with semi-implicit Euler plus a half-step
//! correction:
//!
//! ```text
//! vel' = vel + acc
//! pos' = pos + vel' + acc / 2
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Position, velocity and this tick's acceleration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
}

impl Pose {
    /// A body at rest at `pos`
    pub fn at_rest(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
        }
    }
}

/// What the body is standing on this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Support {
    Airborne,
    /// Standing on a surface with the given resistance factor
    Grounded { resistance: f32 },
}

/// Apply `acc` to a position/velocity pair: full step on velocity, then the
/// new velocity plus half the acceleration on position.
#[inline]
pub fn semi_implicit_step(pos: Vec2, vel: Vec2, acc: Vec2) -> (Vec2, Vec2) {
    let vel = vel + acc;
    let pos = pos + vel + 0.5 * acc;
    (pos, vel)
}

/// Advance `pose` by one tick.
///
/// `drive` is the horizontal input direction in `[-1, 1]`. Gravity is added
/// straight to vertical velocity while airborne. Resistance is proportional
/// to the current velocity and accumulated into acceleration before
/// integration.
pub fn integrate(pose: &Pose, drive: f32, support: Support, tuning: &Tuning) -> Pose {
    let mut vel = pose.vel;
    let mut acc = Vec2::new(drive.clamp(-1.0, 1.0) * tuning.input_accel, 0.0);

    match support {
        Support::Airborne => {
            vel.y += tuning.gravity;
            acc.x += vel.x * tuning.air_friction;
        }
        Support::Grounded { resistance } => {
            acc.x += vel.x * tuning.ground_friction * resistance;
        }
    }
    acc.y += vel.y * tuning.vertical_resistance;

    let (pos, vel) = semi_implicit_step(pose.pos, vel, acc);
    Pose { pos, vel, acc }
}

//! Smooth random wandering.
//!
//! The wander angle persists between calls and only drifts by a bounded
//! random step each tick, so the heading changes smoothly instead of
//! jittering frame to frame.

use sn_body::Body;
use sn_core::{AgentRng, Vec2};

/// Wander circle geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WanderParams {
    /// How far ahead of the body the wander circle sits.
    pub circle_distance: f32,
    pub radius: f32,
    /// Maximum change of the wander angle per call, radians.
    pub jitter: f32,
}

impl Default for WanderParams {
    fn default() -> Self {
        Self { circle_distance: 60.0, radius: 35.0, jitter: 0.25 }
    }
}

/// Per-agent wander memory.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wander {
    /// Angle on the wander circle, relative to the body's heading.
    pub theta: f32,
}

impl Wander {
    pub fn new(theta: f32) -> Self {
        Self { theta }
    }

    /// Wander force of magnitude `max_force`.
    ///
    /// The target point is `pos + heading * circle_distance + radius *
    /// (cos(theta + h), sin(theta + h))` where `h` is the velocity angle.
    /// `theta` is perturbed by `U(-jitter, jitter)` after the point is taken.
    /// A resting body uses angle 0 and no forward offset.
    pub fn force(&mut self, body: &Body, params: &WanderParams, rng: &mut AgentRng) -> Vec2 {
        let h = body.vel.heading();
        let ahead = body.vel.with_magnitude(params.circle_distance);
        let on_circle = Vec2::from_angle(self.theta + h) * params.radius;
        let point = body.pos + ahead + on_circle;

        self.theta += rng.symmetric(params.jitter);

        (point - body.pos).with_magnitude(body.max_force)
    }
}

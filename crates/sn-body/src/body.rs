//! The kinematic body shared by every moving thing: snake heads, followers,
//! and AI agents alike.

use sn_core::{Circle, Target, Vec2};

use crate::Trail;

/// A temporary speed reduction, e.g. after brushing a solid obstacle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slowdown {
    /// Multiplier on `max_speed`, clamped to `[0, 1]` when applied.
    pub factor: f32,
    /// Integrations left before the slowdown expires.
    pub ticks_left: u32,
}

/// Point-mass kinematics with force accumulation.
///
/// # Tick contract
///
/// 1. Any number of [`apply_force`][Self::apply_force] calls; forces add up.
/// 2. Exactly one [`integrate`][Self::integrate], which consumes the
///    accumulated acceleration.
///
/// After `integrate`, `|vel| <= max_speed` always holds.
#[derive(Clone, Debug)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    acc: Vec2,

    /// Speed cap, units per tick.  Must be positive.
    pub max_speed: f32,

    /// Steering force cap.  Behaviors clamp to this; the body itself does not.
    pub max_force: f32,

    /// Collision and avoidance radius.
    pub radius: f32,

    trail:    Trail,
    slowdown: Option<Slowdown>,
}

impl Body {
    pub fn new(pos: Vec2, max_speed: f32, max_force: f32, radius: f32) -> Self {
        debug_assert!(max_speed > 0.0 && max_force > 0.0 && radius > 0.0);
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            max_speed,
            max_force,
            radius,
            trail: Trail::default(),
            slowdown: None,
        }
    }

    /// Replace the trail with an empty one of `capacity` entries.
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail = Trail::new(capacity);
        self
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    // ── Tick operations ───────────────────────────────────────────────────

    /// Accumulate `force` into this tick's acceleration.
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.acc += force;
    }

    /// Advance one tick: `vel += acc`, clamp to the speed cap, `pos += vel`,
    /// clear `acc`, record the new position in the trail.
    pub fn integrate(&mut self) {
        self.vel += self.acc;
        self.vel = self.vel.limit(self.speed_cap());
        self.pos += self.vel;
        self.acc = Vec2::ZERO;
        self.trail.push(self.pos);

        if let Some(s) = &mut self.slowdown {
            s.ticks_left = s.ticks_left.saturating_sub(1);
            if s.ticks_left == 0 {
                self.slowdown = None;
            }
        }
    }

    /// Start a slowdown of `factor` for `ticks` integrations.  An active one
    /// is replaced, so repeated contact keeps the body slow without stacking.
    pub fn slow_down(&mut self, factor: f32, ticks: u32) {
        self.slowdown = (ticks > 0).then_some(Slowdown { factor, ticks_left: ticks });
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The speed limit in force this tick.
    #[inline]
    pub fn speed_cap(&self) -> f32 {
        match self.slowdown {
            Some(s) => self.max_speed * s.factor.clamp(0.0, 1.0),
            None => self.max_speed,
        }
    }

    #[inline]
    pub fn acceleration(&self) -> Vec2 {
        self.acc
    }

    #[inline]
    pub fn slowdown(&self) -> Option<Slowdown> {
        self.slowdown
    }

    #[inline]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Direction of travel, `ZERO` when at rest.
    #[inline]
    pub fn heading(&self) -> Vec2 {
        self.vel.normalize_or_zero()
    }
}

impl Target for Body {
    #[inline]
    fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    fn velocity(&self) -> Vec2 {
        self.vel
    }
}

impl Circle for Body {
    #[inline]
    fn center(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    fn radius(&self) -> f32 {
        self.radius
    }
}

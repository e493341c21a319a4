//! Arena geometry and the static entity descriptors steering reads.
//!
//! Obstacles and food never move, so they are plain data.  Anything that can
//! be steered toward implements [`Target`]; anything with a collision
//! footprint implements [`Circle`].

use crate::{FoodId, ObstacleId, SimRng, Vec2};

// ── Traits ────────────────────────────────────────────────────────────────────

/// Something a steering behavior can aim at.
///
/// Predictive behaviors (pursue/evade) also read the velocity; static
/// targets keep the default of zero, which makes pursue degenerate to seek.
pub trait Target {
    fn position(&self) -> Vec2;

    #[inline]
    fn velocity(&self) -> Vec2 {
        Vec2::ZERO
    }
}

/// A circular collision footprint.
pub trait Circle {
    fn center(&self) -> Vec2;
    fn radius(&self) -> f32;
}

impl Target for Vec2 {
    #[inline]
    fn position(&self) -> Vec2 {
        *self
    }
}

// ── Kinematics ────────────────────────────────────────────────────────────────

/// A copied position/velocity pair.
///
/// Policies receive other agents as `Kinematics` rather than borrowing them,
/// so the world can hand out a view of the player while it mutates the agent
/// currently being updated.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kinematics {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Kinematics {
    #[inline]
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    #[inline]
    pub fn at_rest(pos: Vec2) -> Self {
        Self { pos, vel: Vec2::ZERO }
    }
}

impl Target for Kinematics {
    #[inline]
    fn position(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    fn velocity(&self) -> Vec2 {
        self.vel
    }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

/// The rectangular play area.  `(x, y)` is the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    pub x:      f32,
    pub y:      f32,
    pub width:  f32,
    pub height: f32,
}

impl Arena {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Clamp `p` into the arena shrunk by `inset` on every side.
    pub fn clamp(&self, p: Vec2, inset: f32) -> Vec2 {
        Vec2::new(
            clamp_axis(p.x, self.x + inset, self.right() - inset),
            clamp_axis(p.y, self.y + inset, self.bottom() - inset),
        )
    }

    /// Uniform random point inside the arena shrunk by `inset`.
    ///
    /// An axis narrower than `2 * inset` collapses to its midpoint instead of
    /// producing an empty range.
    pub fn sample(&self, rng: &mut SimRng, inset: f32) -> Vec2 {
        let x = sample_axis(rng, self.x + inset, self.right() - inset);
        let y = sample_axis(rng, self.y + inset, self.bottom() - inset);
        Vec2::new(x, y)
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(20.0, 20.0, 1200.0, 800.0)
    }
}

fn clamp_axis(v: f32, lo: f32, hi: f32) -> f32 {
    if lo > hi { (lo + hi) * 0.5 } else { v.clamp(lo, hi) }
}

fn sample_axis(rng: &mut SimRng, lo: f32, hi: f32) -> f32 {
    if lo < hi { rng.gen_range(lo..hi) } else { (lo + hi) * 0.5 }
}

// ── Obstacle ──────────────────────────────────────────────────────────────────

/// A static circular obstacle.
///
/// `lethal` obstacles are never steered around: touching one is the designed
/// losing condition, so avoidance skips them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Obstacle {
    pub id:     ObstacleId,
    pub pos:    Vec2,
    pub radius: f32,
    pub lethal: bool,
}

impl Obstacle {
    pub fn solid(id: ObstacleId, pos: Vec2, radius: f32) -> Self {
        Self { id, pos, radius, lethal: false }
    }

    pub fn lethal(id: ObstacleId, pos: Vec2, radius: f32) -> Self {
        Self { id, pos, radius, lethal: true }
    }
}

impl Target for Obstacle {
    #[inline]
    fn position(&self) -> Vec2 {
        self.pos
    }
}

impl Circle for Obstacle {
    #[inline]
    fn center(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    fn radius(&self) -> f32 {
        self.radius
    }
}

// ── Food ──────────────────────────────────────────────────────────────────────

/// Default pickup radius of a food pellet.
pub const FOOD_RADIUS: f32 = 5.0;

/// A food pellet.  Identity matters: enemy snakes hold a `FoodId` across
/// ticks and must notice when somebody else ate it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Food {
    pub id:     FoodId,
    pub pos:    Vec2,
    pub radius: f32,
}

impl Food {
    pub fn new(id: FoodId, pos: Vec2) -> Self {
        Self { id, pos, radius: FOOD_RADIUS }
    }
}

impl Target for Food {
    #[inline]
    fn position(&self) -> Vec2 {
        self.pos
    }
}

impl Circle for Food {
    #[inline]
    fn center(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    fn radius(&self) -> f32 {
        self.radius
    }
}

//! `SegmentedBody` — an ordered chain of bodies, head first.

use sn_body::Body;
use sn_core::Vec2;

use crate::ChainTuning;

/// A head body followed by `followers` bodies at roughly `spacing` intervals.
///
/// Index 0 of [`bodies`][Self::bodies] is always the head.  The chain never
/// becomes empty: it is created with a head and only ever grows.
#[derive(Clone, Debug)]
pub struct SegmentedBody {
    bodies:         Vec<Body>,
    spacing:        f32,
    segment_radius: f32,
    tuning:         ChainTuning,
}

impl SegmentedBody {
    /// Build a chain with `followers` segments laid out behind the head along
    /// −x: follower `i` starts at `head.pos - (i · spacing, 0)`, at rest.
    pub fn new(
        head:           Body,
        followers:      usize,
        spacing:        f32,
        segment_radius: f32,
        tuning:         ChainTuning,
    ) -> Self {
        let origin = head.pos;
        let mut chain = Self {
            bodies: Vec::with_capacity(followers + 1),
            spacing,
            segment_radius,
            tuning,
        };
        chain.bodies.push(head);
        for i in 1..=followers {
            let pos = origin - Vec2::new(i as f32 * spacing, 0.0);
            let follower = chain.make_follower(pos);
            chain.bodies.push(follower);
        }
        chain
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn head(&self) -> &Body {
        &self.bodies[0]
    }

    #[inline]
    pub fn head_mut(&mut self) -> &mut Body {
        &mut self.bodies[0]
    }

    #[inline]
    pub fn followers(&self) -> &[Body] {
        &self.bodies[1..]
    }

    /// Head and followers, head first.
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    #[inline]
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    #[inline]
    pub fn tail(&self) -> &Body {
        &self.bodies[self.bodies.len() - 1]
    }

    /// Total number of bodies including the head.
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn follower_count(&self) -> usize {
        self.bodies.len() - 1
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    #[inline]
    pub fn segment_radius(&self) -> f32 {
        self.segment_radius
    }

    #[inline]
    pub fn tuning(&self) -> &ChainTuning {
        &self.tuning
    }

    /// Distance from follower `i` (1-based) to its leader.
    pub fn gap(&self, i: usize) -> f32 {
        self.bodies[i].pos.distance(self.bodies[i - 1].pos)
    }

    /// All leader-to-follower distances, front to back.
    pub fn gaps(&self) -> impl Iterator<Item = f32> + '_ {
        self.bodies.windows(2).map(|w| w[0].pos.distance(w[1].pos))
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.bodies.iter().map(|b| b.pos)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append a follower at the current tail's exact position.  It relaxes
    /// into place over the following steps.
    pub fn grow(&mut self) {
        let pos = self.tail().pos;
        let follower = self.make_follower(pos);
        self.bodies.push(follower);
    }

    pub fn grow_by(&mut self, n: usize) {
        for _ in 0..n {
            self.grow();
        }
    }

    /// Shift every body by `offset`, keeping the shape (used for wrap-around).
    pub fn translate(&mut self, offset: Vec2) {
        for b in &mut self.bodies {
            b.pos += offset;
        }
    }

    /// Advance one tick: integrate the head with whatever force was applied to
    /// it, then update every follower in order.
    pub fn step(&mut self) {
        self.bodies[0].integrate();
        self.follow();
    }

    /// Update the followers against the head's current position without
    /// integrating the head.
    pub fn follow(&mut self) {
        let head_speed = self.bodies[0].max_speed;
        let head_force = self.bodies[0].max_force;
        let s = self.spacing;
        let t = self.tuning;

        for i in 1..self.bodies.len() {
            let (front, back) = self.bodies.split_at_mut(i);
            let leader = &front[i - 1];
            let seg = &mut back[0];

            seg.max_speed = head_speed * t.follower_speed;
            seg.max_force = head_force * t.follower_force;

            let to_leader = leader.pos - seg.pos;
            let d = to_leader.length();
            let min_band = s * t.min_band;

            if d < min_band {
                let away = if d > 0.0 { -to_leader / d } else { fallback_dir(leader) };
                let strength = t.repulsion_force * head_force * (1.0 - d / min_band);
                seg.apply_force(away * strength);
            } else if d > s * t.max_band {
                let pull = sn_steer::arrive(seg, leader.pos, s * t.arrive_radius);
                seg.apply_force(pull);
                if d > s * t.urgent_band {
                    let desired = to_leader.with_magnitude(head_speed * t.urgent_speed);
                    seg.apply_force((desired - seg.vel).limit(head_force * t.urgent_force));
                }
            } else {
                seg.vel *= t.damping;
            }

            seg.integrate();
            rigid_correct(seg, leader, s, &t);
        }
    }

    fn make_follower(&self, pos: Vec2) -> Body {
        let head = &self.bodies[0];
        Body::new(
            pos,
            head.max_speed * self.tuning.follower_speed,
            head.max_force * self.tuning.follower_force,
            self.segment_radius,
        )
        .with_trail_capacity(head.trail().capacity())
    }
}

/// Keep the gap inside `[hard_min, hard_max] · s` by moving `seg` directly.
fn rigid_correct(seg: &mut Body, leader: &Body, s: f32, t: &ChainTuning) {
    let d = seg.pos.distance(leader.pos);
    if d > s * t.hard_max {
        seg.pos += (leader.pos - seg.pos).with_magnitude(d - s);
    } else if d < s * t.hard_min {
        let away = if d > 0.0 { (seg.pos - leader.pos) / d } else { fallback_dir(leader) };
        seg.pos += away * (s * t.hard_min - d);
    }
}

/// Direction to separate a follower sitting exactly on its leader: behind the
/// leader's motion, or −x for a resting leader.
fn fallback_dir(leader: &Body) -> Vec2 {
    let back = -leader.vel.normalize_or_zero();
    if back.is_zero() { -Vec2::X } else { back }
}

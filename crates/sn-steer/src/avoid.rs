//! Lookahead obstacle avoidance.
//!
//! Three probe points are tested against each obstacle: the body position and
//! two points projected along the heading at the full and half lookahead
//! distance.  For segmented bodies the follower positions take part in
//! choosing which obstacle is the most threatening, but the push itself is
//! computed from the probe point nearest that obstacle.

use sn_body::Body;
use sn_core::{Obstacle, Target, Vec2};

/// Tunables shared by avoidance and boundary handling.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SteerParams {
    /// Distance of the far probe point ahead of the body.
    pub lookahead: f32,
    /// Extra clearance added to `obstacle.r + body.r`.
    pub avoid_margin: f32,
    /// Distance from an edge at which `boundaries` starts pushing back.
    pub boundary_margin: f32,
}

impl Default for SteerParams {
    fn default() -> Self {
        Self { lookahead: 60.0, avoid_margin: 10.0, boundary_margin: 50.0 }
    }
}

/// Push away from the most threatening non-lethal obstacle.
///
/// The winner is the obstacle with the smallest distance to any of the three
/// probe points or any of `segments`.  If the probe point nearest to it lies
/// inside `obstacle.r + body.r + avoid_margin`, the result is
/// `(point - obstacle.pos)` scaled to `max_force`; otherwise `ZERO`.  Ties
/// between probe points go to the body position.
///
/// Lethal obstacles are ignored entirely.
pub fn avoid_obstacles<S: Target>(
    body:      &Body,
    obstacles: &[Obstacle],
    segments:  &[S],
    params:    &SteerParams,
) -> Vec2 {
    let heading = body.heading();
    let probes = [
        body.pos + heading * params.lookahead,
        body.pos + heading * (params.lookahead * 0.5),
        body.pos,
    ];

    let mut winner: Option<(&Obstacle, f32)> = None;
    for ob in obstacles.iter().filter(|o| !o.lethal) {
        let probe_min = probes.iter().map(|p| p.distance(ob.pos)).fold(f32::INFINITY, f32::min);
        let seg_min = segments
            .iter()
            .map(|s| s.position().distance(ob.pos))
            .fold(f32::INFINITY, f32::min);
        let d = probe_min.min(seg_min);
        if winner.is_none_or(|(_, best)| d < best) {
            winner = Some((ob, d));
        }
    }

    let Some((ob, _)) = winner else {
        return Vec2::ZERO;
    };

    let (point, d) = nearest_probe(&probes, ob.pos);
    if d < ob.radius + body.radius + params.avoid_margin {
        (point - ob.pos).with_magnitude(body.max_force)
    } else {
        Vec2::ZERO
    }
}

/// Probe nearest to `center`.  Only a strict win moves the choice off the
/// body position (the last probe).
fn nearest_probe(probes: &[Vec2; 3], center: Vec2) -> (Vec2, f32) {
    let [far, near, own] = *probes;
    let (d_far, d_near, d_own) = (far.distance(center), near.distance(center), own.distance(center));
    if d_far < d_near && d_far < d_own {
        (far, d_far)
    } else if d_near < d_far && d_near < d_own {
        (near, d_near)
    } else {
        (own, d_own)
    }
}

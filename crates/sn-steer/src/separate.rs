//! Separation from a peer set.

use sn_body::Body;
use sn_core::Vec2;

/// Repulsion from every peer closer than `desired_gap`.
///
/// Each peer at distance `0 < d < gap` contributes `unit(pos - peer) / d`.
/// The sum is averaged, scaled to `max_speed`, turned into a steering force
/// against the current velocity and capped at `max_force`.  Coincident peers
/// (`d == 0`) are skipped, so a body listed among its own peers is harmless.
/// Returns `ZERO` when no peer is in range.
pub fn separate<I>(body: &Body, peers: I, desired_gap: f32) -> Vec2
where
    I: IntoIterator<Item = Vec2>,
{
    let mut sum = Vec2::ZERO;
    let mut count = 0u32;

    for peer in peers {
        let away = body.pos - peer;
        let d = away.length();
        if d > 0.0 && d < desired_gap {
            sum += away / (d * d);
            count += 1;
        }
    }

    if count == 0 {
        return Vec2::ZERO;
    }

    let desired = (sum / count as f32).with_magnitude(body.max_speed);
    (desired - body.vel).limit(body.max_force)
}

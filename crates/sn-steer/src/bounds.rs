//! Arena edge handling: a steering force near the walls plus the two
//! position-level edge modes (`clamp_to_arena` for bounce, `wrap_around`).

use sn_body::Body;
use sn_core::{Arena, Vec2};

/// Turn back toward the interior when within `margin` of an edge.
///
/// On each axis where the body is inside the margin, the desired velocity's
/// component on that axis becomes `±max_speed` toward the interior while the
/// other component keeps the current velocity.  In a corner both axes are
/// replaced.  The desired vector is rescaled to `max_speed` and the result
/// `desired - vel` is capped at `2 * max_force`.
///
/// Returns `ZERO` away from the edges.
pub fn boundaries(body: &Body, arena: &Arena, margin: f32) -> Vec2 {
    let mut desired = body.vel;
    let mut near_edge = false;

    if body.pos.x < arena.x + margin {
        desired.x = body.max_speed;
        near_edge = true;
    } else if body.pos.x > arena.right() - margin {
        desired.x = -body.max_speed;
        near_edge = true;
    }

    if body.pos.y < arena.y + margin {
        desired.y = body.max_speed;
        near_edge = true;
    } else if body.pos.y > arena.bottom() - margin {
        desired.y = -body.max_speed;
        near_edge = true;
    }

    if !near_edge {
        return Vec2::ZERO;
    }

    let desired = desired.with_magnitude(body.max_speed);
    (desired - body.vel).limit(body.max_force * 2.0)
}

/// Hard clamp of the position into the arena shrunk by `inset`.
pub fn clamp_to_arena(body: &mut Body, arena: &Arena, inset: f32) {
    body.pos = arena.clamp(body.pos, inset);
}

/// Toroidal wrap.  The body must be fully outside (by its radius) before it
/// reappears on the opposite edge, also fully outside, so it slides in.
pub fn wrap_around(body: &mut Body, arena: &Arena) {
    let r = body.radius;

    if body.pos.x > arena.right() + r {
        body.pos.x = arena.x - r;
    } else if body.pos.x < arena.x - r {
        body.pos.x = arena.right() + r;
    }

    if body.pos.y > arena.bottom() + r {
        body.pos.y = arena.y - r;
    } else if body.pos.y < arena.y - r {
        body.pos.y = arena.bottom() + r;
    }
}

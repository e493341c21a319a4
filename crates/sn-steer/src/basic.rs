//! Point-target behaviors.

use sn_body::Body;
use sn_core::{Target, Vec2};

/// Full-speed approach: `limit(unit(target - pos) * max_speed - vel, max_force)`.
pub fn seek(body: &Body, target: Vec2) -> Vec2 {
    let desired = (target - body.pos).with_magnitude(body.max_speed);
    (desired - body.vel).limit(body.max_force)
}

/// Exactly `-seek(target)`.
pub fn flee(body: &Body, target: Vec2) -> Vec2 {
    -seek(body, target)
}

/// Seek with a linear speed ramp inside `slowing_radius`.
///
/// Desired speed is `max_speed * clamp(d / slowing_radius, 0, 1)`, so it is 0
/// at the target and `max_speed` from the radius outward.  A non-positive
/// radius degenerates to seek.
pub fn arrive(body: &Body, target: Vec2, slowing_radius: f32) -> Vec2 {
    let offset = target - body.pos;
    let desired = offset.with_magnitude(desired_speed(body.max_speed, offset.length(), slowing_radius));
    (desired - body.vel).limit(body.max_force)
}

/// Speed `arrive` aims for at distance `d`.
#[inline]
pub fn desired_speed(max_speed: f32, d: f32, slowing_radius: f32) -> f32 {
    if slowing_radius <= 0.0 {
        return max_speed;
    }
    max_speed * (d / slowing_radius).clamp(0.0, 1.0)
}

/// Where `target` will be after the time it takes to close the current gap
/// at full speed: `tpos + tvel * (d / max_speed)`.
pub fn predict<T: Target + ?Sized>(body: &Body, target: &T) -> Vec2 {
    let tpos = target.position();
    let t = body.pos.distance(tpos) / body.max_speed;
    tpos + target.velocity() * t
}

/// Seek toward the predicted position of a moving target.  A target with zero
/// velocity gives exactly `seek(target.position())`.
pub fn pursue<T: Target + ?Sized>(body: &Body, target: &T) -> Vec2 {
    seek(body, predict(body, target))
}

/// Flee from the predicted position of a moving target.
pub fn evade<T: Target + ?Sized>(body: &Body, target: &T) -> Vec2 {
    flee(body, predict(body, target))
}

//! Unit tests for sn-body.

use sn_core::Vec2;

use crate::Body;

fn body_at(x: f32, y: f32) -> Body {
    Body::new(Vec2::new(x, y), 4.0, 0.4, 10.0)
}

// ── Integration ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod integrate_tests {
    use super::*;

    #[test]
    fn forces_accumulate_within_a_tick() {
        let mut b = body_at(0.0, 0.0);
        b.apply_force(Vec2::new(0.25, 0.0));
        b.apply_force(Vec2::new(0.25, 0.5));
        assert_eq!(b.acceleration(), Vec2::new(0.5, 0.5));
        b.integrate();
        assert_eq!(b.vel, Vec2::new(0.5, 0.5));
        assert_eq!(b.pos, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn acceleration_is_consumed() {
        let mut b = body_at(0.0, 0.0);
        b.apply_force(Vec2::new(1.0, 0.0));
        b.integrate();
        assert_eq!(b.acceleration(), Vec2::ZERO);
        b.integrate();
        // No new force: constant velocity.
        assert_eq!(b.vel, Vec2::new(1.0, 0.0));
        assert_eq!(b.pos, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn velocity_clamped_to_max_speed() {
        let mut b = body_at(0.0, 0.0);
        b.apply_force(Vec2::new(30.0, 40.0));
        b.integrate();
        assert!((b.vel.length() - 4.0).abs() < 1e-5);
        assert!((b.vel.x - 2.4).abs() < 1e-5);
    }

    #[test]
    fn heading_of_resting_body_is_zero() {
        assert_eq!(body_at(1.0, 1.0).heading(), Vec2::ZERO);
    }
}

// ── Trail ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod trail_tests {
    use super::*;
    use crate::Trail;

    #[test]
    fn integrate_records_positions() {
        let mut b = body_at(0.0, 0.0).with_velocity(Vec2::new(1.0, 0.0));
        b.integrate();
        b.integrate();
        let pts: Vec<Vec2> = b.trail().iter().collect();
        assert_eq!(pts, [Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)]);
    }

    #[test]
    fn oldest_entry_evicted_at_capacity() {
        let mut t = Trail::new(3);
        for i in 0..5 {
            t.push(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(t.len(), 3);
        let xs: Vec<f32> = t.iter().map(|p| p.x).collect();
        assert_eq!(xs, [2.0, 3.0, 4.0]);
        assert_eq!(t.latest(), Some(Vec2::new(4.0, 0.0)));
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut b = body_at(0.0, 0.0).with_trail_capacity(0);
        b.integrate();
        assert!(b.trail().is_empty());
    }
}

// ── Slowdown ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod slowdown_tests {
    use super::*;

    #[test]
    fn slowdown_lowers_cap_then_expires() {
        let mut b = body_at(0.0, 0.0);
        b.slow_down(0.5, 2);
        assert_eq!(b.speed_cap(), 2.0);

        b.apply_force(Vec2::new(10.0, 0.0));
        b.integrate();
        assert!((b.vel.length() - 2.0).abs() < 1e-6);
        assert!(b.slowdown().is_some());

        b.integrate();
        assert!(b.slowdown().is_none());
        assert_eq!(b.speed_cap(), 4.0);
    }

    #[test]
    fn slowdown_refresh_replaces() {
        let mut b = body_at(0.0, 0.0);
        b.slow_down(0.5, 10);
        b.slow_down(0.25, 3);
        assert_eq!(b.slowdown().unwrap().ticks_left, 3);
        assert_eq!(b.speed_cap(), 1.0);
    }

    #[test]
    fn factor_above_one_never_raises_cap() {
        let mut b = body_at(0.0, 0.0);
        b.slow_down(3.0, 5);
        assert_eq!(b.speed_cap(), b.max_speed);
    }

    #[test]
    fn zero_ticks_clears() {
        let mut b = body_at(0.0, 0.0);
        b.slow_down(0.5, 5);
        b.slow_down(0.5, 0);
        assert!(b.slowdown().is_none());
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn speed_never_exceeds_max_after_integrate(
            forces in proptest::collection::vec((-50.0f32..50.0, -50.0f32..50.0), 1..40),
            max_speed in 0.1f32..10.0
        ) {
            let mut b = Body::new(Vec2::ZERO, max_speed, 0.4, 5.0);
            for (fx, fy) in forces {
                b.apply_force(Vec2::new(fx, fy));
                b.integrate();
                prop_assert!(
                    b.vel.length() <= max_speed * (1.0 + 1e-5),
                    "|v| = {} > {}", b.vel.length(), max_speed
                );
            }
        }
    }
}

//! Where the player's cursor is, tick by tick.
//!
//! The world never reads input devices.  A [`CursorSource`] stands in for
//! the mouse: a fixed point, a closure, or a looping list of waypoints.

use sn_core::{Tick, Vec2};

/// Supplies the cursor position for each tick of [`World::run`][crate::World::run].
pub trait CursorSource {
    /// Cursor for `tick`.  `head` is the player's head before the tick.
    fn cursor(&mut self, tick: Tick, head: Vec2) -> Vec2;
}

impl<F> CursorSource for F
where
    F: FnMut(Tick, Vec2) -> Vec2,
{
    fn cursor(&mut self, tick: Tick, head: Vec2) -> Vec2 {
        self(tick, head)
    }
}

/// A cursor that never moves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedCursor(pub Vec2);

impl CursorSource for FixedCursor {
    fn cursor(&mut self, _tick: Tick, _head: Vec2) -> Vec2 {
        self.0
    }
}

/// Cycles through `points`, moving on once the head is within `reach` of
/// the current one.
#[derive(Clone, Debug)]
pub struct Waypoints {
    points: Vec<Vec2>,
    next:   usize,
    reach:  f32,
}

impl Waypoints {
    pub fn new(points: Vec<Vec2>, reach: f32) -> Self {
        Self { points, next: 0, reach }
    }

    /// Index of the waypoint currently being steered to.
    pub fn current(&self) -> usize {
        self.next
    }
}

impl CursorSource for Waypoints {
    fn cursor(&mut self, _tick: Tick, head: Vec2) -> Vec2 {
        if self.points.is_empty() {
            return head;
        }
        if head.distance(self.points[self.next]) < self.reach {
            self.next = (self.next + 1) % self.points.len();
        }
        self.points[self.next]
    }
}

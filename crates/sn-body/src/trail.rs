//! Fixed-capacity position history.

use std::collections::VecDeque;

use sn_core::Vec2;

/// Positions kept per body unless configured otherwise.
pub const DEFAULT_TRAIL_LEN: usize = 30;

/// FIFO of the last `capacity` positions, oldest first.
///
/// Pushing past capacity evicts the oldest entry.  A capacity of 0 records
/// nothing.
#[derive(Clone, Debug)]
pub struct Trail {
    points:   VecDeque<Vec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self { points: VecDeque::with_capacity(capacity), capacity }
    }

    #[inline]
    pub fn push(&mut self, p: Vec2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(p);
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent position.
    #[inline]
    pub fn latest(&self) -> Option<Vec2> {
        self.points.back().copied()
    }

    /// Oldest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_LEN)
    }
}

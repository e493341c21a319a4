//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Entities live in plain `Vec`s that
//! shrink when something is eaten, so ids are identities, not indices: look
//! entities up by id, never by `id.0 as usize`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw value widened to `u64` (RNG seeding, output rows).
            #[inline(always)]
            pub fn raw(self) -> u64 {
                self.0 as u64
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Stable identity of a live agent.  Unlike a `Vec` index it survives
    /// removals of other agents.
    pub struct AgentId(u32);
}

typed_id! {
    /// Identity of a food pellet.
    pub struct FoodId(u32);
}

typed_id! {
    /// Identity of a static obstacle.
    pub struct ObstacleId(u32);
}

/// Monotonic id allocator shared by every id space.  It never reuses a
/// value, so a stale id simply stops matching anything.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdAlloc {
    next: u32,
}

impl IdAlloc {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn next_raw(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.wrapping_add(1);
        id
    }

    #[inline]
    pub fn agent(&mut self) -> AgentId {
        AgentId(self.next_raw())
    }

    #[inline]
    pub fn food(&mut self) -> FoodId {
        FoodId(self.next_raw())
    }

    #[inline]
    pub fn obstacle(&mut self) -> ObstacleId {
        ObstacleId(self.next_raw())
    }
}

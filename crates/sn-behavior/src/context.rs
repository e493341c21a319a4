//! Read-only world view handed to every policy call.

use sn_core::{Arena, EdgeMode, Food, Kinematics, Obstacle, Vec2};

use crate::PolicyTuning;

/// Everything a policy may look at.
///
/// The world builds one per agent per tick from its *current* state, so an
/// agent updated later in the tick sees the already-moved positions of the
/// agents before it.
#[derive(Copy, Clone, Debug)]
pub struct WorldContext<'a> {
    pub arena:     Arena,

    /// Under [`EdgeMode::Wrap`] heads are not steered away from the edges.
    pub edge_mode: EdgeMode,

    /// Solid and lethal obstacles.  Avoidance skips the lethal ones itself.
    pub obstacles: &'a [Obstacle],

    pub food:      &'a [Food],

    /// Head of the player snake, if one is alive.
    pub player:    Option<Kinematics>,

    /// Head positions of every predator, possibly including the agent being
    /// steered (coincident positions are ignored by `separate`).
    pub predators: &'a [Vec2],

    /// Where the player is being led.
    pub cursor:    Vec2,

    pub tuning:    &'a PolicyTuning,
}

impl<'a> WorldContext<'a> {
    /// A bounded arena with nothing in it.
    pub fn empty(arena: Arena, tuning: &'a PolicyTuning) -> Self {
        Self {
            arena,
            edge_mode: EdgeMode::Bounce,
            obstacles: &[],
            food: &[],
            player: None,
            predators: &[],
            cursor: arena.center(),
            tuning,
        }
    }
}

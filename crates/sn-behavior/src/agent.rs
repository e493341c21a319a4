//! `Agent` — a segmented body tagged with a policy kind.

use std::f32::consts::TAU;

use sn_body::Body;
use sn_chain::{ChainTuning, SegmentedBody};
use sn_core::{AgentId, AgentRng, Countdown, FoodId, Kinematics, Vec2};
use sn_steer::Wander;

use crate::AgentKind;

/// Ticks between two food scans of an enemy snake.
pub const DEFAULT_RETARGET_TICKS: u32 = 60;

/// The only state a policy keeps between ticks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolicyMemory {
    pub wander:   Wander,
    /// Periodic food re-selection (enemy).  Fires on the first tick.
    pub retarget: Countdown,
    /// Food the enemy is currently heading for, if any.
    pub target:   Option<FoodId>,
}

impl PolicyMemory {
    pub fn new(wander_theta: f32, retarget_period: u32) -> Self {
        Self {
            wander:   Wander::new(wander_theta),
            retarget: Countdown::new(retarget_period),
            target:   None,
        }
    }
}

/// A moving snake: player or AI.
#[derive(Clone, Debug)]
pub struct Agent {
    pub id:     AgentId,
    pub kind:   AgentKind,
    pub chain:  SegmentedBody,
    pub memory: PolicyMemory,
}

impl Agent {
    #[inline]
    pub fn head(&self) -> &Body {
        self.chain.head()
    }

    /// Copy of the head's position and velocity, as other agents see it.
    #[inline]
    pub fn kinematics(&self) -> Kinematics {
        let h = self.chain.head();
        Kinematics::new(h.pos, h.vel)
    }
}

/// Build an agent of `kind` at `position` with `length` followers behind the
/// head, using the kind's profile and default chain tuning.
///
/// The wander angle starts at a random value drawn from `rng`.
pub fn create_agent(
    id:       AgentId,
    kind:     AgentKind,
    position: Vec2,
    length:   usize,
    rng:      &mut AgentRng,
) -> Agent {
    create_agent_with(id, kind, position, length, ChainTuning::default(), DEFAULT_RETARGET_TICKS, rng)
}

/// [`create_agent`] with explicit chain tuning and re-target period.
pub fn create_agent_with(
    id:              AgentId,
    kind:            AgentKind,
    position:        Vec2,
    length:          usize,
    chain:           ChainTuning,
    retarget_period: u32,
    rng:             &mut AgentRng,
) -> Agent {
    let p = kind.profile();
    let head = Body::new(position, p.max_speed, p.max_force, p.head_radius);
    Agent {
        id,
        kind,
        chain: SegmentedBody::new(head, length, p.spacing, p.segment_radius, chain),
        memory: PolicyMemory::new(rng.gen_range(0.0..TAU), retarget_period),
    }
}

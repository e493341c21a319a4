//! Policy radii and weights.
//!
//! Distances are in arena units; weights multiply the raw behavior force
//! before it is summed into the net steering force.

use sn_steer::{SteerParams, WanderParams};

use crate::agent::DEFAULT_RETARGET_TICKS;

/// All policy constants, grouped per kind.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolicyTuning {
    pub steer:    SteerParams,
    pub wander:   WanderParams,
    pub player:   PlayerTuning,
    pub prey:     PreyTuning,
    pub predator: PredatorTuning,
    pub enemy:    EnemyTuning,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerTuning {
    pub arrive_radius:     f32,
    pub arrive_weight:     f32,
    pub avoid_weight:      f32,
    /// Gap for head-vs-own-followers separation, × head radius.
    pub separation_factor: f32,
    pub separate_weight:   f32,
    pub boundary_weight:   f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            arrive_radius:     100.0,
            arrive_weight:     1.2,
            avoid_weight:      2.5,
            separation_factor: 2.5,
            separate_weight:   0.3,
            boundary_weight:   1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PreyTuning {
    pub wander_weight:   f32,
    pub evade_radius:    f32,
    /// Evade weight with the player on top of the prey.
    pub evade_near:      f32,
    /// Evade weight at the edge of `evade_radius`.
    pub evade_far:       f32,
    pub flee_radius:     f32,
    pub flee_weight:     f32,
    pub avoid_weight:    f32,
    pub boundary_weight: f32,
}

impl Default for PreyTuning {
    fn default() -> Self {
        Self {
            wander_weight:   0.8,
            evade_radius:    120.0,
            evade_near:      3.5,
            evade_far:       1.5,
            flee_radius:     100.0,
            flee_weight:     2.5,
            avoid_weight:    1.8,
            boundary_weight: 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PredatorTuning {
    pub pursue_radius:   f32,
    pub pursue_near:     f32,
    pub pursue_far:      f32,
    /// Inside this distance a direct seek is added on top of pursuit.
    pub strike_radius:   f32,
    pub strike_weight:   f32,
    /// Outer edge of the patrol ring; beyond it the predator just roams.
    pub patrol_radius:   f32,
    pub patrol_seek:     f32,
    pub patrol_wander:   f32,
    pub roam_wander:     f32,
    pub avoid_weight:    f32,
    pub separation_gap:  f32,
    pub separate_weight: f32,
    pub boundary_weight: f32,
}

impl Default for PredatorTuning {
    fn default() -> Self {
        Self {
            pursue_radius:   180.0,
            pursue_near:     2.5,
            pursue_far:      1.2,
            strike_radius:   50.0,
            strike_weight:   1.5,
            patrol_radius:   300.0,
            patrol_seek:     0.6,
            patrol_wander:   0.5,
            roam_wander:     0.9,
            avoid_weight:    1.0,
            separation_gap:  40.0,
            separate_weight: 0.8,
            boundary_weight: 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnemyTuning {
    pub retarget_period:   u32,
    /// A held food target further away than this is dropped.
    pub capture_radius:    f32,
    pub arrive_radius:     f32,
    pub arrive_weight:     f32,
    pub wander_weight:     f32,
    pub avoid_weight:      f32,
    pub flee_radius:       f32,
    pub flee_weight:       f32,
    /// × head radius.
    pub separation_factor: f32,
    pub separate_weight:   f32,
    pub boundary_weight:   f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            retarget_period:   DEFAULT_RETARGET_TICKS,
            capture_radius:    200.0,
            arrive_radius:     100.0,
            arrive_weight:     1.5,
            wander_weight:     1.2,
            avoid_weight:      2.5,
            flee_radius:       80.0,
            flee_weight:       1.5,
            separation_factor: 2.5,
            separate_weight:   0.3,
            boundary_weight:   2.0,
        }
    }
}

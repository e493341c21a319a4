//! Chain constants, all expressed as ratios of the spacing or of the head's
//! speed/force limits.

/// Follower band and force tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChainTuning {
    /// Lower edge of the dead-band, × spacing.
    pub min_band: f32,
    /// Upper edge of the dead-band, × spacing.
    pub max_band: f32,
    /// Above this (× spacing) the urgent correction kicks in.
    pub urgent_band: f32,
    /// Velocity multiplier applied inside the dead-band.
    pub damping: f32,

    /// Rigid correction ceiling, × spacing.
    pub hard_max: f32,
    /// Rigid correction floor, × spacing.
    pub hard_min: f32,

    /// Repulsion at zero distance, × head max force.
    pub repulsion_force: f32,
    /// Slowing radius of the follower's arrive, × spacing.
    pub arrive_radius: f32,
    /// Desired speed of the urgent correction, × head max speed.
    pub urgent_speed: f32,
    /// Cap of the urgent correction, × head max force.
    pub urgent_force: f32,

    /// Follower max speed, × head max speed.
    pub follower_speed: f32,
    /// Follower max force, × head max force.
    pub follower_force: f32,
}

impl Default for ChainTuning {
    fn default() -> Self {
        Self {
            min_band:        0.85,
            max_band:        1.3,
            urgent_band:     2.0,
            damping:         0.85,
            hard_max:        1.5,
            hard_min:        0.7,
            repulsion_force: 2.0,
            arrive_radius:   2.0,
            urgent_speed:    1.5,
            urgent_force:    2.0,
            follower_speed:  1.2,
            follower_force:  1.5,
        }
    }
}

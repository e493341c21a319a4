//! Agent kinds and their body profiles.

use std::fmt;

/// Which policy drives an agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AgentKind {
    /// Follows the cursor target.
    Player,
    /// Small snake that wanders and runs from the player and predators.
    Prey,
    /// Large snake that hunts the player.
    Predator,
    /// Competes with the player for food.
    Enemy,
}

impl AgentKind {
    pub const ALL: [AgentKind; 4] = [Self::Player, Self::Prey, Self::Predator, Self::Enemy];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Player   => "player",
            Self::Prey     => "prey",
            Self::Predator => "predator",
            Self::Enemy    => "enemy",
        }
    }

    /// Body limits and geometry for this kind.
    pub fn profile(self) -> KindProfile {
        match self {
            Self::Player   => KindProfile::new(4.0, 0.4,  10.0, 8.0,  15.0),
            Self::Prey     => KindProfile::new(2.0, 0.2,  6.0,  5.0,  10.0),
            Self::Predator => KindProfile::new(2.5, 0.3,  14.0, 12.0, 18.0),
            Self::Enemy    => KindProfile::new(3.5, 0.35, 9.0,  7.0,  15.0),
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Head limits plus chain geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KindProfile {
    pub max_speed:      f32,
    pub max_force:      f32,
    pub head_radius:    f32,
    pub segment_radius: f32,
    /// Target distance between consecutive bodies.
    pub spacing:        f32,
}

impl KindProfile {
    pub const fn new(
        max_speed:      f32,
        max_force:      f32,
        head_radius:    f32,
        segment_radius: f32,
        spacing:        f32,
    ) -> Self {
        Self { max_speed, max_force, head_radius, segment_radius, spacing }
    }
}

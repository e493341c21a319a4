//! Top-level simulation configuration.
//!
//! Edge behavior and the clamp inset live here with their defaults, so every
//! crate reads the same values.
//! Applications typically deserialize this (feature `serde`) from JSON and
//! hand it to the world builder.

use crate::{Arena, SnError, SnResult};

/// What happens when a head reaches the arena edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeMode {
    /// Steer back toward the interior and hard-clamp the position.
    #[default]
    Bounce,
    /// Re-enter from the opposite edge.
    Wrap,
}

/// Run-level configuration shared by every crate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Master RNG seed.  The same seed and cursor path reproduce a run.
    pub seed: u64,

    /// Ticks driven by `World::run` when no explicit count is given.
    pub total_ticks: u64,

    /// The play area.
    pub arena: Arena,

    /// Edge handling applied to every head after integration.
    pub edge_mode: EdgeMode,

    /// Inset used by the hard position clamp in [`EdgeMode::Bounce`].
    pub clamp_inset: f32,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed:                    42,
            total_ticks:             3_600,
            arena:                   Arena::default(),
            edge_mode:               EdgeMode::Bounce,
            clamp_inset:             10.0,
            snapshot_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Reject arenas that cannot hold a snake and non-finite geometry.
    pub fn validate(&self) -> SnResult<()> {
        let a = &self.arena;
        if ![a.x, a.y, a.width, a.height, self.clamp_inset].iter().all(|v| v.is_finite()) {
            return Err(SnError::NonFinite { what: "arena" });
        }
        if a.width <= 0.0 || a.height <= 0.0 {
            return Err(SnError::Config(format!(
                "arena must have positive extent, got {}x{}",
                a.width, a.height
            )));
        }
        if self.clamp_inset < 0.0 || self.clamp_inset * 2.0 >= a.width.min(a.height) {
            return Err(SnError::Config(format!(
                "clamp inset {} does not fit a {}x{} arena",
                self.clamp_inset, a.width, a.height
            )));
        }
        Ok(())
    }
}

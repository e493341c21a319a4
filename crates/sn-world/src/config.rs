//! Everything a [`World`][crate::World] is built from.
//!
//! `WorldConfig` nests the lower crates' tuning structs, so one JSON document
//! (feature `serde`) configures a whole game.  Every field has the game's
//! stock value as its default.

use sn_behavior::PolicyTuning;
use sn_chain::ChainTuning;
use sn_core::SimConfig;

use crate::{CollisionMargins, LevelConfig, SpawnTuning, WorldError, WorldResult, default_levels};

/// Scoring, growth, and timing rules of the game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameRules {
    /// Level `n` is complete once the score reaches `n * points_per_level`.
    pub points_per_level:          u32,
    pub food_points:               u32,
    /// Followers the player gains per pellet.
    pub food_growth:               usize,
    /// Pellets spawned for each pellet the player eats.
    pub food_respawn:              usize,
    pub prey_points:               u32,
    pub prey_growth:               usize,
    /// Followers an enemy snake gains per pellet it steals.
    pub enemy_food_growth:         usize,
    /// Speed-cap factor while the player scrapes a solid obstacle.
    pub slowdown_factor:           f32,
    pub slowdown_ticks:            u32,
    /// Frozen ticks between completing a level and starting the next.
    pub transition_ticks:          u32,
    /// A cursor outside the arena is pulled this far inside it.
    pub cursor_inset:              f32,
    pub formation_word:            String,
    /// Grid cell size of the formation glyphs.
    pub formation_pitch:           f32,
    pub formation_slowing_radius:  f32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            points_per_level:         10,
            food_points:              1,
            food_growth:              1,
            food_respawn:             2,
            prey_points:              5,
            prey_growth:              2,
            enemy_food_growth:        1,
            slowdown_factor:          0.5,
            slowdown_ticks:           60,
            transition_ticks:         180,
            cursor_inset:             30.0,
            formation_word:           "SNAKE".to_owned(),
            formation_pitch:          10.0,
            formation_slowing_radius: 50.0,
        }
    }
}

/// Complete configuration of a game.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    pub sim:     SimConfig,
    pub rules:   GameRules,
    /// Level 1 first.  Clearing the last entry wins the game.
    pub levels:  Vec<LevelConfig>,
    pub margins: CollisionMargins,
    pub spawn:   SpawnTuning,
    pub chain:   ChainTuning,
    pub policy:  PolicyTuning,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            sim:     SimConfig::default(),
            rules:   GameRules::default(),
            levels:  default_levels(),
            margins: CollisionMargins::default(),
            spawn:   SpawnTuning::default(),
            chain:   ChainTuning::default(),
            policy:  PolicyTuning::default(),
        }
    }
}

impl WorldConfig {
    /// Number of levels; reaching the end of the last one wins.
    pub fn max_level(&self) -> u32 {
        self.levels.len() as u32
    }

    /// The table entry for 1-based `level`.
    pub fn level(&self, level: u32) -> WorldResult<&LevelConfig> {
        level
            .checked_sub(1)
            .and_then(|i| self.levels.get(i as usize))
            .ok_or(WorldError::UnknownLevel { level, max: self.max_level() })
    }

    pub fn validate(&self) -> WorldResult<()> {
        self.sim.validate()?;

        if self.levels.is_empty() {
            return Err(WorldError::Config("the level table is empty".into()));
        }
        for (i, level) in self.levels.iter().enumerate() {
            if !(level.player_speed.is_finite() && level.player_speed > 0.0) {
                return Err(WorldError::Config(format!(
                    "level {} player speed must be positive, got {}",
                    i + 1,
                    level.player_speed
                )));
            }
        }

        let r = &self.rules;
        if r.points_per_level == 0 {
            return Err(WorldError::Config("points_per_level must be at least 1".into()));
        }
        if !(r.slowdown_factor > 0.0 && r.slowdown_factor <= 1.0) {
            return Err(WorldError::Config(format!(
                "slowdown factor must be in (0, 1], got {}",
                r.slowdown_factor
            )));
        }
        if !(r.cursor_inset.is_finite() && r.cursor_inset >= 0.0) {
            return Err(WorldError::Config(format!(
                "cursor inset must be non-negative, got {}",
                r.cursor_inset
            )));
        }
        if !(r.formation_pitch.is_finite() && r.formation_pitch > 0.0)
            || !r.formation_slowing_radius.is_finite()
        {
            return Err(WorldError::Config("formation pitch must be positive".into()));
        }

        if !self.margins.is_finite() {
            return Err(WorldError::Config("collision margins must be finite".into()));
        }
        self.spawn.validate().map_err(WorldError::Config)?;

        validate_chain(&self.chain)?;
        validate_policy(&self.policy)
    }
}

fn validate_chain(c: &ChainTuning) -> WorldResult<()> {
    require(
        "chain",
        &[
            ("follower_speed", c.follower_speed),
            ("follower_force", c.follower_force),
            ("arrive_radius", c.arrive_radius),
        ],
        Bound::Positive,
    )?;
    require(
        "chain",
        &[
            ("min_band", c.min_band),
            ("max_band", c.max_band),
            ("hard_min", c.hard_min),
            ("hard_max", c.hard_max),
            ("urgent_band", c.urgent_band),
            ("damping", c.damping),
            ("repulsion_force", c.repulsion_force),
            ("urgent_speed", c.urgent_speed),
            ("urgent_force", c.urgent_force),
        ],
        Bound::NonNegative,
    )?;
    if !(c.hard_min > 0.0 && c.hard_min <= c.min_band && c.max_band <= c.hard_max) {
        return Err(WorldError::Config(format!(
            "chain bands must nest: 0 < {} <= {} and {} <= {}",
            c.hard_min, c.min_band, c.max_band, c.hard_max
        )));
    }
    Ok(())
}

/// Radii divide distances in the policies, so they must be positive.
/// Weights and the remaining geometry only need to be non-negative.
fn validate_policy(p: &PolicyTuning) -> WorldResult<()> {
    let (pl, pr, pd, en) = (&p.player, &p.prey, &p.predator, &p.enemy);
    require(
        "policy",
        &[
            ("player.arrive_radius", pl.arrive_radius),
            ("prey.evade_radius", pr.evade_radius),
            ("predator.pursue_radius", pd.pursue_radius),
            ("enemy.arrive_radius", en.arrive_radius),
        ],
        Bound::Positive,
    )?;
    require(
        "policy",
        &[
            ("steer.lookahead", p.steer.lookahead),
            ("steer.avoid_margin", p.steer.avoid_margin),
            ("steer.boundary_margin", p.steer.boundary_margin),
            ("wander.circle_distance", p.wander.circle_distance),
            ("wander.radius", p.wander.radius),
            ("wander.jitter", p.wander.jitter),
            ("player.arrive_weight", pl.arrive_weight),
            ("player.avoid_weight", pl.avoid_weight),
            ("player.separation_factor", pl.separation_factor),
            ("player.separate_weight", pl.separate_weight),
            ("player.boundary_weight", pl.boundary_weight),
            ("prey.wander_weight", pr.wander_weight),
            ("prey.evade_near", pr.evade_near),
            ("prey.evade_far", pr.evade_far),
            ("prey.flee_radius", pr.flee_radius),
            ("prey.flee_weight", pr.flee_weight),
            ("prey.avoid_weight", pr.avoid_weight),
            ("prey.boundary_weight", pr.boundary_weight),
            ("predator.pursue_near", pd.pursue_near),
            ("predator.pursue_far", pd.pursue_far),
            ("predator.strike_radius", pd.strike_radius),
            ("predator.strike_weight", pd.strike_weight),
            ("predator.patrol_radius", pd.patrol_radius),
            ("predator.patrol_seek", pd.patrol_seek),
            ("predator.patrol_wander", pd.patrol_wander),
            ("predator.roam_wander", pd.roam_wander),
            ("predator.avoid_weight", pd.avoid_weight),
            ("predator.separation_gap", pd.separation_gap),
            ("predator.separate_weight", pd.separate_weight),
            ("predator.boundary_weight", pd.boundary_weight),
            ("enemy.capture_radius", en.capture_radius),
            ("enemy.arrive_weight", en.arrive_weight),
            ("enemy.wander_weight", en.wander_weight),
            ("enemy.avoid_weight", en.avoid_weight),
            ("enemy.flee_radius", en.flee_radius),
            ("enemy.flee_weight", en.flee_weight),
            ("enemy.separation_factor", en.separation_factor),
            ("enemy.separate_weight", en.separate_weight),
            ("enemy.boundary_weight", en.boundary_weight),
        ],
        Bound::NonNegative,
    )
}

#[derive(Copy, Clone)]
enum Bound {
    Positive,
    NonNegative,
}

/// `Err` naming the first field that is not finite or is out of `bound`.
fn require(group: &str, fields: &[(&str, f32)], bound: Bound) -> WorldResult<()> {
    for &(name, value) in fields {
        let ok = value.is_finite()
            && match bound {
                Bound::Positive => value > 0.0,
                Bound::NonNegative => value >= 0.0,
            };
        if !ok {
            let expected = match bound {
                Bound::Positive => "positive",
                Bound::NonNegative => "non-negative",
            };
            return Err(WorldError::Config(format!(
                "{group}.{name} must be finite and {expected}, got {value}"
            )));
        }
    }
    Ok(())
}

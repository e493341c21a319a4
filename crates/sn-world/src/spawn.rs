//! Placement of food, obstacles, and AI snakes.
//!
//! Placement is rejection sampling: draw a point inside the arena inset,
//! accept it if it keeps its clearances, and after a bounded number of
//! attempts accept whatever was drawn last.  Every draw comes from the
//! world's [`SimRng`], so a level layout is a pure function of the seed.

use sn_behavior::AgentKind;
use sn_body::Body;
use sn_chain::SegmentedBody;
use sn_core::{Arena, FOOD_RADIUS, Obstacle, SimRng, Vec2};

/// Clearances, attempt budgets, and size ranges used when populating a level.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnTuning {
    /// Food and obstacles are placed this far inside the arena.
    pub edge_inset:                f32,
    /// AI snakes spawn this far inside the arena.
    pub agent_inset:               f32,
    pub food_attempts:             u32,
    pub obstacle_attempts:         u32,
    /// Gap between a new pellet's edge and an obstacle's edge.
    pub food_obstacle_clearance:   f32,
    /// Gap between a new pellet's edge and any player body.
    pub food_player_clearance:     f32,
    /// Gap between a new pellet's edge and an AI head.
    pub food_agent_clearance:      f32,
    /// Gap between a new obstacle and any player body.
    pub obstacle_player_clearance: f32,
    /// Gap between a new solid obstacle and the player's start point.
    pub obstacle_start_clearance:  f32,
    pub solid_radius_min:          f32,
    pub solid_radius_max:          f32,
    pub lethal_radius_min:         f32,
    pub lethal_radius_max:         f32,
    pub prey_followers_min:        usize,
    pub prey_followers_max:        usize,
    pub predator_followers_min:    usize,
    pub predator_followers_max:    usize,
    pub enemy_followers:           usize,
    /// Followers behind the player's head at the start of a game.
    pub player_followers:          usize,
    /// Player start point relative to the arena centre.
    pub player_start_offset:       Vec2,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            edge_inset:                60.0,
            agent_inset:               100.0,
            food_attempts:             50,
            obstacle_attempts:         100,
            food_obstacle_clearance:   20.0,
            food_player_clearance:     30.0,
            food_agent_clearance:      25.0,
            obstacle_player_clearance: 50.0,
            obstacle_start_clearance:  80.0,
            solid_radius_min:          12.0,
            solid_radius_max:          20.0,
            lethal_radius_min:         10.0,
            lethal_radius_max:         16.0,
            prey_followers_min:        2,
            prey_followers_max:        3,
            predator_followers_min:    8,
            predator_followers_max:    12,
            enemy_followers:           3,
            player_followers:          3,
            player_start_offset:       Vec2::new(0.0, 100.0),
        }
    }
}

impl SpawnTuning {
    /// Follower count for a freshly spawned AI snake of `kind`.
    pub fn followers(&self, kind: AgentKind, rng: &mut SimRng) -> usize {
        match kind {
            AgentKind::Prey => rng.gen_range(self.prey_followers_min..=self.prey_followers_max),
            AgentKind::Predator => {
                rng.gen_range(self.predator_followers_min..=self.predator_followers_max)
            }
            AgentKind::Enemy => self.enemy_followers,
            AgentKind::Player => self.player_followers,
        }
    }

    /// Where the player's head starts.
    pub fn player_start(&self, arena: &Arena) -> Vec2 {
        arena.center() + self.player_start_offset
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        let floats = [
            self.edge_inset,
            self.agent_inset,
            self.food_obstacle_clearance,
            self.food_player_clearance,
            self.food_agent_clearance,
            self.obstacle_player_clearance,
            self.obstacle_start_clearance,
            self.solid_radius_min,
            self.solid_radius_max,
            self.lethal_radius_min,
            self.lethal_radius_max,
        ];
        if !floats.iter().all(|v| v.is_finite()) || !self.player_start_offset.is_finite() {
            return Err("spawn tuning contains a non-finite value".into());
        }
        if self.solid_radius_min <= 0.0 || self.solid_radius_min > self.solid_radius_max {
            return Err(format!(
                "solid obstacle radius range {}..={} is empty or not positive",
                self.solid_radius_min, self.solid_radius_max
            ));
        }
        if self.lethal_radius_min <= 0.0 || self.lethal_radius_min > self.lethal_radius_max {
            return Err(format!(
                "lethal obstacle radius range {}..={} is empty or not positive",
                self.lethal_radius_min, self.lethal_radius_max
            ));
        }
        if self.prey_followers_min > self.prey_followers_max
            || self.predator_followers_min > self.predator_followers_max
        {
            return Err("follower count range is empty".into());
        }
        Ok(())
    }
}

/// A point for a new food pellet.
///
/// Keeps clear of obstacles, every body of the player, and AI heads.  After
/// `food_attempts` rejected draws the next draw is used unchecked.
pub fn food_position<'a, I>(
    rng:       &mut SimRng,
    arena:     &Arena,
    tuning:    &SpawnTuning,
    obstacles: &[Obstacle],
    player:    &SegmentedBody,
    ai_heads:  I,
) -> Vec2
where
    I: IntoIterator<Item = &'a Body> + Clone,
{
    for _ in 0..tuning.food_attempts {
        let p = arena.sample(rng, tuning.edge_inset);

        let clear_of_obstacles = obstacles.iter().all(|o| {
            p.distance(o.pos) >= o.radius + FOOD_RADIUS + tuning.food_obstacle_clearance
        });
        let clear_of_player = player.bodies().iter().all(|b| {
            p.distance(b.pos) >= b.radius + FOOD_RADIUS + tuning.food_player_clearance
        });
        let clear_of_agents = ai_heads.clone().into_iter().all(|h| {
            p.distance(h.pos) >= h.radius + FOOD_RADIUS + tuning.food_agent_clearance
        });

        if clear_of_obstacles && clear_of_player && clear_of_agents {
            return p;
        }
    }
    arena.sample(rng, tuning.edge_inset)
}

/// Position and radius for a new obstacle.
///
/// Every obstacle keeps clear of the player's bodies; solid ones also keep
/// clear of `start` so a fresh level never opens with the player boxed in.
/// After `obstacle_attempts` rejected draws the last draw is used.
pub fn obstacle_placement(
    rng:    &mut SimRng,
    arena:  &Arena,
    tuning: &SpawnTuning,
    player: &SegmentedBody,
    start:  Vec2,
    lethal: bool,
) -> (Vec2, f32) {
    let radius = if lethal {
        rng.gen_range(tuning.lethal_radius_min..=tuning.lethal_radius_max)
    } else {
        rng.gen_range(tuning.solid_radius_min..=tuning.solid_radius_max)
    };

    let mut p = arena.sample(rng, tuning.edge_inset);
    for _ in 1..tuning.obstacle_attempts {
        let clear_of_player = player.bodies().iter().all(|b| {
            p.distance(b.pos) >= radius + b.radius + tuning.obstacle_player_clearance
        });
        let clear_of_start =
            lethal || p.distance(start) >= radius + tuning.obstacle_start_clearance;

        if clear_of_player && clear_of_start {
            break;
        }
        p = arena.sample(rng, tuning.edge_inset);
    }
    (p, radius)
}

/// Head position for a new AI snake.
pub fn agent_position(rng: &mut SimRng, arena: &Arena, tuning: &SpawnTuning) -> Vec2 {
    arena.sample(rng, tuning.agent_inset)
}

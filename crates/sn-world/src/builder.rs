//! Fluent builder for constructing a [`World`].

use sn_core::Vec2;

use crate::{World, WorldConfig, WorldResult};

/// Fluent builder for [`World`].
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                                    |
/// |----------------------|--------------------------------------------|
/// | `.level(n)`          | 1                                          |
/// | `.populate(false)`   | Levels are populated from the level table  |
/// | `.player_start(p)`   | Arena centre + `spawn.player_start_offset` |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(WorldConfig::default()).build()?;
/// world.run(600, &mut FixedCursor(Vec2::new(600.0, 400.0)), &mut NoopObserver);
/// ```
pub struct WorldBuilder {
    config:       WorldConfig,
    level:        u32,
    populate:     bool,
    player_start: Option<Vec2>,
}

impl WorldBuilder {
    pub fn new(config: WorldConfig) -> Self {
        Self { config, level: 1, populate: true, player_start: None }
    }

    /// Start at `level` (1-based) instead of level 1.
    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// With `false`, levels start with only the player in the arena: no
    /// obstacles, snakes, or initial food.  The `min_food` top-up still runs.
    pub fn populate(mut self, populate: bool) -> Self {
        self.populate = populate;
        self
    }

    /// Where the player's head starts, at build time and on every reset.
    pub fn player_start(mut self, position: Vec2) -> Self {
        self.player_start = Some(position);
        self
    }

    /// Validate the configuration and return a world ready to tick.
    pub fn build(self) -> WorldResult<World> {
        self.config.validate()?;
        self.config.level(self.level)?;
        Ok(World::start(self.config, self.level, self.populate, self.player_start))
    }
}

//! The level table: how many of each thing a level is populated with.

/// Population and player speed for one level.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelConfig {
    pub solid_obstacles:  usize,
    pub lethal_obstacles: usize,
    /// Food placed when the level starts.
    pub food:             usize,
    /// Food is topped up to this count after every eat.
    pub min_food:         usize,
    /// Head `max_speed` of the player for the whole level.
    pub player_speed:     f32,
    pub prey:             usize,
    pub predators:        usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemies:          usize,
}

impl LevelConfig {
    pub const fn new(
        solid_obstacles:  usize,
        lethal_obstacles: usize,
        food:             usize,
        min_food:         usize,
        player_speed:     f32,
        prey:             usize,
        predators:        usize,
    ) -> Self {
        Self {
            solid_obstacles,
            lethal_obstacles,
            food,
            min_food,
            player_speed,
            prey,
            predators,
            enemies: 0,
        }
    }

    /// Same level with `n` enemy snakes.
    pub const fn with_enemies(mut self, n: usize) -> Self {
        self.enemies = n;
        self
    }
}

/// The five stock levels.  Clearing level 5 wins the game.
pub fn default_levels() -> Vec<LevelConfig> {
    vec![
        LevelConfig::new(3, 3,  15, 10, 4.0, 2, 0),
        LevelConfig::new(4, 5,  12, 8,  4.5, 3, 1),
        LevelConfig::new(5, 7,  10, 7,  5.0, 3, 2),
        LevelConfig::new(6, 10, 8,  6,  5.5, 4, 2),
        LevelConfig::new(7, 13, 7,  5,  6.0, 4, 3),
    ]
}

//! World observer trait for progress reporting and data collection.

use sn_core::{AgentId, FoodId, ObstacleId, Tick};

use crate::{Status, World};

/// Something that happened during a tick.
///
/// Events raised outside a tick (by [`World::reset`] or a mode switch) are
/// reported with the next tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorldEvent {
    LevelStarted { level: u32 },
    FoodEaten { food: FoodId, score: u32 },
    PreyEaten { prey: AgentId, score: u32 },
    /// An enemy snake ate a pellet.
    FoodStolen { by: AgentId, food: FoodId },
    /// The player scraped a solid obstacle and started a slowdown.
    Slowed,
    LevelComplete { level: u32, score: u32 },
    Lost { cause: LossCause },
    Won { score: u32 },
    ModeChanged { formation: bool },
    Reset,
}

/// Why the game was lost.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LossCause {
    LethalObstacle(ObstacleId),
    Predator(AgentId),
}

/// Counters reported at the end of every tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickSummary {
    pub tick:   Tick,
    pub score:  u32,
    pub level:  u32,
    /// Live snakes, the player included.
    pub agents: usize,
    pub food:   usize,
    pub status: Status,
}

/// Callbacks invoked by [`World::run`] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — score printer
///
/// ```rust,ignore
/// struct ScorePrinter;
///
/// impl WorldObserver for ScorePrinter {
///     fn on_event(&mut self, tick: Tick, event: &WorldEvent) {
///         if let WorldEvent::FoodEaten { score, .. } = event {
///             println!("{tick}: score {score}");
///         }
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per event, in the order the events happened.
    fn on_event(&mut self, _tick: Tick, _event: &WorldEvent) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called every `sim.snapshot_interval_ticks` ticks, after `on_tick_end`.
    ///
    /// Provides read-only access to the whole world so that output writers
    /// can record body positions without the world knowing any format.
    fn on_snapshot(&mut self, _tick: Tick, _world: &World) {}

    /// Called once when a run stops, with the first tick not processed.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`WorldObserver`] that does nothing.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}

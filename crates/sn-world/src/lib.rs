//! `sn-world` — the headless snake game built on the steering crates.
//!
//! # Tick loop
//!
//! ```text
//! tick(cursor):
//!   ① AI agents   — for each AI snake in spawn order: build a WorldContext
//!                   from the current state, compute_steering, apply the
//!                   force, step the chain, apply the edge mode.
//!   ② Player      — chase the cursor (or hold a formation), step, edge mode.
//!   ③ Collisions  — food (+1, grow, respawn two), food top-up, lethal
//!                   obstacles (lost), solid obstacles (slowdown), prey
//!                   (+5, grow two), predators (lost), enemies eating food.
//!   ④ Progress    — score ≥ level × 10 → next level, or won after the last.
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`collision`] | `distance`, `collides`, chain queries, `CollisionMargins`  |
//! | [`level`]     | `LevelConfig` and the stock level table                    |
//! | [`spawn`]     | Rejection-sampled placement, `SpawnTuning`                 |
//! | [`config`]    | `WorldConfig`, `GameRules`                                 |
//! | [`cursor`]    | `CursorSource` and two scripted cursors                    |
//! | [`observer`]  | `WorldObserver`, `WorldEvent`, `TickSummary`               |
//! | [`world`]     | `World` and its tick loop                                  |
//! | [`builder`]   | `WorldBuilder`                                             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sn_core::Vec2;
//! use sn_world::{FixedCursor, NoopObserver, WorldBuilder, WorldConfig};
//!
//! let mut world = WorldBuilder::new(WorldConfig::default()).build()?;
//! let status = world.run(3_600, &mut FixedCursor(Vec2::new(300.0, 300.0)), &mut NoopObserver);
//! ```

pub mod builder;
pub mod collision;
pub mod config;
pub mod cursor;
pub mod error;
pub mod level;
pub mod observer;
pub mod spawn;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::WorldBuilder;
pub use collision::{CollisionMargins, Contact, chain_touches, collides, distance, head_touches_chain};
pub use config::{GameRules, WorldConfig};
pub use cursor::{CursorSource, FixedCursor, Waypoints};
pub use error::{WorldError, WorldResult};
pub use level::{LevelConfig, default_levels};
pub use observer::{LossCause, NoopObserver, TickSummary, WorldEvent, WorldObserver};
pub use spawn::SpawnTuning;
pub use world::{Actor, Mode, Status, World};

//! `sn-core` — foundational types for the snake steering workspace.
//!
//! This crate is a dependency of every other `sn-*` crate.  It intentionally
//! has no `sn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`vec2`]        | `Vec2` and its arithmetic                                  |
//! | [`geo`]         | `Arena`, `Obstacle`, `Food`, `Kinematics`, `Target`, `Circle` |
//! | [`ids`]         | `AgentId`, `FoodId`, `ObstacleId`, `IdAlloc`               |
//! | [`time`]        | `Tick`, `Countdown`                                        |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (world)                   |
//! | [`config`]      | `SimConfig`, `EdgeMode`                                    |
//! | [`error`]       | `SnError`, `SnResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EdgeMode, SimConfig};
pub use error::{SnError, SnResult};
pub use geo::{Arena, Circle, FOOD_RADIUS, Food, Kinematics, Obstacle, Target};
pub use ids::{AgentId, FoodId, IdAlloc, ObstacleId};
pub use rng::{AgentRng, SimRng};
pub use time::{Countdown, Tick};
pub use vec2::Vec2;

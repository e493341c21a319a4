//! `sn-steer` — the steering behavior library.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`basic`]    | `seek`, `flee`, `arrive`, `pursue`, `evade`                    |
//! | [`wander`]   | `Wander` state and `WanderParams`                              |
//! | [`separate`] | `separate` — inverse-distance repulsion from peers             |
//! | [`avoid`]    | `avoid_obstacles` with lookahead points, `SteerParams`         |
//! | [`bounds`]   | `boundaries`, `clamp_to_arena`, `wrap_around`                  |
//!
//! # Contract
//!
//! Every behavior reads a [`Body`][sn_body::Body] and returns a force; none
//! of them touch the body.  The caller weights the results, sums them and
//! hands the total to `Body::apply_force`.
//!
//! Forces are capped at the body's `max_force`, with one documented
//! exception: [`boundaries`] is capped at `2 * max_force` so that it wins
//! against everything else near an edge.
//!
//! Degenerate input (no peers in range, empty obstacle list, zero distance
//! to the target) yields `Vec2::ZERO`, never a NaN.
//!
//! The position-level helpers in [`bounds`] (`clamp_to_arena`,
//! `wrap_around`) are the only functions here that mutate a body.

pub mod avoid;
pub mod basic;
pub mod bounds;
pub mod separate;
pub mod wander;


pub use avoid::{SteerParams, avoid_obstacles};
pub use basic::{arrive, evade, flee, pursue, seek};
pub use bounds::{boundaries, clamp_to_arena, wrap_around};
pub use separate::separate;
pub use wander::{Wander, WanderParams};

//! `sn-body` — the kinematic body every moving entity is built from.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`body`]   | `Body` — force accumulation and integration, `Slowdown`       |
//! | [`trail`]  | `Trail` — fixed-capacity FIFO of recent positions             |
//!
//! # Movement model
//!
//! Explicit Euler with unit time step, one step per tick:
//!
//! ```text
//! vel += acc
//! vel  = limit(vel, speed_cap)
//! pos += vel
//! acc  = 0
//! ```
//!
//! Steering forces are *accumulated* (`apply_force`) before the step, so
//! several behaviors superpose linearly.  `speed_cap` is `max_speed`, reduced
//! by an active [`Slowdown`].

pub mod body;
pub mod trail;

#[cfg(test)]
mod tests;

pub use body::{Body, Slowdown};
pub use trail::{DEFAULT_TRAIL_LEN, Trail};

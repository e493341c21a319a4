//! `sn-chain` — the segmented body controller.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`tuning`] | `ChainTuning` — band ratios, damping, force multipliers     |
//! | [`chain`]  | `SegmentedBody` — head + followers, `step`, `grow`          |
//!
//! # Follower model
//!
//! Each follower chases its leader (the head, or the previous follower which
//! has already moved this tick) with a soft force model around the target
//! spacing `s`:
//!
//! ```text
//!   0 ──── 0.85·s ═══ dead-band ═══ 1.3·s ──── 2·s ────▶ d
//!   repulsion       damp vel × 0.85      arrive     arrive + urgent
//! ```
//!
//! After integration a rigid correction keeps every gap inside
//! `[0.7·s, 1.5·s]`, which the soft model alone cannot guarantee at high
//! speed or in sharp turns.

pub mod chain;
pub mod tuning;


pub use chain::SegmentedBody;
pub use tuning::ChainTuning;

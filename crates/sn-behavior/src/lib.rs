//! `sn-behavior` — agents and the policies that steer them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`kind`]      | `AgentKind` tag and the per-kind `KindProfile` table          |
//! | [`agent`]     | `Agent`, `PolicyMemory`, `create_agent`                       |
//! | [`context`]   | `WorldContext<'a>` — read-only view of the world for a policy |
//! | [`tuning`]    | `PolicyTuning` — every radius and weight the policies use     |
//! | [`policy`]    | `compute_steering` and the four per-kind policies             |
//! | [`formation`] | Formation mode: every body arrives at its own point           |
//!
//! # Design notes
//!
//! Policies are plain functions selected by matching on [`AgentKind`]; there
//! is no trait object per agent.  A policy reads a [`WorldContext`] and
//! returns one net force for the agent's head.  The only state it may touch
//! is the agent's [`PolicyMemory`] (wander angle, re-target countdown, held
//! food target); bodies are moved by the caller afterwards:
//!
//! ```text
//! let f = compute_steering(&mut agent, &ctx, &mut rng);
//! agent.chain.head_mut().apply_force(f);
//! agent.chain.step();
//! ```
//!
//! Followers are never steered by a policy: `SegmentedBody::step` drives them.

pub mod agent;
pub mod context;
pub mod formation;
pub mod kind;
pub mod policy;
pub mod tuning;


pub use agent::{Agent, PolicyMemory, create_agent, create_agent_with};
pub use context::WorldContext;
pub use formation::{formation_step, word_points};
pub use kind::{AgentKind, KindProfile};
pub use policy::compute_steering;
pub use tuning::{EnemyTuning, PlayerTuning, PolicyTuning, PredatorTuning, PreyTuning};

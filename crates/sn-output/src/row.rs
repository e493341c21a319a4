//! Plain data row types written by output backends.

use sn_behavior::AgentKind;

/// One body of one snake at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub kind:     AgentKind,
    /// 0 is the head, then followers front to back.
    pub segment:  u32,
    pub x:        f32,
    pub y:        f32,
    pub vx:       f32,
    pub vy:       f32,
}

/// Game counters after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:   u64,
    pub score:  u32,
    pub level:  u32,
    pub agents: u64,
    pub food:   u64,
}

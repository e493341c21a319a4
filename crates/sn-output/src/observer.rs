//! `WorldOutputObserver<W>` — bridges `WorldObserver` to an `OutputWriter`.

use sn_core::Tick;
use sn_world::{TickSummary, World, WorldObserver};

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`WorldObserver`] that writes body snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `WorldObserver`
/// methods have no return value.  After `world.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct WorldOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> WorldOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `world.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

/// One row per body of every snake, the player first.
pub fn snapshot_rows(tick: Tick, world: &World) -> Vec<AgentSnapshotRow> {
    world
        .agents()
        .flat_map(|agent| {
            agent.chain.bodies().iter().enumerate().map(move |(i, body)| AgentSnapshotRow {
                tick:     tick.0,
                agent_id: agent.id.0,
                kind:     agent.kind,
                segment:  i as u32,
                x:        body.pos.x,
                y:        body.pos.y,
                vx:       body.vel.x,
                vy:       body.vel.y,
            })
        })
        .collect()
}

impl<W: OutputWriter> WorldObserver for WorldOutputObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        let row = TickSummaryRow {
            tick:   summary.tick.0,
            score:  summary.score,
            level:  summary.level,
            agents: summary.agents as u64,
            food:   summary.food as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, world: &World) {
        let rows = snapshot_rows(tick, world);
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

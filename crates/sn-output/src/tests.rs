//! Integration tests for sn-output.

#[cfg(test)]
mod csv_tests {
    use sn_behavior::AgentKind;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(agent_id: u32, segment: u32, tick: u64) -> AgentSnapshotRow {
        AgentSnapshotRow {
            tick,
            agent_id,
            kind: AgentKind::Prey,
            segment,
            x: 10.0 * segment as f32,
            y: 2.5,
            vx: -1.0,
            vy: 0.125,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow { tick, score: 12, level: 2, agents: 4, food: 9 }
    }

    fn records(path: std::path::PathBuf) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "agent_id", "kind", "segment", "x", "y", "vx", "vy"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "score", "level", "agents", "food"]);
    }

    #[test]
    fn csv_snapshot_rows() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(3, 0, 5), snap_row(3, 1, 5), snap_row(3, 2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let read = records(dir.path().join("agent_snapshots.csv"));
        assert_eq!(read.len(), 3);
        assert_eq!(&read[0][0], "5"); // tick
        assert_eq!(&read[0][1], "3"); // agent_id
        assert_eq!(&read[0][2], "prey");
        assert_eq!(&read[2][3], "2"); // segment
        assert_eq!(&read[2][4], "20.000");
        assert_eq!(&read[2][7], "0.125");
    }

    #[test]
    fn csv_tick_summary_row() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let read = records(dir.path().join("tick_summaries.csv"));
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].iter().collect::<Vec<_>>(), ["3", "12", "2", "4", "9"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tmp();
        let result = CsvWriter::new(&dir.path().join("no/such/dir"));
        assert!(result.is_err());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use sn_behavior::AgentKind;
    use sn_core::{Tick, Vec2};
    use sn_world::{FixedCursor, WorldBuilder, WorldConfig};
    use tempfile::TempDir;

    use crate::observer::snapshot_rows;
    use crate::{
        AgentSnapshotRow, CsvWriter, OutputError, OutputResult, OutputWriter, TickSummaryRow,
        WorldOutputObserver,
    };

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn quiet_config(snapshot_every: u64) -> WorldConfig {
        let mut cfg = WorldConfig::default();
        cfg.sim.snapshot_interval_ticks = snapshot_every;
        cfg.rules.transition_ticks = 0;
        for level in &mut cfg.levels {
            level.min_food = 0;
        }
        cfg
    }

    #[test]
    fn snapshot_rows_cover_every_body() {
        let mut world = WorldBuilder::new(quiet_config(1)).populate(false).build().unwrap();
        let prey = world.spawn_agent(AgentKind::Prey, Vec2::new(200.0, 200.0), 2);

        let rows = snapshot_rows(Tick(7), &world);

        // Player: head + 3 followers; prey: head + 2 followers.
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r| r.tick == 7));
        assert_eq!(rows[0].kind, AgentKind::Player);
        assert_eq!(rows[0].segment, 0);
        assert_eq!(rows[3].segment, 3);
        assert_eq!(rows[4].agent_id, prey.0);
        assert_eq!((rows[4].x, rows[4].y), (200.0, 200.0));
    }

    #[test]
    fn integration_csv() {
        let mut world = WorldBuilder::new(quiet_config(2)).populate(false).build().unwrap();
        let start = world.player().head().pos;

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = WorldOutputObserver::new(writer);
        world.run(6, &mut FixedCursor(start), &mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // snapshot interval 2 → ticks 0, 2, 4; 4 player bodies each.
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 12, "expected 3 ticks × 4 bodies = 12 rows, got {}", rows.len());

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[5][0], "5");
        assert_eq!(&rows[5][3], "1"); // only the player
    }

    /// Fails every write after the first `ok` calls.
    struct Flaky {
        ok:    usize,
        calls: usize,
    }

    impl Flaky {
        fn step(&mut self) -> OutputResult<()> {
            self.calls += 1;
            if self.calls > self.ok {
                let msg = format!("write {} refused", self.calls);
                Err(OutputError::Io(std::io::Error::other(msg)))
            } else {
                Ok(())
            }
        }
    }

    impl OutputWriter for Flaky {
        fn write_snapshots(&mut self, _rows: &[AgentSnapshotRow]) -> OutputResult<()> {
            self.step()
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            self.step()
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.step()
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut world = WorldBuilder::new(quiet_config(0)).populate(false).build().unwrap();
        let start = world.player().head().pos;
        let mut obs = WorldOutputObserver::new(Flaky { ok: 2, calls: 0 });

        world.run(5, &mut FixedCursor(start), &mut obs);

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("write 3 refused"), "{err}");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().calls, 6); // 5 summaries + finish
    }
}

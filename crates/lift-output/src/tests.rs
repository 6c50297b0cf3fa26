//! Integration tests for lift-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{LiftSnapshotRow, NO_DESTINATION, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(lift_id: u32, tick: u64) -> LiftSnapshotRow {
        LiftSnapshotRow {
            lift_id,
            tick,
            level:       lift_id as u16 + 1,
            idle:        true,
            destination: NO_DESTINATION,
            door_open:   false,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            elapsed_ms:   tick * 500,
            moved_lifts:  tick,
            arrivals:     0,
            active_calls: 1,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("lift_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("lift_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["lift_id", "tick", "level", "idle", "destination", "door_open"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "elapsed_ms", "moved_lifts", "arrivals", "active_calls"]);
    }

    #[test]
    fn csv_snapshot_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![snap_row(0, 5), snap_row(1, 5), snap_row(2, 5)];
        w.write_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("lift_snapshots.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "0"); // lift_id
        assert_eq!(&read_rows[0][1], "5"); // tick
        assert_eq!(&read_rows[0][3], "1"); // idle as integer
        assert_eq!(&read_rows[0][4], &NO_DESTINATION.to_string());
        assert_eq!(&read_rows[1][0], "1");
        assert_eq!(&read_rows[2][0], "2");
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3");    // tick
        assert_eq!(&read_rows[0][1], "1500"); // 3 * 500 ms
        assert_eq!(&read_rows[0][2], "3");    // moved_lifts
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
        w.write_snapshots(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use lift_core::{Floor, FloorCall, SimConfig, Tick};
        use lift_sim::{ScriptedCalls, SimBuilder};

        use crate::observer::SimOutputObserver;

        let mut config = SimConfig::new(6, 2);
        config.total_ticks = 6;
        config.output_interval_ticks = 2;

        let mut sim = SimBuilder::new(config.clone()).build().unwrap();
        let mut source = ScriptedCalls::new().at(Tick(0), FloorCall::up(Floor(3)));

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer, &config);
        sim.run(&mut source, &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // output_interval = 2 → snapshots at ticks 0, 2, 4 (3 ticks × 2 lifts = 6 rows)
        let mut rdr = csv::Reader::from_path(dir.path().join("lift_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6, "expected 3 ticks × 2 lifts = 6 snapshot rows, got {}", rows.len());

        // One summary row per tick.
        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr2.records().count(), 6);
    }
}

#[cfg(test)]
mod observer_tests {
    use lift_core::{SimConfig, Tick};
    use lift_sim::{SimObserver, TickStats};

    use crate::observer::SimOutputObserver;
    use crate::row::{LiftSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// A writer that fails every call, to exercise error capture.
    struct FailingWriter;

    impl OutputWriter for FailingWriter {
        fn write_snapshots(&mut self, _rows: &[LiftSnapshotRow]) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }

        fn write_tick_summary(&mut self, _row: &TickSummaryRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other("disk full")))
        }

        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn first_write_error_is_kept() {
        let config = SimConfig::new(6, 1);
        let mut obs = SimOutputObserver::new(FailingWriter, &config);

        obs.on_tick_end(Tick(0), &TickStats::default());
        obs.on_tick_end(Tick(1), &TickStats::default());

        assert!(obs.take_error().is_some());
        // Taken once — subsequent takes are empty.
        assert!(obs.take_error().is_none());
    }
}

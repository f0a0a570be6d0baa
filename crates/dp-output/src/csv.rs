//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `metrics.csv`
//! - `philosopher_snapshots.csv`
//! - `fork_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{ForkSnapshotRow, OutputResult, PhilosopherSnapshotRow, TickMetricsRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    metrics:      Writer<File>,
    philosophers: Writer<File>,
    forks:        Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the three CSV files, and write headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut metrics = Writer::from_path(dir.join("metrics.csv"))?;
        metrics.write_record(["tick", "thinking", "hungry", "eating", "avg_wait_time", "throughput"])?;

        let mut philosophers = Writer::from_path(dir.join("philosopher_snapshots.csv"))?;
        philosophers.write_record([
            "tick",
            "philosopher_id",
            "seat",
            "state",
            "ticks_since_state_change",
            "total_eaten",
            "total_wait_time",
            "eating_count",
        ])?;

        let mut forks = Writer::from_path(dir.join("fork_snapshots.csv"))?;
        forks.write_record(["tick", "fork_id", "used", "owner"])?;

        Ok(Self {
            metrics,
            philosophers,
            forks,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            row.tick.to_string(),
            row.thinking.to_string(),
            row.hungry.to_string(),
            row.eating.to_string(),
            row.avg_wait_time.to_string(),
            row.throughput.to_string(),
        ])?;
        Ok(())
    }

    fn write_philosophers(&mut self, rows: &[PhilosopherSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.philosophers.write_record(&[
                row.tick.to_string(),
                row.philosopher_id.to_string(),
                row.seat.to_string(),
                row.state.to_owned(),
                row.ticks_since_state_change.to_string(),
                row.total_eaten.to_string(),
                row.total_wait_time.to_string(),
                row.eating_count.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_forks(&mut self, rows: &[ForkSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            // Free forks leave the owner column empty.
            self.forks.write_record(&[
                row.tick.to_string(),
                row.fork_id.to_string(),
                (row.used as u8).to_string(),
                row.owner.map(|o| o.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.metrics.flush()?;
        self.philosophers.flush()?;
        self.forks.flush()?;
        Ok(())
    }
}

//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `metrics`, `philosopher_snapshots`, and `fork_snapshots`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{ForkSnapshotRow, OutputResult, PhilosopherSnapshotRow, TickMetricsRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS metrics (
                 tick          INTEGER PRIMARY KEY,
                 thinking      INTEGER NOT NULL,
                 hungry        INTEGER NOT NULL,
                 eating        INTEGER NOT NULL,
                 avg_wait_time REAL    NOT NULL,
                 throughput    REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS philosopher_snapshots (
                 tick                     INTEGER NOT NULL,
                 philosopher_id           INTEGER NOT NULL,
                 seat                     INTEGER NOT NULL,
                 state                    TEXT    NOT NULL,
                 ticks_since_state_change INTEGER NOT NULL,
                 total_eaten              INTEGER NOT NULL,
                 total_wait_time          INTEGER NOT NULL,
                 eating_count             INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS fork_snapshots (
                 tick    INTEGER NOT NULL,
                 fork_id INTEGER NOT NULL,
                 used    INTEGER NOT NULL,
                 owner   INTEGER
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_metrics(&mut self, row: &TickMetricsRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO metrics (tick, thinking, hungry, eating, avg_wait_time, throughput) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.tick,
                row.thinking,
                row.hungry,
                row.eating,
                row.avg_wait_time,
                row.throughput,
            ],
        )?;
        Ok(())
    }

    fn write_philosophers(&mut self, rows: &[PhilosopherSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO philosopher_snapshots \
                 (tick, philosopher_id, seat, state, ticks_since_state_change, \
                  total_eaten, total_wait_time, eating_count) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick,
                    row.philosopher_id,
                    row.seat,
                    row.state,
                    row.ticks_since_state_change,
                    row.total_eaten,
                    row.total_wait_time,
                    row.eating_count,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_forks(&mut self, rows: &[ForkSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO fork_snapshots (tick, fork_id, used, owner) \
                 VALUES (?1, ?2, ?3, ?4)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.tick, row.fork_id, row.used as i64, row.owner])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}

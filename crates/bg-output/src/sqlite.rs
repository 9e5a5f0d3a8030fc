//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `burglary_events` and `tick_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{BurglaryEventRow, OutputResult, TickSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS burglary_events (
                 tick         INTEGER NOT NULL,
                 burglar_id   INTEGER NOT NULL,
                 house_id     INTEGER NOT NULL,
                 community_id INTEGER NOT NULL,
                 x            REAL    NOT NULL,
                 y            REAL    NOT NULL,
                 suitability  REAL    NOT NULL,
                 intensity    REAL    NOT NULL,
                 margin       REAL    NOT NULL,
                 probability  REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick             INTEGER PRIMARY KEY,
                 burglaries       INTEGER NOT NULL,
                 total_burglaries INTEGER NOT NULL,
                 total_security   REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_burglaries(&mut self, rows: &[BurglaryEventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO burglary_events \
                 (tick, burglar_id, house_id, community_id, x, y, \
                  suitability, intensity, margin, probability) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick,
                    row.burglar_id,
                    row.house_id,
                    row.community_id,
                    row.x,
                    row.y,
                    row.suitability,
                    row.intensity,
                    row.margin,
                    row.probability,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (tick, burglaries, total_burglaries, total_security) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![row.tick, row.burglaries, row.total_burglaries, row.total_security],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}

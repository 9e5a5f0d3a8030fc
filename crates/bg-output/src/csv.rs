//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `burglary_events.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{BurglaryEventRow, OutputResult, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("burglary_events.csv"))?;
        events.write_record([
            "tick",
            "burglar_id",
            "house_id",
            "community_id",
            "x",
            "y",
            "suitability",
            "intensity",
            "margin",
            "probability",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "burglaries", "total_burglaries", "total_security"])?;

        Ok(Self {
            events,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_burglaries(&mut self, rows: &[BurglaryEventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.tick.to_string(),
                row.burglar_id.to_string(),
                row.house_id.to_string(),
                row.community_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.suitability.to_string(),
                row.intensity.to_string(),
                row.margin.to_string(),
                row.probability.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.burglaries.to_string(),
            row.total_burglaries.to_string(),
            row.total_security.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}

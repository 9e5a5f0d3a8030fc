//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use bg_core::{SimConfig, Tick};
use bg_env::{Environment, SimulationContext};
use bg_sim::SimObserver;

use bg_burglary::BurglaryEvent;

use crate::row::{BurglaryEventRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes burglary events and tick summaries to any
/// [`OutputWriter`] backend (CSV, SQLite, …).
///
/// Burglary events are buffered during the apply phase and written as one
/// batch per tick.  Summaries follow `config.output_interval_ticks`: every
/// N ticks, or never when the interval is zero.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After `sim.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:         W,
    interval_ticks: u64,
    pending:        Vec<BurglaryEventRow>,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, taking the summary cadence
    /// from `config`.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            interval_ticks: config.output_interval_ticks,
            pending:        Vec::new(),
            last_error:     None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_burglary(&mut self, event: &BurglaryEvent) {
        self.pending.push(BurglaryEventRow::from(event));
    }

    fn on_tick_end(
        &mut self,
        tick: Tick,
        burglaries: u32,
        env: &Environment,
        ctx: &SimulationContext,
    ) {
        if !self.pending.is_empty() {
            let rows = std::mem::take(&mut self.pending);
            let result = self.writer.write_burglaries(&rows);
            self.store_err(result);
        }

        if self.interval_ticks != 0 && tick.0 % self.interval_ticks == 0 {
            let row = TickSummaryRow {
                tick:             tick.0,
                burglaries,
                total_burglaries: ctx.burglary_count(),
                total_security:   env.total_security(),
            };
            let result = self.writer.write_tick_summary(&row);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _ctx: &SimulationContext) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

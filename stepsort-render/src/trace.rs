//! The plain-text trace.
//!
//! One line per step, no escape sequences. Pipe it to a file and the whole
//! run is diffable, which is also how the determinism tests read it.

use std::io::{self, Write};
use stepsort_core::SortEvent;

/// Renders [`SortEvent`]s as plain text lines.
#[derive(Debug)]
pub struct TraceRenderer<W: Write> {
    out: W,
    comparisons: u64,
}

impl<W: Write> TraceRenderer<W> {
    /// Write the trace into `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            comparisons: 0,
        }
    }

    /// Comparisons seen since the last counter reset.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Feed one event.
    pub fn handle(&mut self, event: &SortEvent) -> io::Result<()> {
        match event {
            SortEvent::CounterReset => {
                self.comparisons = 0;
                writeln!(self.out, "--- reset ---")
            }
            SortEvent::Comparison => {
                self.comparisons += 1;
                Ok(())
            }
            SortEvent::Step { data, highlighted } => {
                writeln!(
                    self.out,
                    "[{:>6}] {:?} hl={:?}",
                    self.comparisons, data, highlighted
                )
            }
        }
    }
}

#![warn(missing_docs)]
//! Terminal renderers for the StepSort event stream.
//!
//! Two ways to watch a sort: [`BarRenderer`] draws the dataset as a live bar
//! chart on an alternate screen, [`TraceRenderer`] prints one line per step.
//! Both consume the same [`SortEvent`] stream and never touch the engine.
//!
//! [`SortEvent`]: stepsort_core::SortEvent

pub mod bars;
pub mod trace;

pub use bars::BarRenderer;
pub use trace::TraceRenderer;

use std::str::FromStr;

/// How to render the event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Live bar chart on the alternate screen.
    Bars,
    /// One line of text per step, suitable for piping.
    Trace,
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bars" | "tui" => Ok(DisplayMode::Bars),
            "trace" | "text" => Ok(DisplayMode::Trace),
            other => Err(format!(
                "unknown display mode {other:?} (expected bars or trace)"
            )),
        }
    }
}

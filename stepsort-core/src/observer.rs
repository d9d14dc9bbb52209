//! Progress observation: the seam between the engine and a renderer.
//!
//! The engine never touches a screen. It talks to a [`ProgressObserver`],
//! injected at call time. Cross-thread delivery goes through
//! [`ChannelObserver`], which publishes owned [`SortEvent`] snapshots over an
//! mpsc channel so the rendering side never sees the live buffer.

use std::sync::mpsc;

/// Sink for engine progress.
///
/// The engine calls, in order per instrumented comparison:
/// `on_comparison`, then `on_step`, then it sleeps for the pacing delay.
/// `reset_counter` is called exactly once at the start of a sort.
pub trait ProgressObserver {
    /// One logical comparison happened.
    fn on_comparison(&mut self);

    /// A snapshot of the data plus the indices currently under
    /// consideration. `highlighted` is replaced on every emission and may
    /// transiently contain an index equal to `data.len()` (quicksort's left
    /// cursor overshoots by one before its bound check).
    fn on_step(&mut self, data: &[u32], highlighted: &[usize]);

    /// A new sort is starting; forget the previous comparison count.
    fn reset_counter(&mut self);
}

/// Owned snapshot of one observable moment, safe to move across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortEvent {
    /// A new sort started.
    CounterReset,
    /// One logical comparison happened.
    Comparison,
    /// Data snapshot plus the highlight set.
    Step {
        /// Copy of the full dataset at this moment.
        data: Vec<u32>,
        /// Ordered indices currently under consideration; empty on the
        /// final emission.
        highlighted: Vec<usize>,
    },
}

/// Observer that forwards everything as [`SortEvent`]s over a channel.
///
/// A disconnected receiver is tolerated: events are dropped and the sort
/// runs to completion. A dying renderer must never abort a run.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::Sender<SortEvent>,
}

impl ChannelObserver {
    /// Wrap an existing sender.
    pub fn new(tx: mpsc::Sender<SortEvent>) -> Self {
        Self { tx }
    }

    /// Convenience: a fresh channel with the observer on the sending end.
    pub fn channel() -> (Self, mpsc::Receiver<SortEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    fn send(&self, event: SortEvent) {
        let _ = self.tx.send(event);
    }
}

impl ProgressObserver for ChannelObserver {
    fn on_comparison(&mut self) {
        self.send(SortEvent::Comparison);
    }

    fn on_step(&mut self, data: &[u32], highlighted: &[usize]) {
        self.send(SortEvent::Step {
            data: data.to_vec(),
            highlighted: highlighted.to_vec(),
        });
    }

    fn reset_counter(&mut self) {
        self.send(SortEvent::CounterReset);
    }
}

/// Observer that records everything it sees.
///
/// The test surface for determinism and trace assertions: the comparison
/// count and the full ordered log of highlight emissions.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    /// Comparisons observed since the last reset.
    pub comparisons: u64,
    /// How many times the counter was reset.
    pub resets: u32,
    /// Every highlight set, in emission order (including empty sets).
    pub highlights: Vec<Vec<usize>>,
    /// The most recently published data snapshot.
    pub last_snapshot: Vec<u32>,
}

impl RecordingObserver {
    /// A fresh, empty recording.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressObserver for RecordingObserver {
    fn on_comparison(&mut self) {
        self.comparisons += 1;
    }

    fn on_step(&mut self, data: &[u32], highlighted: &[usize]) {
        self.highlights.push(highlighted.to_vec());
        self.last_snapshot = data.to_vec();
    }

    fn reset_counter(&mut self) {
        self.comparisons = 0;
        self.resets += 1;
    }
}

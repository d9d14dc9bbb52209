#![warn(missing_docs)]
//! StepSort Core — the instrumented sorting engine.
//!
//! Runs a chosen sorting algorithm over a generated dataset and makes every
//! logical comparison observable: the engine notifies a [`ProgressObserver`],
//! publishes a snapshot of the data with the indices under consideration, and
//! sleeps for a configurable pacing delay before the next step. Rendering is
//! somebody else's job; this crate only defines the observer seam.
//!
//! - **Dataset generator**: a jumbled permutation of `1..=N`.
//! - **Sort engine**: five instrumented algorithms (selection, insertion,
//!   bubble, merge, quicksort with median-of-three) mutating the dataset in
//!   place.
//! - **Run controller**: one-sort-at-a-time exclusivity, worker thread
//!   dispatch, and the post-sort reveal animation.
//!
//! Pacing is synchronous and blocking by design: the visualization rate is
//! proportional to the comparison count, not wall-clock driven.

pub mod algorithm;
pub mod controller;
pub mod dataset;
pub mod engine;
pub mod observer;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use controller::{
    ControllerError, RunSpec, SortController, SortHandle, MAX_AMOUNT, MAX_DELAY_MS, MIN_AMOUNT,
};
pub use engine::{run, QUICKSORT_CUTOFF};
pub use observer::{ChannelObserver, ProgressObserver, RecordingObserver, SortEvent};

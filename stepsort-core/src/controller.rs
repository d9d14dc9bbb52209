//! The run controller: one sort at a time.
//!
//! [`SortController`] owns the exclusivity flag. [`start_sort`] validates the
//! request, claims the flag with a single compare-and-swap, and spawns a
//! worker thread that generates the dataset, runs the engine, and plays the
//! reveal animation. The flag is released by a drop guard inside the worker,
//! so it clears on success, on panic, and on spawn failure alike.
//!
//! [`start_sort`]: SortController::start_sort

use crate::algorithm::Algorithm;
use crate::dataset;
use crate::engine;
use crate::observer::ProgressObserver;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Smallest accepted dataset size.
pub const MIN_AMOUNT: usize = 10;
/// Largest accepted dataset size.
pub const MAX_AMOUNT: usize = 1000;
/// Largest accepted pacing delay, in milliseconds.
pub const MAX_DELAY_MS: f64 = 1000.0;

/// Why a sort could not be started, or how a running sort ended badly.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// A sort is already running; the controller admits one at a time.
    #[error("a sort is already running")]
    Busy,
    /// The requested dataset size is outside the accepted range.
    #[error("amount {amount} out of range (10..=1000)")]
    InvalidAmount {
        /// The rejected size.
        amount: usize,
    },
    /// The requested pacing delay is outside the accepted range.
    #[error("delay {delay_ms} ms out of range (0..=1000, finite)")]
    InvalidDelay {
        /// The rejected delay, in milliseconds.
        delay_ms: f64,
    },
    /// The worker thread could not be spawned.
    #[error("failed to spawn sort worker")]
    SpawnFailed(#[source] io::Error),
    /// The worker thread panicked before finishing.
    #[error("sort worker panicked")]
    WorkerPanicked,
}

/// Everything needed to start one sort.
#[derive(Debug, Clone)]
pub struct RunSpec {
    /// Which algorithm to run.
    pub algorithm: Algorithm,
    /// Dataset size, validated against `10..=1000`.
    pub amount: usize,
    /// Pacing delay per comparison, in milliseconds. Zero is allowed and
    /// still yields a suspension point per comparison.
    pub delay_ms: f64,
    /// Seed for dataset generation; `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

impl RunSpec {
    /// A spec with the given algorithm and defaults for the rest
    /// (50 elements, 5 ms, unseeded).
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            amount: 50,
            delay_ms: 5.0,
            seed: None,
        }
    }

    /// Check the numeric bounds. Runs before the exclusivity flag is
    /// touched, so a rejected spec never blocks a later valid one.
    pub fn validate(&self) -> Result<(), ControllerError> {
        if !(MIN_AMOUNT..=MAX_AMOUNT).contains(&self.amount) {
            return Err(ControllerError::InvalidAmount {
                amount: self.amount,
            });
        }
        if !self.delay_ms.is_finite() || !(0.0..=MAX_DELAY_MS).contains(&self.delay_ms) {
            return Err(ControllerError::InvalidDelay {
                delay_ms: self.delay_ms,
            });
        }
        Ok(())
    }

    /// The pacing delay as a [`Duration`].
    pub fn pacing(&self) -> Duration {
        Duration::from_secs_f64(self.delay_ms / 1000.0)
    }
}

/// Admits one sort at a time and hands out a [`SortHandle`] per run.
///
/// Cloning shares the exclusivity flag: clones admit one sort between them,
/// not one each.
#[derive(Debug, Clone, Default)]
pub struct SortController {
    running: Arc<AtomicBool>,
}

/// Releases the exclusivity flag when dropped. Lives inside the worker
/// closure, so the flag clears however the worker exits.
struct RunningGuard(Arc<AtomicBool>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl SortController {
    /// A controller with no sort running.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a sort is currently running.
    pub fn is_sort_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Validate `spec`, claim the run slot, and spawn the worker.
    ///
    /// The claim is a single compare-and-swap: two threads racing to start
    /// resolve to exactly one winner and one [`ControllerError::Busy`].
    pub fn start_sort(
        &self,
        spec: RunSpec,
        mut observer: impl ProgressObserver + Send + 'static,
    ) -> Result<SortHandle, ControllerError> {
        spec.validate()?;

        if self
            .running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!(algorithm = %spec.algorithm, "sort rejected, another is running");
            return Err(ControllerError::Busy);
        }

        debug!(
            algorithm = %spec.algorithm,
            amount = spec.amount,
            delay_ms = spec.delay_ms,
            "starting sort"
        );

        // The guard moves into the closure. If the spawn itself fails the
        // closure is dropped unrun, which still releases the flag.
        let guard = RunningGuard(Arc::clone(&self.running));
        let worker = thread::Builder::new()
            .name("stepsort-worker".into())
            .spawn(move || {
                let _guard = guard;
                run_to_completion(&spec, &mut observer)
            })
            .map_err(ControllerError::SpawnFailed)?;

        Ok(SortHandle { worker })
    }
}

/// The worker body: generate, sort, reveal.
fn run_to_completion(spec: &RunSpec, observer: &mut dyn ProgressObserver) -> Vec<u32> {
    observer.reset_counter();

    let mut data = match spec.seed {
        Some(seed) => dataset::generate_with(&mut StdRng::seed_from_u64(seed), spec.amount),
        None => dataset::generate(spec.amount),
    };

    // Show the jumbled dataset before the first comparison lands
    observer.on_step(&data, &[]);

    engine::run(spec.algorithm, &mut data, spec.pacing(), observer);

    reveal(&data, spec.pacing(), observer);
    debug!(algorithm = %spec.algorithm, "sort finished");

    data
}

/// The post-sort sweep: highlight a growing prefix of the sorted data, one
/// index per frame at the pacing delay, then clear every highlight.
fn reveal(data: &[u32], delay: Duration, observer: &mut dyn ProgressObserver) {
    let mut swept: Vec<usize> = Vec::with_capacity(data.len());
    for i in 0..data.len() {
        swept.push(i);
        observer.on_step(data, &swept);
        thread::sleep(delay);
    }
    observer.on_step(data, &[]);
}

/// Ownership of one running sort.
#[derive(Debug)]
pub struct SortHandle {
    worker: thread::JoinHandle<Vec<u32>>,
}

impl SortHandle {
    /// Block until the sort finishes and return the sorted dataset.
    pub fn wait(self) -> Result<Vec<u32>, ControllerError> {
        self.worker.join().map_err(|_| ControllerError::WorkerPanicked)
    }

    /// Whether the worker has exited, without blocking.
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }
}

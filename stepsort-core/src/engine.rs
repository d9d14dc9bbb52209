//! The instrumented sorting engine.
//!
//! Five algorithms, each rewritten so that every logical comparison is
//! observable: the engine notifies the observer, publishes a snapshot with
//! the indices under consideration, and then blocks for the pacing delay.
//! The sleep is unconditional — a zero delay still yields the suspension
//! point — so the event rate tracks the comparison count exactly.
//!
//! The instrumentation is part of each algorithm's contract, not an
//! afterthought: which probes are counted (and which are not, like insertion
//! sort's successful stopping check) determines the comparison totals the
//! rest of the system displays and the tests pin down.

use crate::algorithm::Algorithm;
use crate::observer::ProgressObserver;
use std::thread;
use std::time::Duration;

/// Quicksort partitions smaller than this delegate to bounded insertion
/// sort, which is faster for tiny ranges. Fixed, not configurable.
pub const QUICKSORT_CUTOFF: usize = 8;

/// Run `algorithm` over `data` in place, pacing every comparison by `delay`.
///
/// Returns once `data` is fully sorted ascending. Events flow through
/// `observer`; the comparison counter is the observer's to keep.
pub fn run(
    algorithm: Algorithm,
    data: &mut [u32],
    delay: Duration,
    observer: &mut dyn ProgressObserver,
) {
    let mut pass = Pass { observer, delay };
    match algorithm {
        Algorithm::Selection => pass.selection_sort(data),
        Algorithm::Insertion => {
            let len = data.len();
            pass.insertion_sort(data, 0, len);
        }
        Algorithm::Bubble => pass.bubble_sort(data),
        Algorithm::Merge => {
            if !data.is_empty() {
                let max = data.len() - 1;
                pass.merge_sort(data, 0, max);
            }
        }
        Algorithm::Quick => {
            let len = data.len();
            pass.quick_sort(data, 0, len);
        }
    }
}

/// One sort in flight: the observer plus the pacing delay.
struct Pass<'a> {
    observer: &'a mut dyn ProgressObserver,
    delay: Duration,
}

impl Pass<'_> {
    /// One instrumented comparison: count, publish, pace.
    fn comparison(&mut self, data: &[u32], highlighted: &[usize]) {
        self.observer.on_comparison();
        self.observer.on_step(data, highlighted);
        thread::sleep(self.delay);
    }

    fn selection_sort(&mut self, data: &mut [u32]) {
        for i in 0..data.len() {
            // Find the minimum of data[i..]; the swap itself is not
            // instrumented, only the probes are
            let mut min_index = i;
            for j in i..data.len() {
                self.comparison(data, &[j]);
                if data[j] < data[min_index] {
                    min_index = j;
                }
            }
            data.swap(i, min_index);
        }
    }

    /// Insertion sort over `[min, max)`. The full sort is the `[0, len)`
    /// case; the bounded form is quicksort's small-partition fallback.
    ///
    /// The stopping check that finds the insertion point breaks before it
    /// is counted: only failed probes are instrumented.
    fn insertion_sort(&mut self, data: &mut [u32], min: usize, max: usize) {
        for i in min..max {
            let mut slot = min;
            for j in (min..i).rev() {
                if data[i] >= data[j] {
                    slot = j + 1;
                    break;
                }
                self.comparison(data, &[i, j]);
            }

            // Shift up to open the slot, then place
            let value = data[i];
            for j in ((slot + 1)..=i).rev() {
                data[j] = data[j - 1];
            }
            data[slot] = value;
        }
    }

    fn bubble_sort(&mut self, data: &mut [u32]) {
        loop {
            let mut swaps = 0u32;
            for i in 0..data.len().saturating_sub(1) {
                self.comparison(data, &[i, i + 1]);
                if data[i] >= data[i + 1] {
                    data.swap(i, i + 1);
                    swaps += 1;
                }
            }
            // A clean pass means sorted
            if swaps == 0 {
                break;
            }
        }
    }

    /// Merge sort over the inclusive range `[min, max]`.
    fn merge_sort(&mut self, data: &mut [u32], min: usize, max: usize) {
        if max == min {
            return;
        }
        if max - min == 1 {
            self.comparison(data, &[min, max]);
            if data[max] < data[min] {
                data.swap(min, max);
            }
            return;
        }

        let mid = min + (max - min) / 2;
        self.merge_sort(data, min, mid);
        self.merge_sort(data, mid + 1, max);
        self.merge(data, min, mid + 1, max);
    }

    /// Merge the sorted halves `[min, mid)` and `[mid, max]` back in place
    /// through a freshly allocated buffer.
    fn merge(&mut self, data: &mut [u32], min: usize, mid: usize, max: usize) {
        let mut left = min;
        let mut right = mid;
        let mut merged = Vec::with_capacity(max - min + 1);

        while left < mid && right <= max {
            self.comparison(data, &[left, right]);
            if data[left] > data[right] {
                merged.push(data[right]);
                right += 1;
            } else {
                merged.push(data[left]);
                left += 1;
            }
        }

        // One side is exhausted; the remainder of the other is appended
        // without further comparisons
        merged.extend_from_slice(&data[left..mid]);
        merged.extend_from_slice(&data[right..=max]);

        data[min..=max].copy_from_slice(&merged);
    }

    /// Quicksort over the half-open range `[min, max)`.
    fn quick_sort(&mut self, data: &mut [u32], min: usize, max: usize) {
        if max - min < QUICKSORT_CUTOFF {
            self.insertion_sort(data, min, max);
            return;
        }

        let pivot_index = self.choose_pivot(data, min, max);
        let pivot = data[pivot_index];

        // Hoare-style converging cursors. Both start one step out of range
        // and advance before every probe, so they are signed until cast at
        // the point of use.
        let mut left = min as isize - 1;
        let mut right = max as isize;

        while left <= right {
            loop {
                left += 1;
                self.comparison(data, &[left as usize]);
                if !((left as usize) < max && data[left as usize] < pivot) {
                    break;
                }
            }
            loop {
                right -= 1;
                self.comparison(data, &[right as usize]);
                if !(right >= min as isize && data[right as usize] >= pivot) {
                    break;
                }
            }

            if left < right {
                data.swap(left as usize, right as usize);
                // The swap decision gets its own paced frame, same as a
                // comparison; totals include it
                self.comparison(data, &[left as usize, right as usize]);
            }
        }

        let split = (right + 1) as usize;
        self.quick_sort(data, min, split);
        self.quick_sort(data, split, max);
    }

    /// Median-of-three pivot selection over `[min, max)`, returning the
    /// chosen index.
    ///
    /// The caller guarantees `max - min >= QUICKSORT_CUTOFF`, so the
    /// degenerate tiny-range case cannot occur. The branch structure decides
    /// both the probe count and the chosen index; preserve it exactly.
    fn choose_pivot(&mut self, data: &[u32], min: usize, max: usize) -> usize {
        let mid = (min + max) / 2;
        let mut median = min;

        self.comparison(data, &[mid, min]);
        if data[mid] > data[min] {
            self.comparison(data, &[max - 1, mid]);
            if data[max - 1] > data[mid] {
                median = mid;
            } else {
                self.comparison(data, &[max - 1, min]);
                if data[max - 1] > data[min] {
                    median = max - 1;
                }
            }
        } else if data[min] > data[max - 1] {
            // The guard above is not an instrumented probe; the two below
            // always run and pin down the three-way order
            self.comparison(data, &[max - 1, min]);
            self.comparison(data, &[max - 1, mid]);
            if data[max - 1] > data[mid] {
                median = max - 1;
            } else {
                median = mid;
            }
        }

        median
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::RecordingObserver;

    fn run_recorded(algorithm: Algorithm, data: &mut [u32]) -> RecordingObserver {
        let mut observer = RecordingObserver::new();
        run(algorithm, data, Duration::ZERO, &mut observer);
        observer
    }

    #[test]
    fn selection_sort_comparison_total() {
        // i=0 probes j=0,1,2; i=1 probes j=1,2; i=2 probes j=2
        let mut data = vec![3, 1, 2];
        let observer = run_recorded(Algorithm::Selection, &mut data);
        assert_eq!(data, vec![1, 2, 3]);
        assert_eq!(observer.comparisons, 6);
        assert_eq!(
            observer.highlights,
            vec![vec![0], vec![1], vec![2], vec![1], vec![2], vec![2]]
        );
    }

    #[test]
    fn insertion_sort_skips_the_successful_stopping_check() {
        // Already sorted: every backward scan stops on its first probe,
        // which breaks before it is counted
        let mut data = vec![1, 2, 3, 4, 5];
        let observer = run_recorded(Algorithm::Insertion, &mut data);
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
        assert_eq!(observer.comparisons, 0);
    }

    #[test]
    fn insertion_sort_reverse_input() {
        // Reversed: every probe fails, so each element i scans all the way
        // down: 1 + 2 + 3 = 6 comparisons
        let mut data = vec![4, 3, 2, 1];
        let observer = run_recorded(Algorithm::Insertion, &mut data);
        assert_eq!(data, vec![1, 2, 3, 4]);
        assert_eq!(observer.comparisons, 6);
    }

    #[test]
    fn bubble_sort_swapping_pair() {
        // Pass 1: one comparison, one swap. Pass 2: one comparison, clean.
        let mut data = vec![2, 1];
        let observer = run_recorded(Algorithm::Bubble, &mut data);
        assert_eq!(data, vec![1, 2]);
        assert_eq!(observer.comparisons, 2);
        assert_eq!(observer.highlights, vec![vec![0, 1], vec![0, 1]]);
    }

    #[test]
    fn bubble_sort_sorted_pair_terminates_after_one_pass() {
        let mut data = vec![1, 2];
        let observer = run_recorded(Algorithm::Bubble, &mut data);
        assert_eq!(data, vec![1, 2]);
        assert_eq!(observer.comparisons, 1);
    }

    #[test]
    fn merge_sort_three_element_trace() {
        // [5,3,1] splits into [5,3] and [1]: one base-case comparison sorts
        // the pair, then the merge takes one more probe before the left
        // remainder is appended without comparisons
        let mut data = vec![5, 3, 1];
        let observer = run_recorded(Algorithm::Merge, &mut data);
        assert_eq!(data, vec![1, 3, 5]);
        assert_eq!(observer.comparisons, 2);
        assert_eq!(observer.highlights, vec![vec![0, 1], vec![0, 2]]);
    }

    #[test]
    fn merge_sort_handles_empty_and_single() {
        let mut empty: Vec<u32> = vec![];
        let observer = run_recorded(Algorithm::Merge, &mut empty);
        assert_eq!(observer.comparisons, 0);

        let mut single = vec![42];
        let observer = run_recorded(Algorithm::Merge, &mut single);
        assert_eq!(single, vec![42]);
        assert_eq!(observer.comparisons, 0);
    }

    #[test]
    fn quicksort_below_cutoff_is_exactly_bounded_insertion() {
        let input: Vec<u32> = vec![7, 2, 5, 1, 6, 3, 4];
        assert!(input.len() < QUICKSORT_CUTOFF);

        let mut via_quick = input.clone();
        let quick = run_recorded(Algorithm::Quick, &mut via_quick);

        let mut via_insertion = input.clone();
        let insertion = run_recorded(Algorithm::Insertion, &mut via_insertion);

        assert_eq!(via_quick, via_insertion);
        assert_eq!(quick.comparisons, insertion.comparisons);
        assert_eq!(quick.highlights, insertion.highlights);
    }

    #[test]
    fn quicksort_sorts_across_the_cutoff() {
        let mut data: Vec<u32> = vec![9, 4, 12, 1, 7, 11, 3, 8, 2, 10, 6, 5];
        let observer = run_recorded(Algorithm::Quick, &mut data);
        let expected: Vec<u32> = (1..=12).collect();
        assert_eq!(data, expected);
        assert!(observer.comparisons > 0);
    }

    #[test]
    fn every_algorithm_observes_counted_steps() {
        // Each comparison pairs one counter increment with one emission;
        // non-counted emissions do not exist inside the engine
        for algorithm in Algorithm::ALL {
            let mut data = vec![6, 2, 9, 1, 5, 8, 3, 7, 4, 10, 12, 11];
            let observer = run_recorded(algorithm, &mut data);
            assert_eq!(
                observer.comparisons as usize,
                observer.highlights.len(),
                "{algorithm} paced an emission it did not count"
            );
        }
    }
}

//! Algorithm selection.
//!
//! Dispatch is by enum, not by string: an unrecognized name fails at parse
//! time with [`UnknownAlgorithm`] instead of silently skipping the sort.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The five supported sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Selection sort: scan for the minimum, swap it into place.
    Selection,
    /// Insertion sort: backward scan for the insertion point, shift, place.
    Insertion,
    /// Bubble sort: adjacent-pair passes until a pass makes no swaps.
    Bubble,
    /// Recursive merge sort with a freshly allocated merge buffer.
    Merge,
    /// Quicksort with median-of-three pivots and an insertion-sort fallback
    /// for small partitions.
    Quick,
}

impl Algorithm {
    /// Every supported algorithm, in display order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Bubble,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Canonical display name, also the exact string [`FromStr`] accepts.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an algorithm name matches none of the supported sorts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm {name:?} (expected one of: Selection Sort, Insertion Sort, Bubble Sort, Merge Sort, Quick Sort)")]
pub struct UnknownAlgorithm {
    /// The rejected name, verbatim.
    pub name: String,
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Case-sensitive exact match on the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Selection Sort" => Ok(Algorithm::Selection),
            "Insertion Sort" => Ok(Algorithm::Insertion),
            "Bubble Sort" => Ok(Algorithm::Bubble),
            "Merge Sort" => Ok(Algorithm::Merge),
            "Quick Sort" => Ok(Algorithm::Quick),
            other => Err(UnknownAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_canonical_name() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn rejects_unknown_name() {
        let err = "Bogo Sort".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.name, "Bogo Sort");
        assert!(err.to_string().contains("Bogo Sort"));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!("quick sort".parse::<Algorithm>().is_err());
        assert!("QUICK SORT".parse::<Algorithm>().is_err());
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(Algorithm::Merge.to_string(), "Merge Sort");
    }
}

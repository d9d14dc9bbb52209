//! Controller behavior across threads: exclusivity, the event stream a
//! renderer actually sees, and the reveal animation at the end of a run.

use stepsort_core::{
    Algorithm, ChannelObserver, ControllerError, RunSpec, SortController, SortEvent,
};

fn spec(algorithm: Algorithm, amount: usize) -> RunSpec {
    RunSpec {
        algorithm,
        amount,
        delay_ms: 0.0,
        seed: Some(13),
    }
}

#[test]
fn second_start_while_running_is_rejected() {
    let controller = SortController::new();

    // Enough paced comparisons that the worker is still sorting when the
    // second request lands (bubble on 100 jumbled elements is thousands of
    // comparisons, each sleeping at least 50 microseconds)
    let slow = RunSpec {
        delay_ms: 0.05,
        ..spec(Algorithm::Bubble, 100)
    };
    let (observer, events) = ChannelObserver::channel();
    let handle = controller.start_sort(slow, observer).unwrap();

    let (second_observer, second_events) = ChannelObserver::channel();
    let err = controller
        .start_sort(spec(Algorithm::Quick, 50), second_observer)
        .unwrap_err();
    assert!(matches!(err, ControllerError::Busy));

    // The rejected run produced no events at all
    assert!(second_events.try_iter().next().is_none());

    let sorted = handle.wait().unwrap();
    let expected: Vec<u32> = (1..=100).collect();
    assert_eq!(sorted, expected);

    // Exactly one counter reset reached the stream
    let resets = events
        .iter()
        .filter(|e| matches!(e, SortEvent::CounterReset))
        .count();
    assert_eq!(resets, 1);
}

#[test]
fn the_stream_a_renderer_sees() {
    let controller = SortController::new();
    let (observer, events) = ChannelObserver::channel();
    let handle = controller
        .start_sort(spec(Algorithm::Merge, 20), observer)
        .unwrap();
    handle.wait().unwrap();

    let events: Vec<SortEvent> = events.iter().collect();

    // Stream opens with the reset, then the jumbled dataset
    assert_eq!(events[0], SortEvent::CounterReset);
    match &events[1] {
        SortEvent::Step { data, highlighted } => {
            assert_eq!(data.len(), 20);
            assert!(highlighted.is_empty());
            let mut values = data.clone();
            values.sort_unstable();
            let expected: Vec<u32> = (1..=20).collect();
            assert_eq!(values, expected);
        }
        other => panic!("expected the initial snapshot, got {other:?}"),
    }

    // Stream closes with the reveal: highlighted prefixes growing to the
    // full range, then one final emission with no highlights
    let steps: Vec<&SortEvent> = events
        .iter()
        .filter(|e| matches!(e, SortEvent::Step { .. }))
        .collect();
    let tail = &steps[steps.len() - 21..];
    for (i, step) in tail[..20].iter().enumerate() {
        match step {
            SortEvent::Step { data, highlighted } => {
                let expected: Vec<usize> = (0..=i).collect();
                assert_eq!(highlighted, &expected);
                let sorted: Vec<u32> = (1..=20).collect();
                assert_eq!(data, &sorted);
            }
            other => panic!("expected a reveal frame, got {other:?}"),
        }
    }
    match tail[20] {
        SortEvent::Step { highlighted, .. } => assert!(highlighted.is_empty()),
        other => panic!("expected the closing snapshot, got {other:?}"),
    }

    // Every comparison paired with a step; the extra steps are the initial
    // snapshot plus the reveal
    let comparisons = events
        .iter()
        .filter(|e| matches!(e, SortEvent::Comparison))
        .count();
    assert_eq!(steps.len(), comparisons + 1 + 20 + 1);
}

#[test]
fn back_to_back_runs_are_admitted() {
    let controller = SortController::new();
    for algorithm in Algorithm::ALL {
        let (observer, _events) = ChannelObserver::channel();
        let handle = controller.start_sort(spec(algorithm, 10), observer).unwrap();
        let sorted = handle.wait().unwrap();
        let expected: Vec<u32> = (1..=10).collect();
        assert_eq!(sorted, expected, "{algorithm} run failed");
        assert!(!controller.is_sort_running());
    }
}

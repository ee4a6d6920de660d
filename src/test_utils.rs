use std::{fmt::Debug, ops::ControlFlow};

use proptest::{prelude::*, test_runner::TestCaseResult};

use crate::{Reducible, Signal};

/// Reduces the whole source into a `Vec`.
pub fn to_vec<S>(source: &S) -> Vec<S::Item>
where
    S: Reducible,
{
    source.reduce(
        |mut items: Vec<_>, item| {
            items.push(item);
            ControlFlow::Continue(items)
        },
        Vec::new(),
    )
}

/// Reduces the source into a `Vec`, signalling right after the `k`-th value.
///
/// `k` must be at least 1. A step function cannot signal before it is called.
pub fn stop_after<S>(source: &S, k: usize) -> Vec<S::Item>
where
    S: Reducible,
{
    assert!(k > 0, "cannot stop before the first value");

    source.reduce(
        |mut items: Vec<_>, item| {
            items.push(item);
            if items.len() >= k {
                Signal::stop(items)
            } else {
                ControlFlow::Continue(items)
            }
        },
        Vec::new(),
    )
}

/// Checks a source against the values it is expected to hand out:
///
/// - A full reduction yields exactly `expected`.
/// - A second full reduction yields the same (no state leaks between reductions).
/// - Signalling after the `k`-th value yields the first `k` values, for every `k`.
/// - No step call happens after a signal.
pub fn check_source<S>(source: &S, expected: &[S::Item]) -> TestCaseResult
where
    S: Reducible,
    S::Item: PartialEq + Debug,
{
    prop_assert_eq!(to_vec(source), expected, "full reduction mismatched");
    prop_assert_eq!(to_vec(source), expected, "second reduction mismatched");

    for k in 1..=expected.len() {
        prop_assert_eq!(
            stop_after(source, k),
            &expected[..k],
            "stopping after {} values mismatched",
            k,
        );
    }

    let mut calls_after_signal = 0;
    let mut stopped = false;
    let _ = source.reduce(
        |(), _| {
            if stopped {
                calls_after_signal += 1;
            }
            stopped = true;
            Signal::stop(())
        },
        (),
    );
    prop_assert_eq!(calls_after_signal, 0, "step called after a signal");

    Ok(())
}

use std::ops::ControlFlow;

use crate::{Reducible, Step, assert_reducible};

/// A source that hands out the same value over and over.
///
/// This `struct` is created by [`repeat()`] and [`repeat_n()`]. See their documentation for more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repeat<T> {
    value: T,
    // `None` for no bound.
    count: Option<usize>,
}

impl<T> Repeat<T> {
    /// Returns how many values one reduction hands out, or [`None`] if unbounded.
    #[inline]
    pub const fn count(&self) -> Option<usize> {
        self.count
    }
}

impl<T: Clone> Reducible for Repeat<T> {
    type Item = T;

    fn reduce<A, F>(&self, mut step: F, init: A) -> A
    where
        F: FnMut(A, T) -> Step<A>,
    {
        let mut acc = init;
        let mut remaining = self.count;

        loop {
            if remaining == Some(0) {
                return acc;
            }

            match step(acc, self.value.clone()) {
                ControlFlow::Continue(next) => acc = next,
                ControlFlow::Break(signal) => {
                    trace!("repeat: stopped by a signal, {remaining:?} left");
                    return signal.into_inner();
                }
            }

            if let Some(remaining) = &mut remaining {
                *remaining -= 1;
            }
        }
    }
}

/// Creates a source that hands out `value` endlessly.
///
/// A reduction over this source only ends when the step function returns a
/// [`Signal`](crate::Signal), directly or through an adaptor like
/// [`take()`](Reducible::take). Otherwise it never returns.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow::Continue;
/// use generic_reduce::{prelude::*, Signal, repeat};
///
/// let steps = repeat(7).reduce(
///     |acc: u32, x| if acc >= 30 { Signal::stop(acc) } else { Continue(acc + x) },
///     0,
/// );
///
/// assert_eq!(steps, 35);
/// ```
#[inline]
pub fn repeat<T: Clone>(value: T) -> Repeat<T> {
    assert_reducible(Repeat { value, count: None })
}

/// Creates a source that hands out `value` exactly `count` times per reduction.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow::Continue;
/// use generic_reduce::{generic_reduce, repeat_n};
///
/// assert_eq!(generic_reduce(repeat_n(1, 5), |acc, x| Continue(acc + x), 0), 5);
/// // Nothing is handed out, so the initial accumulator comes back.
/// assert_eq!(generic_reduce(repeat_n(5, 0), |acc, x| Continue(acc + x), 10), 10);
/// ```
#[inline]
pub fn repeat_n<T: Clone>(value: T, count: usize) -> Repeat<T> {
    assert_reducible(Repeat {
        value,
        count: Some(count),
    })
}

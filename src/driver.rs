//! Entry points that run a reduction to completion.

use std::ops::ControlFlow;

use crate::{Reducer, Reducible, Signal, Step};

/// Reduces `source` with `step`, starting from `init`, and returns the final accumulator.
///
/// If `step` returns a [`Signal`], the reduction stops right there and the value it
/// carries is returned. Otherwise the reduction runs until `source` is exhausted.
///
/// Nothing bounds the reduction. An unbounded source with a step function that never
/// signals makes this function loop forever. Bound it with
/// [`take()`](Reducible::take) or [`take_while()`](Reducible::take_while), or signal
/// from the step function.
///
/// A panic in `step`, or in any closure of an adaptor, unwinds through the source
/// untouched. For step functions that can fail, see [`try_generic_reduce()`].
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow::Continue;
/// use generic_reduce::{filter, generic_reduce, map, repeat, take};
///
/// // Every value becomes 2, all of them are even, three are taken.
/// let sum = generic_reduce(
///     take(3, filter(|x| x % 2 == 0, map(|x| x + 1, repeat(1)))),
///     |acc, x| Continue(acc + x),
///     0,
/// );
///
/// assert_eq!(sum, 6);
/// ```
#[inline]
pub fn generic_reduce<S, A, F>(source: S, step: F, init: A) -> A
where
    S: Reducible,
    F: FnMut(A, S::Item) -> Step<A>,
{
    trace!("generic_reduce: driving {}", std::any::type_name::<S>());
    source.reduce(step, init)
}

/// Reduces `source` with a [`Reducer`], taking the initial accumulator from
/// [`Reducer::seed()`].
///
/// This is the form to use when no initial accumulator is at hand.
/// The seed is requested exactly once, before the source is driven,
/// even if the source turns out to be empty.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow::Continue;
/// use generic_reduce::{Seeded, from_iter, generic_reduce_seeded};
///
/// let concat = Seeded::with_default(|acc: String, c: char| Continue(acc + &c.to_string()));
/// assert_eq!(generic_reduce_seeded(from_iter("abc".chars()), concat), "abc");
/// ```
#[inline]
pub fn generic_reduce_seeded<S, R>(source: S, mut reducer: R) -> R::Acc
where
    S: Reducible,
    R: Reducer<S::Item>,
{
    let init = reducer.seed();
    trace!("generic_reduce_seeded: driving {}", std::any::type_name::<S>());
    source.reduce(|acc, item| reducer.step(acc, item), init)
}

/// Reduces `source` with a step function that may fail.
///
/// The first `Err` returned by `step` ends the reduction immediately: no further value is
/// handed to `step`, and the error is returned unmodified. There is no partial result.
/// Otherwise this behaves like [`generic_reduce()`], signals included.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow::Continue;
/// use generic_reduce::{from_iter, try_generic_reduce};
///
/// fn parse_sum(input: &[&str]) -> Result<i32, std::num::ParseIntError> {
///     try_generic_reduce(
///         from_iter(input),
///         |acc, s| s.parse::<i32>().map(|n| Continue(acc + n)),
///         0,
///     )
/// }
///
/// assert_eq!(parse_sum(&["1", "2", "3"]), Ok(6));
/// assert!(parse_sum(&["1", "x", "3"]).is_err());
/// ```
pub fn try_generic_reduce<S, A, E, F>(source: S, mut step: F, init: A) -> Result<A, E>
where
    S: Reducible,
    F: FnMut(A, S::Item) -> Result<Step<A>, E>,
{
    // The error rides on the signal that stops the reduction.
    source.reduce(
        |acc: Result<A, E>, item| match acc.and_then(|acc| step(acc, item)) {
            Ok(ControlFlow::Continue(acc)) => ControlFlow::Continue(Ok(acc)),
            Ok(ControlFlow::Break(signal)) => Signal::stop(Ok(signal.into_inner())),
            Err(err) => {
                trace!("try_generic_reduce: step function failed, reduction aborted");
                Signal::stop(Err(err))
            }
        },
        Ok(init),
    )
}

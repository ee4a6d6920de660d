//! The early-termination signal of the reduction protocol.
//!
//! A step function answers every item with a [`Step`]: either
//! [`Continue(acc)`](ControlFlow::Continue) to keep going, or
//! [`Break(signal)`](ControlFlow::Break) carrying a [`Signal`] with the final accumulator.
//! Once a source sees a signal, it calls the step function no more and hands the
//! carried value back as the result of the reduction.

use std::ops::ControlFlow;

/// The result of one invocation of a step function.
pub type Step<A> = ControlFlow<Signal<A>, A>;

/// Marks "stop reduction now", carrying the final accumulator.
///
/// Signals are produced by step functions only. Sources consume them and
/// never produce one themselves.
///
/// # Examples
///
/// ```
/// use generic_reduce::{prelude::*, repeat};
/// use std::ops::ControlFlow::Continue;
///
/// // Stop as soon as the sum reaches 10, even though the source never ends.
/// let sum = repeat(3).reduce(
///     |acc, x| {
///         let acc = acc + x;
///         if acc >= 10 { Signal::stop(acc) } else { Continue(acc) }
///     },
///     0,
/// );
///
/// assert_eq!(sum, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "a signal does nothing unless it is returned from a step function"]
pub struct Signal<A>(A);

impl<A> Signal<A> {
    /// Wraps the final accumulator.
    #[inline]
    pub const fn new(acc: A) -> Self {
        Self(acc)
    }

    /// Wraps `acc` and returns it as a [`Step`] that stops the reduction.
    ///
    /// Shorthand for `ControlFlow::Break(Signal::new(acc))`.
    #[inline]
    pub const fn stop(acc: A) -> Step<A> {
        ControlFlow::Break(Self(acc))
    }

    /// Returns the carried accumulator.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the carried accumulator.
    #[inline]
    pub const fn get(&self) -> &A {
        &self.0
    }
}

/// Wraps a value into a [`Signal`].
#[inline]
pub const fn wrap<A>(acc: A) -> Signal<A> {
    Signal::new(acc)
}

/// Returns `true` if the step result asks the reduction to stop.
///
/// # Examples
///
/// ```
/// use generic_reduce::{Signal, Step, is_signal};
/// use std::ops::ControlFlow;
///
/// let going: Step<i32> = ControlFlow::Continue(1);
/// assert!(!is_signal(&going));
/// assert!(is_signal(&Signal::stop(1)));
/// ```
#[inline]
pub const fn is_signal<A>(step: &Step<A>) -> bool {
    matches!(step, ControlFlow::Break(_))
}

/// Returns the value carried by a signal.
///
/// # Panics
///
/// Panics if `step` is not a signal. Calling this on a plain accumulator is a
/// programming error; check with [`is_signal`] first, or use
/// [`Signal::into_inner`] on the signal itself.
///
/// # Examples
///
/// ```
/// use generic_reduce::{Signal, unwrap};
///
/// assert_eq!(unwrap(Signal::stop("done")), "done");
/// ```
#[inline]
#[track_caller]
pub fn unwrap<A>(step: Step<A>) -> A {
    match step {
        ControlFlow::Break(signal) => signal.into_inner(),
        ControlFlow::Continue(_) => panic!("called `unwrap()` on a step result that is not a signal"),
    }
}

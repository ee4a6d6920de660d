use std::fmt::Debug;

use crate::Step;

/// A step function that can also produce its own initial accumulator.
///
/// Pass one to [`generic_reduce_seeded()`](crate::generic_reduce_seeded) when there is no
/// initial accumulator at hand. [`seed`](Reducer::seed) is called exactly once, before
/// the first [`step`](Reducer::step).
///
/// Closures can only implement one call signature, so the two halves of a reducer built
/// from closures are glued together by [`Seeded`].
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use generic_reduce::{prelude::*, Step, generic_reduce_seeded, repeat_n};
///
/// /// Keeps the largest value seen.
/// struct Largest;
///
/// impl Reducer<i64> for Largest {
///     type Acc = i64;
///
///     fn seed(&mut self) -> i64 {
///         i64::MIN
///     }
///
///     fn step(&mut self, acc: i64, item: i64) -> Step<i64> {
///         ControlFlow::Continue(acc.max(item))
///     }
/// }
///
/// assert_eq!(generic_reduce_seeded(repeat_n(-4, 2), Largest), -4);
/// assert_eq!(generic_reduce_seeded(repeat_n(-4, 0), Largest), i64::MIN);
/// ```
pub trait Reducer<T> {
    /// The accumulator threaded through the reduction.
    type Acc;

    /// Produces the initial accumulator.
    fn seed(&mut self) -> Self::Acc;

    /// Folds one item into the accumulator.
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc>;
}

impl<T, R> Reducer<T> for &mut R
where
    R: Reducer<T> + ?Sized,
{
    type Acc = R::Acc;

    #[inline]
    fn seed(&mut self) -> Self::Acc {
        (**self).seed()
    }

    #[inline]
    fn step(&mut self, acc: Self::Acc, item: T) -> Step<Self::Acc> {
        (**self).step(acc, item)
    }
}

/// A [`Reducer`] made of a seed closure and a step closure.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow::Continue;
/// use generic_reduce::{Seeded, generic_reduce_seeded, repeat_n};
///
/// let product = Seeded::new(|| 1, |acc: u64, x: u64| Continue(acc * x));
/// assert_eq!(generic_reduce_seeded(repeat_n(3, 4), product), 81);
///
/// // `Default::default()` as the seed.
/// let words = Seeded::with_default(|acc: String, s: &str| Continue(acc + s));
/// assert_eq!(generic_reduce_seeded(repeat_n("ab", 2), words), "abab");
/// ```
#[derive(Clone)]
pub struct Seeded<S, F> {
    seed: S,
    step: F,
}

impl<S, F> Seeded<S, F> {
    /// Creates a reducer from a seed closure and a step closure.
    #[inline]
    pub const fn new<A>(seed: S, step: F) -> Self
    where
        S: FnMut() -> A,
    {
        Self { seed, step }
    }
}

impl<A, F> Seeded<fn() -> A, F>
where
    A: Default,
{
    /// Creates a reducer whose seed is [`A::default()`](Default::default).
    #[inline]
    pub fn with_default(step: F) -> Self {
        Self {
            seed: A::default,
            step,
        }
    }
}

impl<A, T, S, F> Reducer<T> for Seeded<S, F>
where
    S: FnMut() -> A,
    F: FnMut(A, T) -> Step<A>,
{
    type Acc = A;

    #[inline]
    fn seed(&mut self) -> A {
        (self.seed)()
    }

    #[inline]
    fn step(&mut self, acc: A, item: T) -> Step<A> {
        (self.step)(acc, item)
    }
}

impl<S, F> Debug for Seeded<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seeded").finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::ops::ControlFlow;

    use super::*;

    #[test]
    fn seed_is_produced_on_demand() {
        let mut calls = 0;
        let mut reducer = Seeded::new(
            || {
                calls += 1;
                10
            },
            |acc: i32, x: i32| ControlFlow::Continue(acc - x),
        );

        assert_eq!(reducer.seed(), 10);
        assert_eq!(reducer.step(10, 3), ControlFlow::Continue(7));
        drop(reducer);
        assert_eq!(calls, 1);
    }
}

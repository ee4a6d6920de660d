use crate::{
    Filter, Filtering, Map, Mapping, Skip, Skipping, Step, Take, TakeWhile, Taking, TakingWhile,
    Transducer, Transformed, assert_reducible,
};

/// A source that knows how to drive a step function over its values.
///
/// This trait requires one method, [`reduce`](Reducible::reduce): feed every value to
/// `step`, threading the accumulator through, until the values are exhausted or `step`
/// returns a [`Signal`](crate::Signal). The source runs the loop on its own stack, so
/// it may be infinite, borrow from elsewhere, or generate values on the fly.
///
/// `reduce` takes `&self`. A source is a description of a stream, not a cursor into one,
/// and reducing it twice yields the same values twice. Any state a reduction needs
/// (counters, flags) belongs to that reduction only.
///
/// # Implementing
///
/// Write the driving loop and stop on the first signal.
/// [`ControlFlow`](std::ops::ControlFlow) implements `Try`, so
/// [`Iterator::try_fold`] works as a driving loop too.
///
/// ```
/// use std::ops::ControlFlow;
/// use generic_reduce::{prelude::*, Step};
///
/// /// Counts down from `start` to 1.
/// struct Countdown {
///     start: u32,
/// }
///
/// impl Reducible for Countdown {
///     type Item = u32;
///
///     fn reduce<A, F>(&self, mut step: F, init: A) -> A
///     where
///         F: FnMut(A, u32) -> Step<A>,
///     {
///         let mut acc = init;
///         for n in (1..=self.start).rev() {
///             match step(acc, n) {
///                 ControlFlow::Continue(next) => acc = next,
///                 ControlFlow::Break(signal) => return signal.into_inner(),
///             }
///         }
///         acc
///     }
/// }
///
/// let countdown = Countdown { start: 5 };
/// let digits = countdown.reduce(|s: String, n| ControlFlow::Continue(s + &n.to_string()), String::new());
/// assert_eq!(digits, "54321");
///
/// // Composes with every transformer.
/// let odd_sum = countdown
///     .filter(|n| n % 2 == 1)
///     .reduce(|acc, n| ControlFlow::Continue(acc + n), 0);
/// assert_eq!(odd_sum, 9);
/// ```
pub trait Reducible {
    /// The type of the values fed to the step function.
    type Item;

    /// Drives `step` over the values of this source, starting from `init`,
    /// and returns the final accumulator.
    ///
    /// The reduction ends when the source is exhausted, returning the last accumulator,
    /// or when `step` returns a signal, returning the value the signal carries.
    /// After a signal, `step` is never called again.
    ///
    /// There is no bound on the number of calls. An unbounded source with a step function
    /// that never signals never returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow::Continue;
    /// use generic_reduce::{prelude::*, repeat_n};
    ///
    /// assert_eq!(repeat_n(2, 3).reduce(|acc, x| Continue(acc * x), 1), 8);
    /// ```
    fn reduce<A, F>(&self, step: F, init: A) -> A
    where
        F: FnMut(A, Self::Item) -> Step<A>;

    /// Creates a source whose values are those of `self` passed through a [`Transducer`].
    ///
    /// The named adaptors ([`map`](Reducible::map), [`filter`](Reducible::filter), ...)
    /// are shorthands for this method with the matching transducer.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow::Continue;
    /// use generic_reduce::{prelude::*, from_iter, mapping, taking};
    ///
    /// let double_then_first_two = mapping(|x: i32| x * 2).compose(taking(2));
    /// let sum = from_iter([1, 2, 3])
    ///     .transform(double_then_first_two)
    ///     .reduce(|acc, x| Continue(acc + x), 0);
    ///
    /// assert_eq!(sum, 6);
    /// ```
    #[inline]
    fn transform<X>(self, transducer: X) -> Transformed<Self, X>
    where
        Self: Sized,
        X: Transducer<Self::Item>,
    {
        assert_reducible(Transformed::new(self, transducer))
    }

    /// Creates a source that calls `f` on every value before handing it on.
    ///
    /// Signals from the downstream step pass through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow::Continue;
    /// use generic_reduce::{prelude::*, repeat_n};
    ///
    /// let lens = repeat_n("abc", 2)
    ///     .map(str::len)
    ///     .reduce(|acc, len| Continue(acc + len), 0);
    ///
    /// assert_eq!(lens, 6);
    /// ```
    #[inline]
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        assert_reducible(Transformed::new(self, Mapping::new(f)))
    }

    /// Creates a source that only hands on values satisfying `pred`.
    ///
    /// A rejected value never reaches the step function and never stops the reduction.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow::Continue;
    /// use generic_reduce::{prelude::*, from_iter};
    ///
    /// let evens = from_iter(1..=6)
    ///     .filter(|x| x % 2 == 0)
    ///     .reduce(|acc, x| Continue(acc + x), 0);
    ///
    /// assert_eq!(evens, 12);
    /// ```
    #[inline]
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        assert_reducible(Transformed::new(self, Filtering::new(pred)))
    }

    /// Creates a source that hands on at most `n` values per reduction.
    ///
    /// The bound is checked before a value is passed on: once `n` values went through,
    /// the next value is not passed on and the reduction stops with the current
    /// accumulator. With `n == 0` the step function is never called.
    ///
    /// Every reduction gets its own counter, so the resulting source can be reduced
    /// any number of times.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow::Continue;
    /// use generic_reduce::{prelude::*, repeat};
    ///
    /// let three = repeat(1).take(3);
    ///
    /// assert_eq!(three.reduce(|acc, x| Continue(acc + x), 0), 3);
    /// // Again, from a fresh counter.
    /// assert_eq!(three.reduce(|acc, x| Continue(acc + x), 0), 3);
    /// ```
    #[inline]
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        assert_reducible(Transformed::new(self, Taking::new(n)))
    }

    /// Creates a source that hands on values while `pred` holds, and stops the
    /// reduction at the first value that fails it.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow::Continue;
    /// use generic_reduce::{prelude::*, from_iter};
    ///
    /// let sum = from_iter([1, 2, 10, 3])
    ///     .take_while(|&x| x < 5)
    ///     .reduce(|acc, x| Continue(acc + x), 0);
    ///
    /// assert_eq!(sum, 3);
    /// ```
    #[inline]
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        assert_reducible(Transformed::new(self, TakingWhile::new(pred)))
    }

    /// Creates a source that drops the first `n` values of every reduction.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow::Continue;
    /// use generic_reduce::{prelude::*, from_iter};
    ///
    /// let tail = from_iter([1, 2, 3, 4])
    ///     .skip(2)
    ///     .reduce(|acc, x| Continue(acc + x), 0);
    ///
    /// assert_eq!(tail, 7);
    /// ```
    #[inline]
    fn skip(self, n: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        assert_reducible(Transformed::new(self, Skipping::new(n)))
    }

    /// Borrows this source, so that adaptors can be stacked on it without
    /// giving it up.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow::Continue;
    /// use generic_reduce::{prelude::*, from_iter};
    ///
    /// let nums = from_iter([1, 2, 3]);
    /// let doubled = nums.by_ref().map(|x| x * 2).reduce(|acc, x| Continue(acc + x), 0);
    /// let plain = nums.reduce(|acc, x| Continue(acc + x), 0);
    ///
    /// assert_eq!((doubled, plain), (12, 6));
    /// ```
    #[inline]
    fn by_ref(&self) -> &Self
    where
        Self: Sized,
    {
        self
    }
}

impl<R> Reducible for &R
where
    R: Reducible + ?Sized,
{
    type Item = R::Item;

    #[inline]
    fn reduce<A, F>(&self, step: F, init: A) -> A
    where
        F: FnMut(A, Self::Item) -> Step<A>,
    {
        (**self).reduce(step, init)
    }
}

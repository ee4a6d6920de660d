use crate::{Compose, Step, assert_transducer};

/// Adapts a step function without touching iteration.
///
/// A transducer turns a step function over [`Output`](Transducer::Output) values into a
/// step function over `T` values. Applied to a source with
/// [`Reducible::transform()`](crate::Reducible::transform), it yields a new source that
/// delegates iteration to the old one, handing it the adapted step function.
/// No container is built between the stages; each value flows through the nested
/// closures one at a time.
///
/// [`transform`](Transducer::transform) is called once per reduction. State the adapted
/// step function needs (like the counter of [`taking()`](crate::taking)) is created
/// inside that call, so it is never shared between two reductions.
///
/// # Examples
///
/// A transducer that hands on every value twice:
///
/// ```
/// use std::ops::ControlFlow::Continue;
/// use generic_reduce::{prelude::*, Step, from_iter};
///
/// struct Doubling;
///
/// impl<T: Clone> Transducer<T> for Doubling {
///     type Output = T;
///
///     fn transform<A, F>(&self, mut step: F) -> impl FnMut(A, T) -> Step<A>
///     where
///         F: FnMut(A, T) -> Step<A>,
///     {
///         move |acc: A, item: T| {
///             let acc = step(acc, item.clone())?;
///             step(acc, item)
///         }
///     }
/// }
///
/// let nums = from_iter([1, 2]).transform(Doubling);
/// assert_eq!(nums.reduce(|acc, x| Continue(acc * 10 + x), 0), 1122);
/// ```
pub trait Transducer<T> {
    /// The type of the values handed to the downstream step function.
    type Output;

    /// Adapts `step`, a step function over [`Output`](Transducer::Output) values,
    /// into a step function over `T` values.
    ///
    /// Signals returned by `step` must be passed back unchanged.
    /// The adapted function may also produce its own signal to stop the reduction
    /// early.
    fn transform<A, F>(&self, step: F) -> impl FnMut(A, T) -> Step<A>
    where
        F: FnMut(A, Self::Output) -> Step<A>;

    /// Chains two transducers. Values pass through `self` first, then through `other`.
    ///
    /// The result does not depend on any source, and can be applied to many.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow::Continue;
    /// use generic_reduce::{prelude::*, filtering, from_iter, mapping, repeat};
    ///
    /// let odd_squares = mapping(|x: u32| x * x).compose(filtering(|x: &u32| x % 2 == 1));
    ///
    /// let sum = from_iter(1..=4)
    ///     .transform(&odd_squares)
    ///     .reduce(|acc, x| Continue(acc + x), 0);
    /// assert_eq!(sum, 10);
    ///
    /// let sum = repeat(3)
    ///     .transform(&odd_squares)
    ///     .take(2)
    ///     .reduce(|acc, x| Continue(acc + x), 0);
    /// assert_eq!(sum, 18);
    /// ```
    #[inline]
    fn compose<X>(self, other: X) -> Compose<Self, X>
    where
        Self: Sized,
        X: Transducer<Self::Output>,
    {
        assert_transducer(Compose::new(self, other))
    }
}

impl<T, X> Transducer<T> for &X
where
    X: Transducer<T> + ?Sized,
{
    type Output = X::Output;

    #[inline]
    fn transform<A, F>(&self, step: F) -> impl FnMut(A, T) -> Step<A>
    where
        F: FnMut(A, Self::Output) -> Step<A>,
    {
        (**self).transform(step)
    }
}

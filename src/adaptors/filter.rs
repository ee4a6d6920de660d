use std::{fmt::Debug, ops::ControlFlow};

use crate::{Reducible, Step, Transducer, Transformed, assert_reducible, assert_transducer};

/// A source that only hands on the values of another source satisfying a predicate.
///
/// This `type` is created by [`Reducible::filter()`] and [`filter()`]. See their documentation for more.
pub type Filter<S, P> = Transformed<S, Filtering<P>>;

/// A [`Transducer`] that drops values failing a predicate.
///
/// This `struct` is created by [`filtering()`].
#[derive(Clone)]
pub struct Filtering<P> {
    pred: P,
}

impl<P> Filtering<P> {
    #[inline]
    pub(crate) const fn new(pred: P) -> Self {
        Self { pred }
    }
}

impl<T, P> Transducer<T> for Filtering<P>
where
    P: Fn(&T) -> bool,
{
    type Output = T;

    #[inline]
    fn transform<A, F>(&self, mut step: F) -> impl FnMut(A, T) -> Step<A>
    where
        F: FnMut(A, T) -> Step<A>,
    {
        move |acc: A, item: T| {
            if (self.pred)(&item) {
                step(acc, item)
            } else {
                ControlFlow::Continue(acc)
            }
        }
    }
}

impl<P> Debug for Filtering<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filtering").finish_non_exhaustive()
    }
}

/// Creates a [`Transducer`] that only hands on values satisfying `pred`.
#[inline]
pub fn filtering<T, P>(pred: P) -> Filtering<P>
where
    P: Fn(&T) -> bool,
{
    assert_transducer::<_, T>(Filtering::new(pred))
}

/// Creates a source that only hands on the values of `source` satisfying `pred`.
///
/// Equivalent to [`source.filter(pred)`](Reducible::filter).
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow::Continue;
/// use generic_reduce::{filter, from_iter, generic_reduce};
///
/// let sum = generic_reduce(filter(|x| x % 3 == 0, from_iter(1..=9)), |acc, x| Continue(acc + x), 0);
/// assert_eq!(sum, 18);
/// ```
#[inline]
pub fn filter<S, P>(pred: P, source: S) -> Filter<S, P>
where
    S: Reducible,
    P: Fn(&S::Item) -> bool,
{
    assert_reducible(Transformed::new(source, Filtering::new(pred)))
}

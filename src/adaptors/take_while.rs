use std::fmt::Debug;

use crate::{Signal, Step, Transducer, Transformed, assert_transducer};

/// A source that hands on values of another source while a predicate holds.
///
/// This `type` is created by [`Reducible::take_while()`](crate::Reducible::take_while).
/// See its documentation for more.
pub type TakeWhile<S, P> = Transformed<S, TakingWhile<P>>;

/// A [`Transducer`] that stops the reduction at the first value failing a predicate.
///
/// The failing value is not handed on.
///
/// This `struct` is created by [`taking_while()`].
#[derive(Clone)]
pub struct TakingWhile<P> {
    pred: P,
}

impl<P> TakingWhile<P> {
    #[inline]
    pub(crate) const fn new(pred: P) -> Self {
        Self { pred }
    }
}

impl<T, P> Transducer<T> for TakingWhile<P>
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
                Signal::stop(acc)
            }
        }
    }
}

impl<P> Debug for TakingWhile<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakingWhile").finish_non_exhaustive()
    }
}

/// Creates a [`Transducer`] that hands on values while `pred` holds.
#[inline]
pub fn taking_while<T, P>(pred: P) -> TakingWhile<P>
where
    P: Fn(&T) -> bool,
{
    assert_transducer::<_, T>(TakingWhile::new(pred))
}

use crate::{Reducible, Signal, Step, Transducer, Transformed, assert_reducible, assert_transducer};

/// A source that hands on at most `n` values of another source per reduction.
///
/// This `type` is created by [`Reducible::take()`] and [`take()`]. See their documentation for more.
pub type Take<S> = Transformed<S, Taking>;

/// A [`Transducer`] that stops the reduction once `n` values went through.
///
/// This `struct` is created by [`taking()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Taking {
    n: usize,
}

impl Taking {
    #[inline]
    pub(crate) const fn new(n: usize) -> Self {
        Self { n }
    }
}

impl<T> Transducer<T> for Taking {
    type Output = T;

    #[inline]
    fn transform<A, F>(&self, mut step: F) -> impl FnMut(A, T) -> Step<A>
    where
        F: FnMut(A, T) -> Step<A>,
    {
        // Owned by this reduction's step function only.
        let mut remaining = self.n;

        move |acc: A, item: T| {
            // Checked before the item is consumed. `take(0)` must not let anything through.
            if remaining == 0 {
                return Signal::stop(acc);
            }

            remaining -= 1;
            step(acc, item)
        }
    }
}

/// Creates a [`Transducer`] that lets at most `n` values through per reduction.
#[inline]
pub const fn taking(n: usize) -> Taking {
    assert_transducer::<_, ()>(Taking::new(n))
}

/// Creates a source that hands on at most `n` values of `source` per reduction.
///
/// Equivalent to [`source.take(n)`](Reducible::take).
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow::Continue;
/// use generic_reduce::{generic_reduce, repeat, take};
///
/// assert_eq!(generic_reduce(take(3, repeat(1)), |acc, x| Continue(acc + x), 0), 3);
/// assert_eq!(generic_reduce(take(0, repeat(1)), |acc, x| Continue(acc + x), 7), 7);
/// ```
#[inline]
pub fn take<S>(n: usize, source: S) -> Take<S>
where
    S: Reducible,
{
    assert_reducible(Transformed::new(source, Taking::new(n)))
}

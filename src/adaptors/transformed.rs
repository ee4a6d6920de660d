use crate::{Reducible, Step, Transducer};

/// A source whose values are those of another source passed through a [`Transducer`].
///
/// This `struct` is created by [`Reducible::transform()`] and the named adaptors built on
/// it. See their documentation for more.
#[derive(Debug, Clone)]
pub struct Transformed<S, X> {
    source: S,
    transducer: X,
}

impl<S, X> Transformed<S, X> {
    #[inline]
    pub(crate) const fn new(source: S, transducer: X) -> Self {
        Self { source, transducer }
    }
}

impl<S, X> Reducible for Transformed<S, X>
where
    S: Reducible,
    X: Transducer<S::Item>,
{
    type Item = X::Output;

    #[inline]
    fn reduce<A, F>(&self, step: F, init: A) -> A
    where
        F: FnMut(A, Self::Item) -> Step<A>,
    {
        // A fresh adapted step per call keeps per-reduction state out of `self`.
        self.source.reduce(self.transducer.transform(step), init)
    }
}

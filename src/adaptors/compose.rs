use crate::{Step, Transducer};

/// A [`Transducer`] that chains two transducers.
///
/// This `struct` is created by [`Transducer::compose()`]. See its documentation for more.
#[derive(Debug, Clone, Copy)]
pub struct Compose<X1, X2> {
    first: X1,
    second: X2,
}

impl<X1, X2> Compose<X1, X2> {
    #[inline]
    pub(crate) const fn new(first: X1, second: X2) -> Self {
        Self { first, second }
    }
}

impl<T, X1, X2> Transducer<T> for Compose<X1, X2>
where
    X1: Transducer<T>,
    X2: Transducer<X1::Output>,
{
    type Output = X2::Output;

    #[inline]
    fn transform<A, F>(&self, step: F) -> impl FnMut(A, T) -> Step<A>
    where
        F: FnMut(A, Self::Output) -> Step<A>,
    {
        // The outermost adapter sees the value first.
        self.first.transform(self.second.transform(step))
    }
}

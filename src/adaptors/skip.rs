use std::ops::ControlFlow;

use crate::{Step, Transducer, Transformed, assert_transducer};

/// A source that drops the first `n` values of another source in every reduction.
///
/// This `type` is created by [`Reducible::skip()`](crate::Reducible::skip).
/// See its documentation for more.
pub type Skip<S> = Transformed<S, Skipping>;

/// A [`Transducer`] that drops the first `n` values of every reduction.
///
/// This `struct` is created by [`skipping()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skipping {
    n: usize,
}

impl Skipping {
    #[inline]
    pub(crate) const fn new(n: usize) -> Self {
        Self { n }
    }
}

impl<T> Transducer<T> for Skipping {
    type Output = T;

    #[inline]
    fn transform<A, F>(&self, mut step: F) -> impl FnMut(A, T) -> Step<A>
    where
        F: FnMut(A, T) -> Step<A>,
    {
        let mut remaining = self.n;

        move |acc: A, item: T| {
            if remaining == 0 {
                step(acc, item)
            } else {
                remaining -= 1;
                ControlFlow::Continue(acc)
            }
        }
    }
}

/// Creates a [`Transducer`] that drops the first `n` values of every reduction.
#[inline]
pub const fn skipping(n: usize) -> Skipping {
    assert_transducer::<_, ()>(Skipping::new(n))
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use std::ops::ControlFlow::Continue;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::prelude::*;
    use crate::test_utils::check_source;
    use crate::{from_iter, repeat_n};

    proptest! {
        #[test]
        fn all_reduce_paths(
            nums in propvec(any::<i32>(), ..=20),
            skip_count in ..=25_usize,
        ) {
            let expected: Vec<_> = nums.iter().copied().skip(skip_count).collect();
            check_source(&from_iter(nums).skip(skip_count), &expected)?;
        }
    }

    #[test]
    fn skip_then_take() {
        // 0 1 [2 3 4] 5 ...
        let source = from_iter(0..).skip(2).take(3);
        assert_eq!(source.reduce(|acc, x| Continue(acc + x), 0), 9);
        assert_eq!(source.reduce(|acc, x| Continue(acc + x), 0), 9);
    }

    #[test]
    fn skipping_everything() {
        assert_eq!(repeat_n(1, 3).skip(3).reduce(|acc, x| Continue(acc + x), 0), 0);
    }
}

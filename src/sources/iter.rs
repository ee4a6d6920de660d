use std::ops::ControlFlow;

use crate::{Reducible, Step, assert_reducible};

/// A source backed by an ordinary [`Iterator`].
///
/// This `struct` is created by [`from_iter()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Iter<I> {
    iterable: I,
}

impl<I> Reducible for Iter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    #[inline]
    fn reduce<A, F>(&self, step: F, init: A) -> A
    where
        F: FnMut(A, Self::Item) -> Step<A>,
    {
        // `try_fold` instead of a `for` loop, since adaptors like `chain` and `skip`
        // drive themselves faster internally.
        match self.iterable.clone().into_iter().try_fold(init, step) {
            ControlFlow::Continue(acc) => acc,
            ControlFlow::Break(signal) => {
                trace!("iter: stopped by a signal");
                signal.into_inner()
            }
        }
    }
}

/// Creates a source from anything that can be iterated over.
///
/// Every reduction iterates over a fresh clone of `iterable`, so the source can
/// be reduced many times. Cloning is cheap for most iterators and for references
/// to collections. Prefer `from_iter(&vec)` or `from_iter(vec.iter().copied())` over
/// `from_iter(vec)` when the collection is large.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow::Continue;
/// use generic_reduce::{prelude::*, from_iter};
///
/// let words = ["hello", "reducible", "world"];
/// let longest = from_iter(&words)
///     .map(|w| w.len())
///     .reduce(|acc, len| Continue(acc.max(len)), 0);
///
/// assert_eq!(longest, 9);
/// ```
#[inline]
pub fn from_iter<I>(iterable: I) -> Iter<I>
where
    I: IntoIterator + Clone,
{
    assert_reducible(Iter { iterable })
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use std::ops::ControlFlow::Continue;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::test_utils::{check_source, stop_after};

    use super::*;

    proptest! {
        #[test]
        fn all_reduce_paths(nums in propvec(any::<i32>(), ..100)) {
            check_source(&from_iter(nums.clone()), &nums)?;
            check_source(&from_iter(nums.iter().copied()), &nums)?;
        }

        #[test]
        fn stops_without_draining(k in 1..50_usize) {
            // Unbounded ranges end only because of the signal.
            let got = stop_after(&from_iter(0_u64..), k);
            prop_assert_eq!(got, (0..k as u64).collect::<Vec<_>>());
        }
    }

    #[test]
    fn borrowed_collection() {
        let names = vec![String::from("a"), String::from("bc")];
        let total = from_iter(&names).reduce(|acc, s: &String| Continue(acc + s.len()), 0);

        assert_eq!(total, 3);
        assert_eq!(names.len(), 2);
    }
}

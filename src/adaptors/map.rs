use std::fmt::Debug;

use crate::{Reducible, Step, Transducer, Transformed, assert_reducible, assert_transducer};

/// A source that calls a closure on each value of another source.
///
/// This `type` is created by [`Reducible::map()`] and [`map()`]. See their documentation for more.
pub type Map<S, F> = Transformed<S, Mapping<F>>;

/// A [`Transducer`] that calls a closure on each value before handing it on.
///
/// This `struct` is created by [`mapping()`].
#[derive(Clone)]
pub struct Mapping<F> {
    f: F,
}

impl<F> Mapping<F> {
    #[inline]
    pub(crate) const fn new(f: F) -> Self {
        Self { f }
    }
}

impl<T, U, F> Transducer<T> for Mapping<F>
where
    F: Fn(T) -> U,
{
    type Output = U;

    #[inline]
    fn transform<A, G>(&self, mut step: G) -> impl FnMut(A, T) -> Step<A>
    where
        G: FnMut(A, U) -> Step<A>,
    {
        move |acc: A, item: T| step(acc, (self.f)(item))
    }
}

impl<F> Debug for Mapping<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapping").finish_non_exhaustive()
    }
}

/// Creates a [`Transducer`] that calls `f` on each value.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow::Continue;
/// use generic_reduce::{prelude::*, mapping, repeat_n};
///
/// let len = mapping(|s: &str| s.len());
/// let total = repeat_n("four", 3).transform(len).reduce(|acc, n| Continue(acc + n), 0);
///
/// assert_eq!(total, 12);
/// ```
#[inline]
pub fn mapping<T, U, F>(f: F) -> Mapping<F>
where
    F: Fn(T) -> U,
{
    assert_transducer::<_, T>(Mapping::new(f))
}

/// Creates a source that calls `f` on each value of `source`.
///
/// Equivalent to [`source.map(f)`](Reducible::map).
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow::Continue;
/// use generic_reduce::{generic_reduce, map, repeat_n};
///
/// let sum = generic_reduce(map(|x| x * 10, repeat_n(1, 3)), |acc, x| Continue(acc + x), 0);
/// assert_eq!(sum, 30);
/// ```
#[inline]
pub fn map<S, F, U>(f: F, source: S) -> Map<S, F>
where
    S: Reducible,
    F: Fn(S::Item) -> U,
{
    assert_reducible(Transformed::new(source, Mapping::new(f)))
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use std::ops::ControlFlow::{self, Continue};

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::prelude::*;
    use crate::test_utils::check_source;
    use crate::{Signal, from_iter, generic_reduce, repeat};

    use super::*;

    proptest! {
        #[test]
        fn same_as_mapping_inside_the_step(
            nums in propvec(any::<i32>(), ..100),
            init in any::<i64>(),
        ) {
            let g = |x: i32| i64::from(x) * 3;
            let f = |acc: i64, x: i64| Continue(acc.wrapping_sub(x));

            let mapped = generic_reduce(map(g, from_iter(nums.clone())), f, init);
            let fused = generic_reduce(from_iter(nums.clone()), |acc, x| f(acc, g(x)), init);

            prop_assert_eq!(mapped, fused);
        }

        #[test]
        fn all_reduce_paths(nums in propvec(any::<i16>(), ..50)) {
            let expected: Vec<_> = nums.iter().map(|&x| i32::from(x) - 1).collect();
            check_source(&from_iter(nums).map(|x| i32::from(x) - 1), &expected)?;
        }
    }

    #[test]
    fn signal_passes_through() {
        let seen = repeat(2)
            .map(|x| x * x)
            .reduce(|acc: Vec<i32>, x| {
                let mut acc = acc;
                acc.push(x);
                if acc.len() == 3 { Signal::stop(acc) } else { ControlFlow::Continue(acc) }
            }, vec![]);

        assert_eq!(seen, [4, 4, 4]);
    }
}

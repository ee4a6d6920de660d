//! A reduction protocol: fold any stream of values into one accumulator through a
//! composable pipeline of transformations, with no intermediate container between the
//! stages and a way for the step function to stop the stream early.
//!
//! If [`Iterator`] lets the *consumer* pull values one at a time, a [`Reducible`]
//! source *pushes* its values into a step function, on its own call stack,
//! until it runs out or the step function says "stop".
//!
//! # The protocol
//!
//! There are three roles:
//!
//! - A **step function** folds one value into the accumulator:
//!   `FnMut(A, T) -> Step<A>`. It returns [`Continue(acc)`](std::ops::ControlFlow::Continue)
//!   to go on, or a [`Signal`] (via [`Signal::stop`]) carrying the final accumulator.
//! - A **source** ([`Reducible`]) drives a step function over its values.
//! - A **transformer** ([`Transducer`]) adapts a step function without touching
//!   iteration. Applied to a source, it gives a new source.
//!
//! [`generic_reduce()`] runs the whole thing and returns the final accumulator.
//!
//! ```
//! use std::ops::ControlFlow::Continue;
//! use generic_reduce::{prelude::*, generic_reduce, repeat};
//!
//! // An endless stream of ones, each incremented, kept if even, and only three of them.
//! let source = repeat(1)
//!     .map(|x| x + 1)
//!     .filter(|x| x % 2 == 0)
//!     .take(3);
//!
//! assert_eq!(generic_reduce(&source, |acc, x| Continue(acc + x), 0), 6);
//! // A source is a description, not a cursor. Reduce it again.
//! assert_eq!(generic_reduce(&source, |acc, x| Continue(acc * x), 1), 8);
//! ```
//!
//! Nothing is buffered: each value travels through `map`, `filter` and `take`
//! as nested function calls, then lands in the step function.
//!
//! # Early exit
//!
//! A step function stops a reduction by returning a [`Signal`]. The source stops
//! right away, however long (or endless) it is, and the signal's value becomes
//! the result.
//!
//! ```
//! use std::ops::ControlFlow::Continue;
//! use generic_reduce::{Signal, from_iter, generic_reduce, repeat};
//!
//! let first_over_ten = |acc: Option<u32>, x: u32| {
//!     if x > 10 { Signal::stop(Some(x)) } else { Continue(acc) }
//! };
//!
//! assert_eq!(generic_reduce(from_iter([3, 14, 15]), first_over_ten, None), Some(14));
//! assert_eq!(generic_reduce(repeat(11), first_over_ten, None), Some(11));
//! ```
//!
//! Adaptors use the same mechanism: [`take()`](Reducible::take) signals once its quota
//! is met, [`take_while()`](Reducible::take_while) when its predicate fails.
//!
//! # Hazards
//!
//! Nothing bounds a reduction. An unbounded source such as [`repeat()`] with a step
//! function that never signals loops forever.
//!
//! # Features
//!
//! - `std` (default): links the standard library. Without it, the crate is `no_std`
//!   and needs no allocator.
//! - `log`: emits `trace`-level records through the [`log`](https://docs.rs/log) crate
//!   when a reduction starts and when a signal cuts a source short.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate core as std;

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::log::trace!($($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

mod adaptors;
mod driver;
pub mod prelude;
mod signal;
mod sources;
#[cfg(all(test, feature = "std"))]
mod test_utils;
mod traits;

pub use adaptors::*;
pub use driver::*;
pub use signal::*;
pub use sources::*;
pub use traits::*;

#[inline(always)]
const fn assert_reducible<S: Reducible>(source: S) -> S {
    source
}

#[inline(always)]
const fn assert_transducer<X: Transducer<T>, T>(transducer: X) -> X {
    transducer
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::ops::ControlFlow::Continue;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::prelude::*;
    use crate::test_utils::stop_after;
    use crate::{filter, from_iter, generic_reduce, map, repeat, take};

    #[test]
    fn pipeline_over_unbounded_source() {
        let source = take(3, filter(|x| x % 2 == 0, map(|x| x + 1, repeat(1))));
        assert_eq!(generic_reduce(&source, |acc, x| Continue(acc + x), 0), 6);
        assert_eq!(generic_reduce(&source, |acc, x| Continue(acc + x), 0), 6);
    }

    #[test]
    fn adaptor_order_matters() {
        // take then filter: 1 2 3 -> 2
        let a = from_iter(1..).take(3).filter(|x| x % 2 == 0);
        // filter then take: 2 4 6
        let b = from_iter(1..).filter(|x| x % 2 == 0).take(3);

        assert_eq!(a.reduce(|acc, x| Continue(acc + x), 0), 2);
        assert_eq!(b.reduce(|acc, x| Continue(acc + x), 0), 12);
    }

    proptest! {
        #[test]
        fn early_exit_through_a_pipeline(
            nums in propvec(any::<i32>(), 1..50),
            k in 1..50_usize,
        ) {
            let k = k.min(nums.len());
            let finite = from_iter(nums.clone()).map(|x| x.wrapping_mul(2));
            let unbounded = from_iter(nums.clone().into_iter().cycle()).map(|x| x.wrapping_mul(2));

            prop_assert_eq!(stop_after(&finite, k), stop_after(&unbounded, k));
        }
    }
}

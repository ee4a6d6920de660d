//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, bringing the
//! adaptor methods of [`Reducible`] and [`Transducer`] into scope.
//!
//! # Example
//!
//! ```
//! use generic_reduce::prelude::*;
//! ```

pub use crate::traits::*;
pub use crate::{Signal, Step};

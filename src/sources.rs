mod iter;
mod repeat;

pub use iter::*;
pub use repeat::*;

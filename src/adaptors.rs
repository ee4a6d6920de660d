mod compose;
mod filter;
mod map;
mod skip;
mod take;
mod take_while;
mod transformed;

pub use compose::*;
pub use filter::*;
pub use map::*;
pub use skip::*;
pub use take::*;
pub use take_while::*;
pub use transformed::*;

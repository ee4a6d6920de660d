mod reducer;
mod reducible;
mod transducer;

pub use reducer::*;
pub use reducible::*;
pub use transducer::*;

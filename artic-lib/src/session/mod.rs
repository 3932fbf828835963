//! Table session: the page currently shown plus the durable selection.

mod sequence;
mod table;

pub use sequence::*;
pub use table::*;

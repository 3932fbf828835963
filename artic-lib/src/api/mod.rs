//! Page fetching API

mod artworks;
mod page;
mod source;

pub use artworks::*;
pub use page::*;
pub use source::*;

//! Typed models

mod artwork;
pub mod display;
mod identified;

pub use artwork::*;
pub use identified::*;

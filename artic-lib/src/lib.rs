//! Art Institute of Chicago artworks table library
//!
//! Fetches the public artworks collection one page at a time and keeps a row
//! selection that survives page navigation.

pub mod api;
pub mod error;
pub mod model;
pub mod selection;
pub mod session;

mod client;

pub use client::*;

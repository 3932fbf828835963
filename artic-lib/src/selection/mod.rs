//! Cross-page row selection.
//!
//! The selection outlives any single page: [`SelectionManager`] keeps every
//! selected record by id and only ever reconciles against the page it is given,
//! so edits made while one page is visible never disturb selections that belong
//! to other pages.

mod manager;
mod set;

pub use manager::*;
pub use set::*;

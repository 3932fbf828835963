//! Stable record identity

use std::fmt::Debug;
use std::hash::Hash;

/// A record that carries a stable, unique identifier.
///
/// Identity is decided by [`Identified::id`] alone. Two values with the same
/// id are the same logical item, even if their other fields differ because they
/// were fetched at different times.
pub trait Identified {
    /// The identifier type.
    type Id: Copy + Eq + Hash + Debug;

    /// Returns the record's identifier.
    fn id(&self) -> Self::Id;
}

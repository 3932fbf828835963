//! Validation error types

/// A page request rejected before it was sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Page indices are 1-based.
    #[error("invalid page index {0}: pages start at 1")]
    InvalidPage(u32),

    /// A page must hold at least one record.
    #[error("page size must be at least 1")]
    ZeroPageSize,

    /// The page size is not one of the sizes the table offers.
    #[error("unsupported page size {size}: expected one of {allowed:?}")]
    UnsupportedPageSize {
        /// The rejected size.
        size: u32,
        /// The accepted sizes.
        allowed: &'static [u32],
    },
}

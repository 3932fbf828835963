//! Error types

mod api;
mod validation;

pub use api::*;
pub use validation::*;

/// Top-level error returned by fallible library operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request reached the network layer and failed there or remotely.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request was rejected locally before being sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Returns `true` if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(e) => e.is_retryable(),
            Self::Validation(_) => false,
        }
    }
}

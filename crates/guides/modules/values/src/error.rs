//! Error type shared by the guide crates.

use thiserror::Error;

/// Result alias defaulting to [`GuideError`].
pub type Result<T, E = GuideError> = core::result::Result<T, E>;

/// Contract violations detected while normalizing guide inputs.
///
/// Absent values, negative numbers and empty fragment lists are all valid input;
/// this error only reports arguments no sensible default exists for.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GuideError {
    /// An argument outside the domain of the operation, e.g. a grid unit of zero
    /// or a padding tuple with three entries.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl GuideError {
    /// Build an [`GuideError::InvalidArgument`] from any displayable message.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

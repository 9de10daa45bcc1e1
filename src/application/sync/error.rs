// SPDX-License-Identifier: MPL-2.0
use crate::application::port::FetchError;
use crate::application::validation::ValidationError;
use thiserror::Error;

/// Outcome of a failed list operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Rejected before any network activity.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    /// The remote call failed; local state is unchanged.
    #[error("request failed: {0}")]
    Fetch(#[from] FetchError),
    /// A favorite toggle is already in flight.
    #[error("another favorite toggle is still in flight")]
    Busy,
    /// Anything not classified above.
    #[error("unexpected failure: {0}")]
    Unknown(String),
}

impl SyncError {
    /// Returns `true` if the failure happened before any network call.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, SyncError::Validation(_))
    }
}

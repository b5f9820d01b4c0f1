//! Authentication error types.

use thiserror::Error;

use crate::api::ApiError;
use crate::storage::StorageError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The mock API rejected the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Accepted email failed to parse (should not happen after API acceptance).
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] maison_core::EmailError),

    /// Session could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

//! Error taxonomy for domain operations.

use crate::storage::StoreError;
use thiserror::Error;

/// Why a domain call was refused or failed.
///
/// `Validation` and `Forbidden` are raised before any store call is made;
/// `Store` carries an underlying store failure. Nothing is retried and
/// none of these are fatal to the application.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required field was missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The acting user is signed out, lacks the required role, or tried
    /// to change their own role.
    #[error("{0}")]
    Forbidden(String),

    /// The record store rejected or failed the call.
    #[error(transparent)]
    Store(#[from] StoreError),
}

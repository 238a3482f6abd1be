//! Desk error types

use thiserror::Error;

/// Error type for dashboard core operations
#[derive(Debug, Error)]
pub enum DeskError {
    /// API client failure
    #[error("Client error: {0}")]
    Client(#[from] partner_client::ClientError),

    /// Local store failure
    #[error("Store error: {0}")]
    Store(#[from] crate::store::StoreError),
}

/// Result type for desk operations
pub type DeskResult<T> = Result<T, DeskError>;

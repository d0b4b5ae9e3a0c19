//! Read-state persistence port.

use crate::area::domain::{AreaName, MessageId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for read-state persistence operations.
pub type ReadStateResult<T> = Result<T, ReadStateError>;

/// Storage for per-user, per-area read watermarks.
///
/// The contract is deliberately minimal: a plain read and an unconditional
/// overwrite. The "only move forward" rule lives in
/// [`ReadStateStore`](crate::area::services::ReadStateStore).
#[async_trait]
pub trait ReadStateRepository: Send + Sync {
    /// Returns the stored watermark, or `None` when the pair has no row.
    ///
    /// # Errors
    ///
    /// Returns [`ReadStateError::Persistence`] when the lookup fails for any
    /// reason other than a missing row.
    async fn get(&self, user: UserId, area: &AreaName) -> ReadStateResult<Option<MessageId>>;

    /// Inserts or overwrites the watermark for the pair.
    ///
    /// # Errors
    ///
    /// Returns [`ReadStateError::Persistence`] when the write fails.
    async fn set(&self, user: UserId, area: &AreaName, last_read: MessageId)
    -> ReadStateResult<()>;
}

/// Errors returned by read-state repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ReadStateError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ReadStateError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

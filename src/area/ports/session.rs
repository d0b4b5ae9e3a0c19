//! Identity/session store port.

use crate::area::domain::{AreaName, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for session store operations.
pub type SessionStoreResult<T> = Result<T, SessionStoreError>;

/// Per-user session properties touched by area switching.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Records `area` as the user's current message area.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Persistence`] when the write fails.
    async fn persist_current_area(&self, user: UserId, area: &AreaName)
    -> SessionStoreResult<()>;

    /// Returns the user's persisted current area, if one was ever stored.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Persistence`] when the lookup fails.
    async fn current_area(&self, user: UserId) -> SessionStoreResult<Option<AreaName>>;
}

/// Errors returned by session store implementations.
#[derive(Debug, Clone, Error)]
pub enum SessionStoreError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SessionStoreError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

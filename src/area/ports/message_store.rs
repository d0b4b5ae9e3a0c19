//! Message storage port used by area listings.

use crate::area::domain::{AreaName, MessageId, MessageSummary, UserId};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message storage operations.
pub type MessageStoreResult<T> = Result<T, MessageStoreError>;

/// A single listing row: either a decoded summary or the reason it could not
/// be decoded.
///
/// Decode failures are scoped to the row so one bad record never hides the
/// rest of a listing.
pub type SummaryRow = Result<MessageSummary, MessageRowError>;

/// Read-only access to stored message summaries.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Returns every row tagged with `area`, ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Persistence`] when the query fails as a
    /// whole.
    async fn list_for_area(&self, area: &AreaName) -> MessageStoreResult<Vec<SummaryRow>>;

    /// Returns rows tagged with `area` whose id is strictly greater than
    /// `after`, ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Persistence`] when the query fails as a
    /// whole.
    async fn list_for_area_after(
        &self,
        area: &AreaName,
        after: MessageId,
    ) -> MessageStoreResult<Vec<SummaryRow>>;

    /// Returns the subset of `candidates` privately addressed to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Persistence`] when the linkage lookup
    /// fails.
    async fn recipient_message_ids(
        &self,
        recipient: UserId,
        candidates: &[MessageId],
    ) -> MessageStoreResult<BTreeSet<MessageId>>;
}

/// Errors returned by message storage implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// A stored message row that could not be turned into a [`MessageSummary`].
#[derive(Debug, Clone, Error)]
#[error("unreadable message row {row_id}: {cause}")]
pub struct MessageRowError {
    row_id: i64,
    cause: Arc<dyn std::error::Error + Send + Sync>,
}

impl MessageRowError {
    /// Records why the row with raw id `row_id` failed to decode.
    pub fn new(row_id: i64, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            row_id,
            cause: Arc::new(cause),
        }
    }

    /// Returns the raw storage id of the unreadable row.
    #[must_use]
    pub const fn row_id(&self) -> i64 {
        self.row_id
    }
}

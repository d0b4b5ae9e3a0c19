//! Full and delta message listings for an area.
//!
//! Provides [`MessageFeed`]. Unreadable rows are logged and dropped so that
//! one bad record never hides the rest of a listing. In the private area the
//! delta feed only contains messages linked to the requesting user.

use super::ReadStateStore;
use crate::area::{
    domain::{AreaName, MessageId, MessageSummary, UserId},
    ports::{MessageStore, MessageStoreError, ReadStateRepository, SummaryRow},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned by message feed operations.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The message store query failed as a whole.
    #[error(transparent)]
    Store(#[from] MessageStoreError),
}

/// Result type for message feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Produces ordered message listings for areas.
pub struct MessageFeed<M, R>
where
    M: MessageStore,
    R: ReadStateRepository,
{
    messages: Arc<M>,
    read_state: ReadStateStore<R>,
}

impl<M, R> Clone for MessageFeed<M, R>
where
    M: MessageStore,
    R: ReadStateRepository,
{
    fn clone(&self) -> Self {
        Self {
            messages: Arc::clone(&self.messages),
            read_state: self.read_state.clone(),
        }
    }
}

impl<M, R> MessageFeed<M, R>
where
    M: MessageStore,
    R: ReadStateRepository,
{
    /// Creates a feed over a message store and a read-state service.
    #[must_use]
    pub const fn new(messages: Arc<M>, read_state: ReadStateStore<R>) -> Self {
        Self {
            messages,
            read_state,
        }
    }

    /// Returns every readable message tagged with `area`, ascending by id.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Store`] when the storage query fails.
    pub async fn list_all(&self, area: &AreaName) -> FeedResult<Vec<MessageSummary>> {
        debug!(area = %area, "Fetching available messages");
        let rows = self.messages.list_for_area(area).await?;
        Ok(readable_in_order(area, rows))
    }

    /// Returns the messages in `area` the user has not seen yet.
    ///
    /// Only messages above the user's watermark are returned, ascending by
    /// id. In the private area, messages not addressed to `user` are
    /// excluded as well. A failed watermark lookup counts as "nothing read".
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Store`] when the storage query or, in the
    /// private area, the recipient lookup fails.
    pub async fn list_new_for_user(
        &self,
        user: UserId,
        area: &AreaName,
    ) -> FeedResult<Vec<MessageSummary>> {
        let last_read = self.read_state.last_read(user, area).await;
        let rows = self.messages.list_for_area_after(area, last_read).await?;
        let mut summaries = readable_in_order(area, rows);
        summaries.retain(|summary| summary.id > last_read);

        if area.is_private() {
            summaries = self.addressed_to(user, summaries).await?;
        }

        debug!(
            user_id = %user,
            area = %area,
            last_read = %last_read,
            count = summaries.len(),
            "Fetched new messages"
        );
        Ok(summaries)
    }

    async fn addressed_to(
        &self,
        user: UserId,
        summaries: Vec<MessageSummary>,
    ) -> FeedResult<Vec<MessageSummary>> {
        if summaries.is_empty() {
            return Ok(summaries);
        }

        let candidates: Vec<MessageId> = summaries.iter().map(|summary| summary.id).collect();
        let linked = self
            .messages
            .recipient_message_ids(user, &candidates)
            .await?;

        Ok(summaries
            .into_iter()
            .filter(|summary| linked.contains(&summary.id))
            .collect())
    }
}

fn readable_in_order(area: &AreaName, rows: Vec<SummaryRow>) -> Vec<MessageSummary> {
    let mut summaries: Vec<MessageSummary> = rows
        .into_iter()
        .filter_map(|row| {
            row.inspect_err(|err| {
                warn!(
                    area = %area,
                    row_id = err.row_id(),
                    error = %err,
                    "Skipping unreadable message row"
                );
            })
            .ok()
        })
        .collect();
    summaries.sort_by_key(|summary| summary.id);
    summaries
}

//! In-memory message store.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::ops::{Bound, RangeBounds};
use std::sync::{Arc, RwLock};

use crate::area::{
    domain::{AreaName, MessageId, MessageSummary, UserId},
    ports::{MessageStore, MessageStoreError, MessageStoreResult, SummaryRow},
};

/// Thread-safe in-memory message store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageStore {
    state: Arc<RwLock<InMemoryMessageState>>,
}

#[derive(Debug, Default)]
struct InMemoryMessageState {
    messages: BTreeMap<MessageId, StoredMessage>,
    recipients: HashSet<(MessageId, UserId)>,
}

#[derive(Debug, Clone)]
struct StoredMessage {
    area: AreaName,
    summary: MessageSummary,
}

impl InMemoryMessageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `summary` in `area`, replacing any message with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Persistence`] when the lock is poisoned.
    pub fn insert(&self, area: &AreaName, summary: MessageSummary) -> MessageStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            MessageStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.messages.insert(
            summary.id,
            StoredMessage {
                area: area.clone(),
                summary,
            },
        );
        Ok(())
    }

    /// Records that message `id` is privately addressed to `recipient`.
    ///
    /// # Errors
    ///
    /// Returns [`MessageStoreError::Persistence`] when the lock is poisoned.
    pub fn link_recipient(&self, id: MessageId, recipient: UserId) -> MessageStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            MessageStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.recipients.insert((id, recipient));
        Ok(())
    }

    fn rows_in(
        &self,
        area: &AreaName,
        ids: impl RangeBounds<MessageId>,
    ) -> MessageStoreResult<Vec<SummaryRow>> {
        let state = self.state.read().map_err(|err| {
            MessageStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let rows = state
            .messages
            .range(ids)
            .filter(|(_, stored)| stored.area == *area)
            .map(|(_, stored)| Ok(stored.summary.clone()))
            .collect();
        Ok(rows)
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn list_for_area(&self, area: &AreaName) -> MessageStoreResult<Vec<SummaryRow>> {
        self.rows_in(area, ..)
    }

    async fn list_for_area_after(
        &self,
        area: &AreaName,
        after: MessageId,
    ) -> MessageStoreResult<Vec<SummaryRow>> {
        self.rows_in(area, (Bound::Excluded(after), Bound::Unbounded))
    }

    async fn recipient_message_ids(
        &self,
        recipient: UserId,
        candidates: &[MessageId],
    ) -> MessageStoreResult<BTreeSet<MessageId>> {
        let state = self.state.read().map_err(|err| {
            MessageStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(candidates
            .iter()
            .copied()
            .filter(|id| state.recipients.contains(&(*id, recipient)))
            .collect())
    }
}

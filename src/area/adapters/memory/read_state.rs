//! In-memory read-state repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::area::{
    domain::{AreaName, MessageId, ReadState, UserId},
    ports::{ReadStateError, ReadStateRepository, ReadStateResult},
};

/// Thread-safe in-memory read-state repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReadStateRepository {
    rows: Arc<RwLock<HashMap<(UserId, AreaName), ReadState>>>,
}

impl InMemoryReadStateRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every stored row for `user`, ordered by area name.
    ///
    /// # Errors
    ///
    /// Returns [`ReadStateError::Persistence`] when the lock is poisoned.
    pub fn rows_for_user(&self, user: UserId) -> ReadStateResult<Vec<ReadState>> {
        let rows = self
            .rows
            .read()
            .map_err(|err| ReadStateError::persistence(std::io::Error::other(err.to_string())))?;
        let mut found: Vec<ReadState> = rows
            .values()
            .filter(|row| row.user_id == user)
            .cloned()
            .collect();
        found.sort_by(|left, right| left.area_name.cmp(&right.area_name));
        Ok(found)
    }
}

#[async_trait]
impl ReadStateRepository for InMemoryReadStateRepository {
    async fn get(&self, user: UserId, area: &AreaName) -> ReadStateResult<Option<MessageId>> {
        let rows = self
            .rows
            .read()
            .map_err(|err| ReadStateError::persistence(std::io::Error::other(err.to_string())))?;
        Ok(rows
            .get(&(user, area.clone()))
            .map(|row| row.last_message_id))
    }

    async fn set(
        &self,
        user: UserId,
        area: &AreaName,
        last_read: MessageId,
    ) -> ReadStateResult<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|err| ReadStateError::persistence(std::io::Error::other(err.to_string())))?;
        rows.insert(
            (user, area.clone()),
            ReadState::new(user, area.clone(), last_read),
        );
        Ok(())
    }
}

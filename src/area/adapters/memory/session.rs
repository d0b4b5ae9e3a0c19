//! In-memory session store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::area::{
    domain::{AreaName, UserId},
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};

/// Thread-safe in-memory store of each user's current area.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    current: Arc<RwLock<HashMap<UserId, AreaName>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn persist_current_area(
        &self,
        user: UserId,
        area: &AreaName,
    ) -> SessionStoreResult<()> {
        let mut current = self.current.write().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        current.insert(user, area.clone());
        Ok(())
    }

    async fn current_area(&self, user: UserId) -> SessionStoreResult<Option<AreaName>> {
        let current = self.current.read().map_err(|err| {
            SessionStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(current.get(&user).cloned())
    }
}

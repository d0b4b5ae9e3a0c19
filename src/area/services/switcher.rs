//! Current-area selection.
//!
//! Provides [`AreaSwitcher`], which resolves an area by name, checks the
//! user's groups against it, and only then records it as the user's current
//! area.

use crate::area::{
    domain::{AccessGate, Area, AreaCatalog, AreaName, UserIdentity},
    ports::{SessionStore, SessionStoreError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors returned while changing a user's current area.
#[derive(Debug, Error)]
pub enum AreaSwitchError {
    /// No configured area has the requested name.
    #[error("invalid message area: {0}")]
    AreaNotFound(String),

    /// The user is not in any group allowed into the area.
    #[error("user does not have access to message area: {0}")]
    AccessDenied(AreaName),

    /// The selection could not be persisted.
    #[error(transparent)]
    Persistence(#[from] SessionStoreError),
}

/// Result type for area switching operations.
pub type AreaSwitchResult<T> = Result<T, AreaSwitchError>;

/// Orchestrates catalog lookup, access gating, and selection persistence.
#[derive(Clone)]
pub struct AreaSwitcher<S>
where
    S: SessionStore,
{
    catalog: Arc<AreaCatalog>,
    sessions: Arc<S>,
}

impl<S> AreaSwitcher<S>
where
    S: SessionStore,
{
    /// Creates a switcher over a shared catalog and session store.
    #[must_use]
    pub const fn new(catalog: Arc<AreaCatalog>, sessions: Arc<S>) -> Self {
        Self { catalog, sessions }
    }

    /// Makes `area_name` the identity's current area.
    ///
    /// Steps run strictly in order and stop at the first failure; the
    /// selection is written last, so a rejected switch leaves no trace.
    ///
    /// # Errors
    ///
    /// Returns [`AreaSwitchError::AreaNotFound`] when the name resolves to
    /// nothing, [`AreaSwitchError::AccessDenied`] when the identity's groups
    /// do not satisfy the area, or [`AreaSwitchError::Persistence`] when the
    /// selection cannot be stored.
    pub async fn change_area(
        &self,
        identity: &UserIdentity,
        area_name: &str,
    ) -> AreaSwitchResult<Area> {
        let result = self.switch(identity, area_name).await;
        match &result {
            Ok(area) => info!(
                user_id = %identity.user_id(),
                area = %area.name(),
                "Current message area changed"
            ),
            Err(err) => warn!(
                user_id = %identity.user_id(),
                area = area_name,
                error = %err,
                "Could not change message area"
            ),
        }
        result
    }

    /// Returns the identity's current area.
    ///
    /// Falls back to the catalog default when nothing was persisted, when
    /// the persisted name no longer validates, or when the persisted area is
    /// no longer configured or no longer enterable.
    ///
    /// # Errors
    ///
    /// Returns [`AreaSwitchError::Persistence`] when the session lookup
    /// fails.
    pub async fn current_area(&self, identity: &UserIdentity) -> AreaSwitchResult<Option<Area>> {
        let persisted = match self.sessions.current_area(identity.user_id()).await {
            Ok(persisted) => persisted,
            Err(SessionStoreError::InvalidPersistedData(cause)) => {
                warn!(
                    user_id = %identity.user_id(),
                    error = %cause,
                    "Ignoring unreadable persisted message area"
                );
                None
            }
            Err(err) => return Err(err.into()),
        };
        let enterable = persisted
            .as_ref()
            .and_then(|name| self.catalog.get(name))
            .filter(|area| AccessGate::can_enter(area, identity.groups()));

        Ok(enterable
            .or_else(|| self.catalog.default_area())
            .cloned())
    }

    async fn switch(&self, identity: &UserIdentity, area_name: &str) -> AreaSwitchResult<Area> {
        let area = self
            .catalog
            .find_by_name(area_name)
            .ok_or_else(|| AreaSwitchError::AreaNotFound(area_name.to_owned()))?;

        if !AccessGate::can_enter(area, identity.groups()) {
            return Err(AreaSwitchError::AccessDenied(area.name().clone()));
        }

        self.sessions
            .persist_current_area(identity.user_id(), area.name())
            .await?;
        Ok(area.clone())
    }
}

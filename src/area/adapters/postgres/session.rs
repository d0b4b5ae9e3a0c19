//! `PostgreSQL` session store backed by the `user_properties` table.

use super::{
    blocking::{AreaPgPool, with_connection},
    models::UserPropertyRow,
    schema::user_properties,
};
use crate::area::{
    domain::{AreaName, UserId},
    ports::{SessionStore, SessionStoreError, SessionStoreResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;

/// User property key holding the current message area.
pub const MESSAGE_AREA_PROPERTY: &str = "message_area_name";

/// `PostgreSQL`-backed current-area storage.
#[derive(Debug, Clone)]
pub struct PostgresSessionStore {
    pool: AreaPgPool,
}

impl PostgresSessionStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AreaPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn persist_current_area(
        &self,
        user: UserId,
        area: &AreaName,
    ) -> SessionStoreResult<()> {
        let row = UserPropertyRow {
            user_id: user.value(),
            prop_name: MESSAGE_AREA_PROPERTY.to_owned(),
            prop_value: area.as_str().to_owned(),
        };
        with_connection(
            &self.pool,
            move |connection| {
                diesel::insert_into(user_properties::table)
                    .values(&row)
                    .on_conflict((user_properties::user_id, user_properties::prop_name))
                    .do_update()
                    .set(user_properties::prop_value.eq(excluded(user_properties::prop_value)))
                    .execute(connection)
                    .map_err(SessionStoreError::persistence)?;
                Ok(())
            },
            SessionStoreError::persistence,
            SessionStoreError::persistence,
        )
        .await
    }

    async fn current_area(&self, user: UserId) -> SessionStoreResult<Option<AreaName>> {
        with_connection(
            &self.pool,
            move |connection| {
                let stored = user_properties::table
                    .filter(user_properties::user_id.eq(user.value()))
                    .filter(user_properties::prop_name.eq(MESSAGE_AREA_PROPERTY))
                    .select(user_properties::prop_value)
                    .first::<String>(connection)
                    .optional()
                    .map_err(SessionStoreError::persistence)?;
                stored
                    .map(AreaName::new)
                    .transpose()
                    .map_err(SessionStoreError::invalid_persisted_data)
            },
            SessionStoreError::persistence,
            SessionStoreError::persistence,
        )
        .await
    }
}

//! `PostgreSQL` read-state repository.

use super::{
    blocking::{AreaPgPool, with_connection},
    models::LastReadRow,
    schema::user_message_area_last_read,
};
use crate::area::{
    domain::{AreaName, MessageId, UserId},
    ports::{ReadStateError, ReadStateRepository, ReadStateResult},
};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;

/// `PostgreSQL`-backed read watermark storage.
#[derive(Debug, Clone)]
pub struct PostgresReadStateRepository {
    pool: AreaPgPool,
}

impl PostgresReadStateRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AreaPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReadStateRepository for PostgresReadStateRepository {
    async fn get(&self, user: UserId, area: &AreaName) -> ReadStateResult<Option<MessageId>> {
        let area_name = area.as_str().to_owned();
        with_connection(
            &self.pool,
            move |connection| {
                user_message_area_last_read::table
                    .filter(user_message_area_last_read::user_id.eq(user.value()))
                    .filter(user_message_area_last_read::area_name.eq(&area_name))
                    .select(user_message_area_last_read::message_id)
                    .first::<i64>(connection)
                    .optional()
                    .map(|found| found.map(MessageId::new))
                    .map_err(ReadStateError::persistence)
            },
            ReadStateError::persistence,
            ReadStateError::persistence,
        )
        .await
    }

    async fn set(
        &self,
        user: UserId,
        area: &AreaName,
        last_read: MessageId,
    ) -> ReadStateResult<()> {
        let row = LastReadRow {
            user_id: user.value(),
            area_name: area.as_str().to_owned(),
            message_id: last_read.value(),
        };
        with_connection(
            &self.pool,
            move |connection| {
                diesel::insert_into(user_message_area_last_read::table)
                    .values(&row)
                    .on_conflict((
                        user_message_area_last_read::user_id,
                        user_message_area_last_read::area_name,
                    ))
                    .do_update()
                    .set(
                        user_message_area_last_read::message_id
                            .eq(excluded(user_message_area_last_read::message_id)),
                    )
                    .execute(connection)
                    .map_err(ReadStateError::persistence)?;
                Ok(())
            },
            ReadStateError::persistence,
            ReadStateError::persistence,
        )
        .await
    }
}

//! `PostgreSQL` message store.

use super::{
    blocking::{AreaPgPool, with_connection},
    models::MessageRow,
    schema::{message_meta, messages},
};
use crate::area::{
    domain::{AreaName, MessageId, MessageSummary, UserId},
    ports::{MessageRowError, MessageStore, MessageStoreError, MessageStoreResult, SummaryRow},
};
use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use std::collections::BTreeSet;
use uuid::Uuid;

/// `message_meta` category for system-maintained metadata.
pub const SYSTEM_META_CATEGORY: i32 = 1;

/// `message_meta` key linking a private message to its recipient's user id.
pub const LOCAL_TO_USER_ID_META: &str = "local_to_user_id";

/// `PostgreSQL`-backed message summary storage.
#[derive(Debug, Clone)]
pub struct PostgresMessageStore {
    pool: AreaPgPool,
}

impl PostgresMessageStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AreaPgPool) -> Self {
        Self { pool }
    }

    async fn load_rows(
        &self,
        area: &AreaName,
        after: Option<MessageId>,
    ) -> MessageStoreResult<Vec<SummaryRow>> {
        let area_name = area.as_str().to_owned();
        with_connection(
            &self.pool,
            move |connection| {
                let mut query: messages::BoxedQuery<'static, Pg> = messages::table
                    .filter(messages::area_name.eq(area_name))
                    .into_boxed();
                if let Some(last_read) = after {
                    query = query.filter(messages::message_id.gt(last_read.value()));
                }
                let rows = query
                    .order(messages::message_id.asc())
                    .select(MessageRow::as_select())
                    .load::<MessageRow>(connection)
                    .map_err(MessageStoreError::persistence)?;
                Ok(rows.into_iter().map(row_to_summary).collect())
            },
            MessageStoreError::persistence,
            MessageStoreError::persistence,
        )
        .await
    }
}

#[async_trait]
impl MessageStore for PostgresMessageStore {
    async fn list_for_area(&self, area: &AreaName) -> MessageStoreResult<Vec<SummaryRow>> {
        self.load_rows(area, None).await
    }

    async fn list_for_area_after(
        &self,
        area: &AreaName,
        after: MessageId,
    ) -> MessageStoreResult<Vec<SummaryRow>> {
        self.load_rows(area, Some(after)).await
    }

    async fn recipient_message_ids(
        &self,
        recipient: UserId,
        candidates: &[MessageId],
    ) -> MessageStoreResult<BTreeSet<MessageId>> {
        let ids: Vec<i64> = candidates.iter().map(|id| id.value()).collect();
        let recipient_value = recipient.to_string();
        with_connection(
            &self.pool,
            move |connection| {
                let linked = message_meta::table
                    .filter(message_meta::message_id.eq_any(ids))
                    .filter(message_meta::meta_category.eq(SYSTEM_META_CATEGORY))
                    .filter(message_meta::meta_name.eq(LOCAL_TO_USER_ID_META))
                    .filter(message_meta::meta_value.eq(recipient_value))
                    .select(message_meta::message_id)
                    .load::<i64>(connection)
                    .map_err(MessageStoreError::persistence)?;
                Ok(linked.into_iter().map(MessageId::new).collect())
            },
            MessageStoreError::persistence,
            MessageStoreError::persistence,
        )
        .await
    }
}

/// Decodes one stored row, keeping failures scoped to that row.
fn row_to_summary(row: MessageRow) -> SummaryRow {
    let MessageRow {
        message_id,
        message_uuid,
        reply_to_message_id,
        to_user_name,
        from_user_name,
        subject,
        modified_timestamp,
        view_count,
    } = row;

    let uuid =
        Uuid::parse_str(&message_uuid).map_err(|err| MessageRowError::new(message_id, err))?;
    let views = u32::try_from(view_count).map_err(|err| MessageRowError::new(message_id, err))?;

    Ok(MessageSummary {
        id: MessageId::new(message_id),
        uuid,
        reply_to: reply_to_message_id.map(MessageId::new),
        to_user: to_user_name,
        from_user: from_user_name,
        subject,
        modified_at: modified_timestamp,
        view_count: views,
    })
}

//! Diesel row models for message area persistence.

use super::schema::{messages, user_message_area_last_read, user_properties};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for message summaries.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Storage-assigned identifier.
    pub message_id: i64,
    /// Hyphenated UUID text.
    pub message_uuid: String,
    /// Replied-to message.
    pub reply_to_message_id: Option<i64>,
    /// Addressee display name.
    pub to_user_name: String,
    /// Author display name.
    pub from_user_name: String,
    /// Subject line.
    pub subject: String,
    /// Last modification timestamp.
    pub modified_timestamp: DateTime<Utc>,
    /// View counter.
    pub view_count: i32,
}

/// Upsert model for read watermarks.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_message_area_last_read)]
pub struct LastReadRow {
    /// Reader.
    pub user_id: i64,
    /// Lowercased area name.
    pub area_name: String,
    /// Read watermark.
    pub message_id: i64,
}

/// Upsert model for user properties.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_properties)]
pub struct UserPropertyRow {
    /// Owning user.
    pub user_id: i64,
    /// Property key.
    pub prop_name: String,
    /// Property value.
    pub prop_value: String,
}

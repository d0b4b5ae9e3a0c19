//! Flattened message summary used by area listings.

use super::MessageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Listing-level view of a stored message.
///
/// Only [`MessageSummary::id`] is interpreted by area services; the other
/// fields are carried through for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSummary {
    /// Storage-assigned identifier, ascending in posting order.
    pub id: MessageId,
    /// Globally unique message identifier.
    pub uuid: Uuid,
    /// Message this one replies to, if any.
    pub reply_to: Option<MessageId>,
    /// Addressee display name.
    pub to_user: String,
    /// Author display name.
    pub from_user: String,
    /// Subject line.
    pub subject: String,
    /// Last modification time.
    pub modified_at: DateTime<Utc>,
    /// Number of times the message has been viewed.
    pub view_count: u32,
}

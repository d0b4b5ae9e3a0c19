//! Per-user, per-area read watermark.

use super::{AreaName, MessageId, UserId};
use serde::{Deserialize, Serialize};

/// The highest message id a user has acknowledged in an area.
///
/// A pair without a stored row behaves as if its watermark were
/// [`MessageId::ZERO`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadState {
    /// Reader.
    pub user_id: UserId,
    /// Area the watermark applies to.
    pub area_name: AreaName,
    /// Highest acknowledged message id.
    pub last_message_id: MessageId,
}

impl ReadState {
    /// Creates a read state row.
    #[must_use]
    pub const fn new(user_id: UserId, area_name: AreaName, last_message_id: MessageId) -> Self {
        Self {
            user_id,
            area_name,
            last_message_id,
        }
    }

    /// Computes the outcome of offering `candidate` as the new watermark.
    ///
    /// The watermark only ever moves forward; a candidate at or below the
    /// current value leaves it unchanged.
    #[must_use]
    pub fn offer(&self, candidate: MessageId) -> WatermarkAdvance {
        WatermarkAdvance::between(self.last_message_id, candidate)
    }
}

/// Result of trying to move a read watermark forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatermarkAdvance {
    /// The watermark moved from `previous` to `current`.
    Advanced {
        /// Watermark before the update.
        previous: MessageId,
        /// Watermark after the update.
        current: MessageId,
    },
    /// The candidate was not above the stored watermark.
    Unchanged {
        /// The watermark that remains in effect.
        current: MessageId,
    },
}

impl WatermarkAdvance {
    /// Decides whether `candidate` advances past `current`.
    #[must_use]
    pub fn between(current: MessageId, candidate: MessageId) -> Self {
        if candidate > current {
            Self::Advanced {
                previous: current,
                current: candidate,
            }
        } else {
            Self::Unchanged { current }
        }
    }

    /// Returns the watermark in effect after the attempt.
    #[must_use]
    pub const fn current(self) -> MessageId {
        match self {
            Self::Advanced { current, .. } | Self::Unchanged { current } => current,
        }
    }

    /// Returns `true` when the watermark moved.
    #[must_use]
    pub const fn is_advanced(self) -> bool {
        matches!(self, Self::Advanced { .. })
    }
}

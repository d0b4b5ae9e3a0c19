//! Read watermark tracking.
//!
//! Provides [`ReadStateStore`], the only writer of read state. Watermarks
//! never move backwards: [`ReadStateStore::advance`] writes only when the
//! candidate is above the stored value.

use crate::area::{
    domain::{AreaName, MessageId, ReadState, UserId, WatermarkAdvance},
    ports::{ReadStateError, ReadStateRepository, ReadStateResult},
};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Outcome of a watermark lookup, keeping "no row" apart from "lookup
/// failed" so callers can pick their own fallback.
#[derive(Debug, Clone)]
pub enum WatermarkLookup {
    /// A watermark is stored for the pair.
    Found(MessageId),
    /// The pair has never been read.
    NotFound,
    /// The lookup failed.
    Failed(ReadStateError),
}

impl WatermarkLookup {
    /// Resolves the lookup leniently: a missing row or a failed lookup both
    /// count as "nothing read yet".
    ///
    /// This can momentarily show already-seen messages as new, never the
    /// reverse.
    #[must_use]
    pub const fn or_zero(&self) -> MessageId {
        match self {
            Self::Found(id) => *id,
            Self::NotFound | Self::Failed(_) => MessageId::ZERO,
        }
    }
}

/// Per-user, per-area read watermark service.
pub struct ReadStateStore<R>
where
    R: ReadStateRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for ReadStateStore<R>
where
    R: ReadStateRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> ReadStateStore<R>
where
    R: ReadStateRepository,
{
    /// Creates a read-state service over the given repository.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Looks up the stored watermark without applying any fallback.
    pub async fn lookup(&self, user: UserId, area: &AreaName) -> WatermarkLookup {
        match self.repository.get(user, area).await {
            Ok(Some(id)) => WatermarkLookup::Found(id),
            Ok(None) => WatermarkLookup::NotFound,
            Err(err) => WatermarkLookup::Failed(err),
        }
    }

    /// Returns the user's watermark for `area`, or [`MessageId::ZERO`] when
    /// none is stored or the lookup fails.
    pub async fn last_read(&self, user: UserId, area: &AreaName) -> MessageId {
        let lookup = self.lookup(user, area).await;
        if let WatermarkLookup::Failed(err) = &lookup {
            warn!(
                user_id = %user,
                area = %area,
                error = %err,
                "Failed fetching area last read id; treating as unread"
            );
        }
        lookup.or_zero()
    }

    /// Moves the watermark to `candidate` if it is above the current value.
    ///
    /// The read and the write are separate round-trips. Two concurrent
    /// advances for the same pair may both observe the old value; the final
    /// watermark is then one of the two candidates.
    ///
    /// Unlike [`Self::last_read`], a failed lookup is not read as zero here:
    /// nothing is written, so a lower candidate can never replace a stored
    /// watermark that could not be read.
    ///
    /// # Errors
    ///
    /// Returns [`ReadStateError::Persistence`] when the lookup or the write
    /// fails.
    pub async fn advance(
        &self,
        user: UserId,
        area: &AreaName,
        candidate: MessageId,
    ) -> ReadStateResult<WatermarkAdvance> {
        let current = match self.lookup(user, area).await {
            WatermarkLookup::Found(id) => id,
            WatermarkLookup::NotFound => MessageId::ZERO,
            WatermarkLookup::Failed(err) => {
                debug!(
                    user_id = %user,
                    area = %area,
                    message_id = %candidate,
                    error = %err,
                    "Failed fetching area last read id; not advancing"
                );
                return Err(err);
            }
        };
        let outcome = ReadState::new(user, area.clone(), current).offer(candidate);

        if let WatermarkAdvance::Advanced { current: next, .. } = outcome {
            self.repository
                .set(user, area, next)
                .await
                .inspect_err(|err| {
                    debug!(
                        user_id = %user,
                        area = %area,
                        message_id = %candidate,
                        error = %err,
                        "Failed updating area last read id"
                    );
                })?;
            trace!(
                user_id = %user,
                area = %area,
                message_id = %next,
                "Area last read id updated"
            );
        }

        Ok(outcome)
    }
}

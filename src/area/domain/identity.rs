//! Identity of the user driving an area operation.

use super::UserId;
use std::collections::BTreeSet;

/// A signed-in user and their current group memberships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    user_id: UserId,
    groups: BTreeSet<String>,
}

impl UserIdentity {
    /// Creates an identity with no group memberships.
    #[must_use]
    pub const fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            groups: BTreeSet::new(),
        }
    }

    /// Sets the identity's group memberships.
    #[must_use]
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the user account identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the groups the user currently belongs to.
    #[must_use]
    pub const fn groups(&self) -> &BTreeSet<String> {
        &self.groups
    }
}

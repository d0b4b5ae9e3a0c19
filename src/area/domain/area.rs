//! Configured message area.

use super::AreaName;
use serde::Serialize;
use std::collections::BTreeSet;

/// Whether an area is broadcast to its audience or addressed per recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaKind {
    /// Messages are visible to everyone allowed into the area.
    Public,
    /// Messages are visible only to their linked recipient.
    Private,
}

/// A named, optionally group-restricted message board.
///
/// Areas are immutable once loaded. An empty group set means the area is
/// open to everyone; otherwise membership in at least one listed group is
/// required to enter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    name: AreaName,
    description: String,
    groups: BTreeSet<String>,
}

impl Area {
    /// Creates an unrestricted area.
    #[must_use]
    pub fn new(name: AreaName, description: impl Into<String>) -> Self {
        Self {
            name,
            description: description.into(),
            groups: BTreeSet::new(),
        }
    }

    /// Restricts the area to members of the given groups.
    ///
    /// Blank group names are discarded.
    #[must_use]
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups
            .into_iter()
            .map(Into::into)
            .filter(|group: &String| !group.trim().is_empty())
            .collect();
        self
    }

    /// Returns the normalised area name.
    #[must_use]
    pub const fn name(&self) -> &AreaName {
        &self.name
    }

    /// Returns the human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the groups allowed to enter; empty when unrestricted.
    #[must_use]
    pub const fn groups(&self) -> &BTreeSet<String> {
        &self.groups
    }

    /// Returns `true` when no group restriction applies.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns how visibility is decided for this area.
    #[must_use]
    pub fn kind(&self) -> AreaKind {
        if self.name.is_private() {
            AreaKind::Private
        } else {
            AreaKind::Public
        }
    }

    /// Returns `true` for the distinguished private area.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.kind() == AreaKind::Private
    }
}

//! Group-based access decisions for message areas.

use super::Area;
use std::collections::BTreeSet;

/// Decides whether a user may enter an area.
///
/// The gate is stateless; it only compares the area's group restriction
/// against the user's memberships.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessGate;

impl AccessGate {
    /// Returns `true` when `user_groups` satisfies the area's restriction.
    ///
    /// Unrestricted areas admit everyone. The private area is filtered per
    /// recipient rather than per group, so its group list is ignored.
    #[must_use]
    pub fn can_enter(area: &Area, user_groups: &BTreeSet<String>) -> bool {
        if area.is_private() || area.is_unrestricted() {
            return true;
        }
        !area.groups().is_disjoint(user_groups)
    }
}

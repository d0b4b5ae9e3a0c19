//! Validated, case-insensitive area name type.

use super::AreaDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an area name, matching the `VARCHAR(100)` columns.
const MAX_NAME_LENGTH: usize = 100;

/// Well-known name of the private area, where messages are addressed to a
/// single recipient rather than broadcast.
pub const PRIVATE_AREA_NAME: &str = "private_mail";

/// Normalised message area identifier.
///
/// Names are trimmed and lowercased on construction, so `Local_Music` and
/// `local_music` compare equal and hash identically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AreaName(String);

impl AreaName {
    /// Creates a validated area name.
    ///
    /// # Errors
    ///
    /// Returns [`AreaDomainError::EmptyAreaName`] when the value is empty
    /// after trimming, [`AreaDomainError::InvalidAreaName`] when it contains
    /// whitespace or control characters, or
    /// [`AreaDomainError::AreaNameTooLong`] when it exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AreaDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(AreaDomainError::EmptyAreaName);
        }

        if normalized.chars().count() > MAX_NAME_LENGTH {
            return Err(AreaDomainError::AreaNameTooLong(raw));
        }

        if normalized
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(AreaDomainError::InvalidAreaName(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the name of the private area.
    #[must_use]
    pub fn private() -> Self {
        Self(PRIVATE_AREA_NAME.to_owned())
    }

    /// Returns `true` when this is the well-known private area name.
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.0 == PRIVATE_AREA_NAME
    }

    /// Returns the area name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AreaName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AreaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AreaName {
    type Error = AreaDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for AreaName {
    type Error = AreaDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AreaName> for String {
    fn from(value: AreaName) -> Self {
        value.0
    }
}

//! Serde shapes for message area configuration.
//!
//! Loading the document from disk belongs to the host application; this
//! module only describes its shape and converts it into domain values.

use super::{Area, AreaDomainError, AreaName, CatalogError};
use serde::Deserialize;

/// One configured area, as written by the operator.
///
/// ```json
/// { "name": "local_music", "desc": "Music Discussion", "groups": ["users"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AreaDefinition {
    /// Area name; matched case-insensitively.
    pub name: String,
    /// Human-readable description.
    #[serde(rename = "desc", alias = "description", default)]
    pub description: String,
    /// Optional group restriction. Absent or empty means unrestricted.
    #[serde(default)]
    pub groups: Option<Vec<String>>,
}

/// Top-level message area configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MessageAreasConfig {
    /// Areas in priority order; the first non-private one is the default.
    #[serde(default)]
    pub areas: Vec<AreaDefinition>,
}

impl MessageAreasConfig {
    /// Parses a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidConfig`] when the document is not
    /// valid JSON or does not match the expected shape.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(raw).map_err(|err| CatalogError::InvalidConfig(err.to_string()))
    }
}

impl TryFrom<AreaDefinition> for Area {
    type Error = AreaDomainError;

    fn try_from(definition: AreaDefinition) -> Result<Self, Self::Error> {
        let AreaDefinition {
            name,
            description,
            groups,
        } = definition;
        let area = Self::new(AreaName::new(name)?, description);
        Ok(match groups {
            Some(list) => area.with_groups(list),
            None => area,
        })
    }
}

//! Ordered, read-only catalog of configured message areas.

use super::{Area, AreaName, CatalogError, MessageAreasConfig};
use std::collections::HashSet;

/// The configured message areas, in operator-defined order.
///
/// Build the catalog once at startup and share it behind an `Arc`; nothing
/// mutates it afterwards, so concurrent readers need no locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaCatalog {
    areas: Vec<Area>,
}

impl AreaCatalog {
    /// Creates a catalog from areas in their configured order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateArea`] when two areas share a name.
    pub fn new(areas: Vec<Area>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(areas.len());
        for area in &areas {
            if !seen.insert(area.name()) {
                return Err(CatalogError::DuplicateArea(area.name().clone()));
            }
        }
        Ok(Self { areas })
    }

    /// Creates a catalog from a parsed configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Domain`] when an area name is invalid or
    /// [`CatalogError::DuplicateArea`] when two areas share a name.
    pub fn from_config(config: MessageAreasConfig) -> Result<Self, CatalogError> {
        let areas = config
            .areas
            .into_iter()
            .map(Area::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(areas)
    }

    /// Returns the configured areas in order.
    ///
    /// Unless `include_private` is set, the private area is left out of the
    /// result entirely.
    #[must_use]
    pub fn list_areas(&self, include_private: bool) -> Vec<&Area> {
        self.areas
            .iter()
            .filter(|area| include_private || !area.is_private())
            .collect()
    }

    /// Returns the first non-private area, if any.
    ///
    /// Configuration order expresses priority, so the default is purely
    /// positional.
    #[must_use]
    pub fn default_area(&self) -> Option<&Area> {
        self.areas.iter().find(|area| !area.is_private())
    }

    /// Finds an area by name, ignoring case.
    ///
    /// The private area is searched too; whether it may be entered is an
    /// access decision, not a visibility one. The query is lowercased but
    /// not trimmed, so padded names never match.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Area> {
        let wanted = name.to_lowercase();
        self.areas
            .iter()
            .find(|area| area.name().as_str() == wanted)
    }

    /// Finds an area by an already-validated name.
    #[must_use]
    pub fn get(&self, name: &AreaName) -> Option<&Area> {
        self.areas.iter().find(|area| area.name() == name)
    }

    /// Returns the private area when it is configured.
    #[must_use]
    pub fn private_area(&self) -> Option<&Area> {
        self.areas.iter().find(|area| area.is_private())
    }

    /// Returns the number of configured areas, private included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Returns `true` when no areas are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

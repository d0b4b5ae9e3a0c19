//! Domain model for message areas and read state.
//!
//! Everything here is pure: no storage, no clocks, no I/O. The
//! [`AreaCatalog`] is built once from configuration and shared read-only.

mod access;
mod area;
mod catalog;
mod config;
mod error;
mod identity;
mod ids;
mod name;
mod read_state;
mod summary;

pub use access::AccessGate;
pub use area::{Area, AreaKind};
pub use catalog::AreaCatalog;
pub use config::{AreaDefinition, MessageAreasConfig};
pub use error::{AreaDomainError, CatalogError};
pub use identity::UserIdentity;
pub use ids::{MessageId, UserId};
pub use name::{AreaName, PRIVATE_AREA_NAME};
pub use read_state::{ReadState, WatermarkAdvance};
pub use summary::MessageSummary;

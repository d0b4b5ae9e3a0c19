//! Message area resolution, access gating, and read-state tracking.
//!
//! Areas are topic-scoped message boards loaded from configuration. This
//! module resolves areas by name, gates entry by group membership, tracks a
//! per-user "last read" watermark for every area, and produces full or
//! delta message listings. The distinguished private area filters by
//! recipient instead of by group.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

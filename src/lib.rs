//! Message areas: topic-scoped message boards with per-user read tracking.
//!
//! This crate resolves configured message areas by name, gates entry by
//! group membership, and tracks which messages each user has seen so that
//! "new messages" can be listed as a delta over a read watermark.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure types and rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and sessions
//! - **Adapters**: In-memory and `PostgreSQL` implementations of the ports
//! - **Services**: Area switching, read-state tracking, and message feeds
//!
//! # Modules
//!
//! - [`area`]: Area catalog, access gating, read state, and listings

pub mod area;

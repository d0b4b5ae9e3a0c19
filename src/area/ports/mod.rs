//! Port contracts for message area services.
//!
//! Ports define infrastructure-agnostic interfaces consumed by the area
//! services: message storage, read-state persistence, and the
//! identity/session store.

pub mod message_store;
pub mod read_state;
pub mod session;

pub use message_store::{
    MessageRowError, MessageStore, MessageStoreError, MessageStoreResult, SummaryRow,
};
pub use read_state::{ReadStateError, ReadStateRepository, ReadStateResult};
pub use session::{SessionStore, SessionStoreError, SessionStoreResult};

//! In-memory adapter implementations.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit testing without database dependencies.

mod message_store;
mod read_state;
mod session;

pub use message_store::InMemoryMessageStore;
pub use read_state::InMemoryReadStateRepository;
pub use session::InMemorySessionStore;

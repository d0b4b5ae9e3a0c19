//! `PostgreSQL` adapters for message area persistence.
//!
//! All adapters share one r2d2 pool and run Diesel calls on Tokio's
//! blocking thread pool.

mod blocking;
mod message_store;
mod models;
mod read_state;
mod schema;
mod session;

pub use blocking::AreaPgPool;
pub use message_store::{LOCAL_TO_USER_ID_META, PostgresMessageStore, SYSTEM_META_CATEGORY};
pub use read_state::PostgresReadStateRepository;
pub use session::{MESSAGE_AREA_PROPERTY, PostgresSessionStore};

//! Blocking operation helpers for the `PostgreSQL` adapters.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};

/// `PostgreSQL` connection pool type used by the message area adapters.
pub type AreaPgPool = Pool<ConnectionManager<PgConnection>>;

/// Runs `f` with a pooled connection on Tokio's blocking thread pool.
///
/// Pool checkout failures go through `on_pool`, task join failures through
/// `on_join`; errors returned by `f` pass through unchanged.
pub(super) async fn with_connection<F, T, E, P, J>(
    pool: &AreaPgPool,
    f: F,
    on_pool: P,
    on_join: J,
) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    P: FnOnce(PoolError) -> E + Send + 'static,
    J: FnOnce(tokio::task::JoinError) -> E,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(on_pool)?;
        f(&mut connection)
    })
    .await
    .map_err(on_join)?
}

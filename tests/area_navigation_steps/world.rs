//! Shared world state for area navigation BDD scenarios.

use std::sync::Arc;

use message_areas::area::{
    adapters::memory::{InMemoryMessageStore, InMemoryReadStateRepository, InMemorySessionStore},
    domain::{Area, AreaCatalog, AreaName, MessageId, UserId, UserIdentity},
    services::{AreaSwitchError, AreaSwitcher, MessageFeed, ReadStateStore},
};
use rstest::fixture;

/// Identifier of the scenario's acting user.
pub const SCENARIO_USER: UserId = UserId::new(42);

/// Scenario world for area navigation behaviour tests.
pub struct AreaWorld {
    /// Message storage shared with the feed.
    pub messages: Arc<InMemoryMessageStore>,
    /// Session storage shared with the switcher.
    pub sessions: Arc<InMemorySessionStore>,
    /// Area switching service under test.
    pub switcher: AreaSwitcher<InMemorySessionStore>,
    /// Read watermark service under test.
    pub read_state: ReadStateStore<InMemoryReadStateRepository>,
    /// Listing service under test.
    pub feed: MessageFeed<InMemoryMessageStore, InMemoryReadStateRepository>,
    /// The acting user.
    pub identity: UserIdentity,
    /// Result of the last `change_area` call.
    pub last_switch_result: Option<Result<Area, AreaSwitchError>>,
}

impl AreaWorld {
    /// Creates a world over a three-area catalog with empty storage.
    ///
    /// # Panics
    ///
    /// Panics if the built-in catalog is invalid.
    #[must_use]
    pub fn new() -> Self {
        let catalog = Arc::new(
            AreaCatalog::new(vec![
                Area::new(AreaName::private(), "Private mail"),
                Area::new(parse_area("local_music"), "Music Discussion"),
                Area::new(parse_area("restricted_area"), "Staff only").with_groups(["staff"]),
            ])
            .expect("scenario catalog is valid"),
        );
        let messages = Arc::new(InMemoryMessageStore::new());
        let sessions = Arc::new(InMemorySessionStore::new());
        let read_state = ReadStateStore::new(Arc::new(InMemoryReadStateRepository::new()));
        Self {
            switcher: AreaSwitcher::new(catalog, Arc::clone(&sessions)),
            feed: MessageFeed::new(Arc::clone(&messages), read_state.clone()),
            messages,
            sessions,
            read_state,
            identity: UserIdentity::new(SCENARIO_USER),
            last_switch_result: None,
        }
    }
}

impl Default for AreaWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AreaWorld {
    AreaWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses an area name known to be valid.
///
/// # Panics
///
/// Panics if `raw` is not a valid area name.
#[must_use]
pub fn parse_area(raw: &str) -> AreaName {
    AreaName::new(raw).expect("scenario area names are valid")
}

/// Parses a comma-separated list of message ids such as `1,2,3`.
///
/// # Errors
///
/// Returns an error if any entry is not an integer.
pub fn parse_ids(raw: &str) -> Result<Vec<MessageId>, eyre::Report> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<i64>()
                .map(MessageId::new)
                .map_err(|err| eyre::eyre!("invalid message id '{part}': {err}"))
        })
        .collect()
}

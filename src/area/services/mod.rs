//! Application services for message areas.

mod feed;
mod read_state;
mod switcher;

pub use feed::{FeedError, FeedResult, MessageFeed};
pub use read_state::{ReadStateStore, WatermarkLookup};
pub use switcher::{AreaSwitchError, AreaSwitchResult, AreaSwitcher};

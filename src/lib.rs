//! Scheduled reserved-capacity watcher.
//!
//! Queries five cloud reservation inventories, keeps the reservations that
//! are currently active, and posts a Block Kit summary to a Slack incoming
//! webhook. Everything lives within one invocation; no state is kept
//! between runs.

pub mod config;
pub mod error;
pub mod normalize;
pub mod notify;
pub mod report;
pub mod reservation;
pub mod resource;
pub mod sources;
pub mod timefmt;
pub mod watcher;

pub use config::Config;
pub use error::{ConfigError, DispatchError, FetchError, WatcherError};
pub use watcher::Watcher;

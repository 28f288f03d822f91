//! Core record store for the debate/note-taking app.
//! This crate owns topics, notes, beliefs and drawings and every invariant
//! over them; UI bindings stay thin adapters on top.

pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod store;

pub use config::{parse_search_mode, ConfigError, SearchMode, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::belief::UserBelief;
pub use model::drawing::{Drawing, Point, Stroke};
pub use model::note::Note;
pub use model::topic::Topic;
pub use model::{EntityId, Timestamp};
pub use store::links::{LinkOutcome, LinkSide};
pub use store::{DebateStore, StoreCounts};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

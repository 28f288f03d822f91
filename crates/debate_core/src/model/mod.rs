//! Domain model for debate topics, notes, beliefs and drawings.
//!
//! # Responsibility
//! - Define the canonical records owned by [`crate::store::DebateStore`].
//! - Provide the shared id, timestamp and level-clamping primitives.
//!
//! # Invariants
//! - Every topic, note and drawing carries a store-issued `EntityId`.
//! - Complexity and conviction levels always fall within
//!   [`LEVEL_MIN`, `LEVEL_MAX`].
//! - Records handed out by the store are copies; mutating them never changes
//!   store state.

pub mod belief;
pub mod drawing;
pub mod note;
pub mod topic;

use std::time::{SystemTime, UNIX_EPOCH};

/// Store-issued identifier, shared by topics, notes and drawings.
pub type EntityId = i64;

/// Unix epoch milliseconds.
pub type Timestamp = i64;

/// Lowest accepted complexity/conviction level.
pub const LEVEL_MIN: i32 = 1;
/// Highest accepted complexity/conviction level.
pub const LEVEL_MAX: i32 = 10;

/// Clamps a complexity or conviction input into `[LEVEL_MIN, LEVEL_MAX]`.
///
/// Out-of-range values are never rejected.
pub fn clamp_level(value: i32) -> i32 {
    value.clamp(LEVEL_MIN, LEVEL_MAX)
}

/// Current wall-clock time in epoch milliseconds.
///
/// Falls back to `0` if the system clock reports a time before the epoch.
pub fn now_epoch_ms() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| Timestamp::try_from(elapsed.as_millis()).unwrap_or(Timestamp::MAX))
        .unwrap_or(0)
}

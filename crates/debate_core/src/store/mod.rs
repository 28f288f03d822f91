//! In-memory entity store.
//!
//! # Responsibility
//! - Hold topics, notes, drawings and the belief log for one host session.
//! - Keep inverted indexes and note links consistent with the collections.
//!
//! # Invariants
//! - [`DebateStore`] is the only mutable entry point; sub-components are
//!   never handed out by mutable reference.
//! - Nothing is persisted; a new store starts from the seed set again.

pub mod beliefs;
pub mod collection;
mod debate_store;
pub mod ids;
pub mod links;
pub mod seed;

pub use debate_store::{DebateStore, StoreCounts};

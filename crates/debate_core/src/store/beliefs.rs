//! Append-only belief history.
//!
//! # Invariants
//! - Records are never edited, reordered or removed.
//! - The current belief for a topic is its most recently appended record.

use crate::model::belief::UserBelief;
use crate::model::EntityId;

#[derive(Debug, Clone, Default)]
pub struct BeliefLog {
    records: Vec<UserBelief>,
}

impl BeliefLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, belief: UserBelief) {
        self.records.push(belief);
    }

    /// Most recently appended record for `topic_id`.
    pub fn latest(&self, topic_id: EntityId) -> Option<&UserBelief> {
        self.records
            .iter()
            .rev()
            .find(|belief| belief.topic_id == topic_id)
    }

    /// All records for `topic_id` in append order.
    pub fn history(&self, topic_id: EntityId) -> Vec<UserBelief> {
        self.records
            .iter()
            .filter(|belief| belief.topic_id == topic_id)
            .cloned()
            .collect()
    }

    /// Total records across all topics.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

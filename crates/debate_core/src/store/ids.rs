//! Shared identifier allocator.

use crate::model::EntityId;

const FIRST_ID: EntityId = 1;

/// Issues strictly increasing ids starting at 1. Ids are never reused.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next_id: EntityId,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next_id: FIRST_ID }
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an unissued id and advances the counter.
    pub fn next_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

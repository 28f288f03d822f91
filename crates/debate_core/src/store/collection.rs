//! Append-only entity collection with id lookup.
//!
//! # Invariants
//! - Iteration order is insertion order.
//! - `positions` maps every stored id to its slot in `items`.

use crate::model::drawing::Drawing;
use crate::model::note::Note;
use crate::model::topic::Topic;
use crate::model::EntityId;
use std::collections::HashMap;

/// Records that carry a store-issued id.
pub trait Entity {
    fn entity_id(&self) -> EntityId;
}

impl Entity for Topic {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Note {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

impl Entity for Drawing {
    fn entity_id(&self) -> EntityId {
        self.id
    }
}

#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    positions: HashMap<EntityId, usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one record. Ids come from the shared allocator, so they are
    /// unique by construction.
    pub fn push(&mut self, item: T) {
        self.positions.insert(item.entity_id(), self.items.len());
        self.items.push(item);
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.positions.get(&id).map(|&slot| &self.items[slot])
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.positions.get(&id).map(|&slot| &mut self.items[slot])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

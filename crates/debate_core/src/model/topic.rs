//! Debate topic model.

use super::{clamp_level, EntityId};
use serde::{Deserialize, Serialize};

/// One debate topic.
///
/// Topics are created once and never mutated or removed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    /// Always within `[1, 10]`.
    pub complexity_level: i32,
    pub category: String,
}

impl Topic {
    /// Builds a topic, clamping `complexity` into `[1, 10]`.
    pub fn new(
        id: EntityId,
        title: impl Into<String>,
        description: impl Into<String>,
        complexity: i32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            complexity_level: clamp_level(complexity),
            category: category.into(),
        }
    }

    /// Text fed to both the tokenizer and substring search.
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.category)
    }

    /// Whether this topic's level lies in the inclusive range `min..=max`.
    pub fn in_complexity_range(&self, min: i32, max: i32) -> bool {
        self.complexity_level >= min && self.complexity_level <= max
    }
}

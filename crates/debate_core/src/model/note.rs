//! Note model.
//!
//! # Invariants
//! - `updated_at` equals `created_at`; no operation edits a note body.
//! - `linked_notes` holds each peer at most once and mirrors the peer's list.

use super::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// Conventional note type for claims.
pub const NOTE_TYPE_CLAIM: &str = "claim";
/// Conventional note type for supporting evidence.
pub const NOTE_TYPE_EVIDENCE: &str = "evidence";
/// Conventional note type for rebuttals.
pub const NOTE_TYPE_REBUTTAL: &str = "rebuttal";
/// Default note type.
pub const NOTE_TYPE_GENERAL: &str = "general";

const KNOWN_NOTE_TYPES: &[&str] = &[
    NOTE_TYPE_CLAIM,
    NOTE_TYPE_EVIDENCE,
    NOTE_TYPE_REBUTTAL,
    NOTE_TYPE_GENERAL,
];

/// Returns whether `value` is one of the conventional note types.
///
/// The store accepts any text as a note type; this is a UI hint only.
pub fn is_known_note_type(value: &str) -> bool {
    KNOWN_NOTE_TYPES.contains(&value)
}

/// One user note attached to a free-form topic tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: EntityId,
    pub content: String,
    /// Free-form label. Not checked against topic ids.
    pub topic_tag: String,
    pub note_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Peers in the order they were linked.
    pub linked_notes: Vec<EntityId>,
}

impl Note {
    /// Builds an unlinked note with both timestamps set to `created_at`.
    pub fn new(
        id: EntityId,
        content: impl Into<String>,
        topic_tag: impl Into<String>,
        note_type: impl Into<String>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            topic_tag: topic_tag.into(),
            note_type: note_type.into(),
            created_at,
            updated_at: created_at,
            linked_notes: Vec::new(),
        }
    }

    /// Text fed to both the tokenizer and substring search.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.content, self.topic_tag)
    }

    pub fn is_linked_to(&self, other: EntityId) -> bool {
        self.linked_notes.contains(&other)
    }
}

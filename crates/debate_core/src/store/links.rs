//! Undirected note linking graph.
//!
//! The adjacency lives on each note's `linked_notes` list; this module is the
//! only writer of those lists.
//!
//! # Invariants
//! - Symmetric: if A lists B, B lists A.
//! - Idempotent: each direction is recorded at most once.
//! - An edge is recorded only when both ids resolve to notes, so a note never
//!   lists an id that a later note could receive.

use super::collection::Collection;
use crate::model::note::Note;
use crate::model::EntityId;

/// What happened to one endpoint of a link request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSide {
    /// The peer id was appended to this note's links.
    Added,
    /// The peer was already linked; nothing changed.
    AlreadyLinked,
    /// No note has this id; the side was skipped.
    Missing,
    /// This note exists but its peer does not; nothing was recorded.
    PeerMissing,
}

/// Per-endpoint result of [`link`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOutcome {
    pub first: LinkSide,
    pub second: LinkSide,
}

impl LinkOutcome {
    /// Whether either endpoint gained a new edge.
    pub fn changed(&self) -> bool {
        self.first == LinkSide::Added || self.second == LinkSide::Added
    }
}

/// Links `first` and `second` in both directions.
///
/// Self-links are allowed and recorded once. When either id is unknown,
/// neither note changes.
pub fn link(notes: &mut Collection<Note>, first: EntityId, second: EntityId) -> LinkOutcome {
    let first_exists = notes.get(first).is_some();
    let second_exists = notes.get(second).is_some();
    if !(first_exists && second_exists) {
        return LinkOutcome {
            first: unresolved_side(first_exists),
            second: unresolved_side(second_exists),
        };
    }

    let first_side = attach(notes, first, second);
    let second_side = if first == second {
        LinkSide::AlreadyLinked
    } else {
        attach(notes, second, first)
    };
    LinkOutcome {
        first: first_side,
        second: second_side,
    }
}

/// Copies of every note linked to `id`, in link order.
///
/// Returns an empty list when `id` is unknown.
pub fn linked(notes: &Collection<Note>, id: EntityId) -> Vec<Note> {
    let Some(source) = notes.get(id) else {
        return Vec::new();
    };
    source
        .linked_notes
        .iter()
        .filter_map(|peer| notes.get(*peer).cloned())
        .collect()
}

fn unresolved_side(exists: bool) -> LinkSide {
    if exists {
        LinkSide::PeerMissing
    } else {
        LinkSide::Missing
    }
}

fn attach(notes: &mut Collection<Note>, owner: EntityId, peer: EntityId) -> LinkSide {
    let Some(note) = notes.get_mut(owner) else {
        return LinkSide::Missing;
    };
    if note.is_linked_to(peer) {
        return LinkSide::AlreadyLinked;
    }
    note.linked_notes.push(peer);
    LinkSide::Added
}

//! Entity store facade.
//!
//! # Responsibility
//! - Own every collection, index, link list and the belief log.
//! - Expose the create/query/link/record operation surface.
//!
//! # Invariants
//! - Topic, note and drawing ids come from one shared allocator.
//! - Every created topic/note is tokenized into its inverted index before the
//!   create call returns.
//! - Query results are copies in collection order.
//! - No operation fails: unknown ids are no-ops on mutation and `None`/empty
//!   on query; levels are clamped.

use super::beliefs::BeliefLog;
use super::collection::Collection;
use super::ids::IdAllocator;
use super::links::{self, LinkOutcome};
use super::seed::DEFAULT_TOPICS;
use crate::config::{SearchMode, StoreConfig};
use crate::model::belief::UserBelief;
use crate::model::drawing::{Drawing, Point, Stroke};
use crate::model::note::{Note, NOTE_TYPE_GENERAL};
use crate::model::topic::Topic;
use crate::model::{now_epoch_ms, EntityId};
use crate::search::contains_lowercased;
use crate::search::index::InvertedIndex;
use log::{debug, info};

/// Per-kind record totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreCounts {
    pub topics: usize,
    pub notes: usize,
    pub beliefs: usize,
    pub drawings: usize,
}

/// In-memory owner of all debate records.
///
/// Not synchronized; wrap in a lock if several threads need it.
#[derive(Debug, Clone)]
pub struct DebateStore {
    config: StoreConfig,
    ids: IdAllocator,
    topics: Collection<Topic>,
    notes: Collection<Note>,
    drawings: Collection<Drawing>,
    beliefs: BeliefLog,
    topic_index: InvertedIndex,
    note_index: InvertedIndex,
}

impl Default for DebateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateStore {
    /// Seeded store with substring search.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        let mut store = Self {
            config,
            ids: IdAllocator::new(),
            topics: Collection::new(),
            notes: Collection::new(),
            drawings: Collection::new(),
            beliefs: BeliefLog::new(),
            topic_index: InvertedIndex::new(),
            note_index: InvertedIndex::new(),
        };

        if config.seed_default_topics {
            for seed in DEFAULT_TOPICS {
                store.create_topic(seed.title, seed.description, seed.complexity, seed.category);
            }
        }

        info!(
            "event=store_init module=store status=ok seeded_topics={} topic_tokens={} search_mode={}",
            store.topics.len(),
            store.topic_index.token_count(),
            config.search_mode
        );
        store
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    // Topics

    /// Creates a topic and indexes `title description category`.
    pub fn create_topic(
        &mut self,
        title: &str,
        description: &str,
        complexity: i32,
        category: &str,
    ) -> EntityId {
        let id = self.ids.next_id();
        let topic = Topic::new(id, title, description, complexity, category);
        let tokens = self.topic_index.insert_text(id, &topic.searchable_text());
        debug!(
            "event=topic_create module=store status=ok id={} complexity={} clamped={} tokens={}",
            id,
            topic.complexity_level,
            topic.complexity_level != complexity,
            tokens
        );
        self.topics.push(topic);
        id
    }

    pub fn get_topic(&self, id: EntityId) -> Option<Topic> {
        self.topics.get(id).cloned()
    }

    /// All topics in creation order.
    pub fn topics(&self) -> Vec<Topic> {
        self.topics.iter().cloned().collect()
    }

    /// Topics with `min <= complexity_level <= max`, in creation order.
    ///
    /// An inverted range yields an empty list.
    pub fn get_topics_by_complexity(&self, min: i32, max: i32) -> Vec<Topic> {
        self.topics
            .iter()
            .filter(|topic| topic.in_complexity_range(min, max))
            .cloned()
            .collect()
    }

    /// Searches topic title, description and category.
    ///
    /// Matching follows the configured [`SearchMode`].
    pub fn search_topics(&self, query: &str) -> Vec<Topic> {
        let hits = match self.config.search_mode {
            SearchMode::Substring => {
                let needle = query.to_lowercase();
                self.topics
                    .iter()
                    .filter(|topic| contains_lowercased(&topic.searchable_text(), &needle))
                    .cloned()
                    .collect::<Vec<_>>()
            }
            SearchMode::Token => {
                let ids = self.topic_index.ids_matching_all(query);
                self.topics
                    .iter()
                    .filter(|topic| ids.contains(&topic.id))
                    .cloned()
                    .collect::<Vec<_>>()
            }
        };
        debug!(
            "event=topic_search module=store status=ok mode={} query_len={} hits={}",
            self.config.search_mode,
            query.chars().count(),
            hits.len()
        );
        hits
    }

    /// Raw topic index postings for one token, duplicates included.
    pub fn topic_ids_for_token(&self, token: &str) -> Vec<EntityId> {
        self.topic_index.postings(token).to_vec()
    }

    // Notes

    /// Creates a note and indexes `content topic_tag`.
    ///
    /// Any `note_type` text is accepted.
    pub fn create_note(&mut self, content: &str, topic_tag: &str, note_type: &str) -> EntityId {
        let id = self.ids.next_id();
        let note = Note::new(id, content, topic_tag, note_type, now_epoch_ms());
        let tokens = self.note_index.insert_text(id, &note.searchable_text());
        debug!(
            "event=note_create module=store status=ok id={} content_len={} tokens={}",
            id,
            content.chars().count(),
            tokens
        );
        self.notes.push(note);
        id
    }

    /// Creates a note of the default `general` type.
    pub fn create_general_note(&mut self, content: &str, topic_tag: &str) -> EntityId {
        self.create_note(content, topic_tag, NOTE_TYPE_GENERAL)
    }

    pub fn get_note(&self, id: EntityId) -> Option<Note> {
        self.notes.get(id).cloned()
    }

    /// All notes in creation order.
    pub fn notes(&self) -> Vec<Note> {
        self.notes.iter().cloned().collect()
    }

    /// Searches note content and topic tag.
    ///
    /// Matching follows the configured [`SearchMode`].
    pub fn search_notes(&self, query: &str) -> Vec<Note> {
        let hits = match self.config.search_mode {
            SearchMode::Substring => {
                let needle = query.to_lowercase();
                self.notes
                    .iter()
                    .filter(|note| contains_lowercased(&note.searchable_text(), &needle))
                    .cloned()
                    .collect::<Vec<_>>()
            }
            SearchMode::Token => {
                let ids = self.note_index.ids_matching_all(query);
                self.notes
                    .iter()
                    .filter(|note| ids.contains(&note.id))
                    .cloned()
                    .collect::<Vec<_>>()
            }
        };
        debug!(
            "event=note_search module=store status=ok mode={} query_len={} hits={}",
            self.config.search_mode,
            query.chars().count(),
            hits.len()
        );
        hits
    }

    /// Raw note index postings for one token, duplicates included.
    pub fn note_ids_for_token(&self, token: &str) -> Vec<EntityId> {
        self.note_index.postings(token).to_vec()
    }

    /// Links two notes in both directions.
    ///
    /// Nothing is recorded unless both ids are notes. Repeat calls are no-ops.
    pub fn link_notes(&mut self, first: EntityId, second: EntityId) -> LinkOutcome {
        let outcome = links::link(&mut self.notes, first, second);
        debug!(
            "event=note_link module=store status={} first={} first_side={:?} second={} second_side={:?}",
            if outcome.changed() { "ok" } else { "skipped" },
            first,
            outcome.first,
            second,
            outcome.second
        );
        outcome
    }

    /// Copies of the notes linked to `id`; empty when `id` is unknown.
    pub fn get_linked_notes(&self, id: EntityId) -> Vec<Note> {
        links::linked(&self.notes, id)
    }

    // Beliefs

    /// Appends a belief with the current time. `topic_id` is not validated.
    pub fn record_belief(&mut self, topic_id: EntityId, conviction: i32, position: &str) {
        let belief = UserBelief::new(topic_id, conviction, position, now_epoch_ms());
        debug!(
            "event=belief_record module=store status=ok topic_id={} conviction={} clamped={}",
            topic_id,
            belief.conviction_level,
            belief.conviction_level != conviction
        );
        self.beliefs.append(belief);
    }

    /// Most recently recorded belief for `topic_id`, if any.
    pub fn get_current_belief(&self, topic_id: EntityId) -> Option<UserBelief> {
        self.beliefs.latest(topic_id).cloned()
    }

    /// Current belief, or a synthesized neutral belief stamped now.
    ///
    /// The neutral value is never stored.
    pub fn current_belief_or_neutral(&self, topic_id: EntityId) -> UserBelief {
        self.get_current_belief(topic_id)
            .unwrap_or_else(|| UserBelief::neutral(topic_id, now_epoch_ms()))
    }

    /// Every belief for `topic_id` in recording order.
    pub fn get_belief_history(&self, topic_id: EntityId) -> Vec<UserBelief> {
        self.beliefs.history(topic_id)
    }

    // Drawings

    /// Creates an empty canvas. An empty `note_ref` means no association.
    pub fn create_drawing(&mut self, width: f32, height: f32, note_ref: &str) -> EntityId {
        let id = self.ids.next_id();
        self.drawings.push(Drawing::new(id, width, height, note_ref));
        debug!(
            "event=drawing_create module=store status=ok id={} width={} height={}",
            id, width, height
        );
        id
    }

    /// Appends a stroke stamped now.
    ///
    /// Returns `false` and changes nothing when the drawing does not exist.
    pub fn add_stroke(
        &mut self,
        drawing_id: EntityId,
        points: Vec<Point>,
        width: f32,
        color: &str,
    ) -> bool {
        let Some(drawing) = self.drawings.get_mut(drawing_id) else {
            debug!(
                "event=stroke_add module=store status=skipped drawing_id={} reason=not_found",
                drawing_id
            );
            return false;
        };

        let point_count = points.len();
        drawing.push_stroke(Stroke {
            points,
            stroke_width: width,
            color: color.to_string(),
            timestamp: now_epoch_ms(),
        });
        debug!(
            "event=stroke_add module=store status=ok drawing_id={} points={} strokes={}",
            drawing_id,
            point_count,
            drawing.strokes.len()
        );
        true
    }

    pub fn get_drawing(&self, id: EntityId) -> Option<Drawing> {
        self.drawings.get(id).cloned()
    }

    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            topics: self.topics.len(),
            notes: self.notes.len(),
            beliefs: self.beliefs.len(),
            drawings: self.drawings.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DebateStore;
    use crate::config::StoreConfig;

    #[test]
    fn seeded_store_has_twelve_topics_with_ids_one_to_twelve() {
        let store = DebateStore::new();
        let ids = store.topics().iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }

    #[test]
    fn empty_store_starts_ids_at_one() {
        let mut store = DebateStore::with_config(StoreConfig::empty());
        assert_eq!(store.counts().topics, 0);
        assert_eq!(store.create_drawing(1.0, 1.0, ""), 1);
    }

    #[test]
    fn topic_index_covers_title_description_and_category() {
        let mut store = DebateStore::with_config(StoreConfig::empty());
        let id = store.create_topic("Tax Reform", "tax the rich?", 4, "Economics");
        assert_eq!(store.topic_ids_for_token("tax"), vec![id, id]);
        assert_eq!(store.topic_ids_for_token("rich?"), vec![id]);
        assert_eq!(store.topic_ids_for_token("economics"), vec![id]);
        assert!(store.topic_ids_for_token("rich").is_empty());
    }
}

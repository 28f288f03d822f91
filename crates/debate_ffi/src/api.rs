//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the store operation surface to Dart via FRB.
//! - Flatten core records into plain item structs for the UI.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Each `DebateSession` owns exactly one store; sessions never share state.
//! - Absence is explicit: `Option` for drawings, `is_default` for beliefs.

use debate_core::model::note::{is_known_note_type, NOTE_TYPE_GENERAL};
use debate_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    parse_search_mode, ping as ping_inner, DebateStore, Drawing, Note, Point, SearchMode,
    StoreConfig, Stroke, Topic, UserBelief,
};
use log::warn;
use std::sync::OnceLock;

const SEARCH_MODE_ENV: &str = "DEBATE_SEARCH_MODE";
static ENV_SEARCH_MODE: OnceLock<SearchMode> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Flat topic record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub complexity_level: i32,
    pub category: String,
}

impl From<Topic> for TopicItem {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title,
            description: topic.description,
            complexity_level: topic.complexity_level,
            category: topic.category,
        }
    }
}

/// Flat note record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: i64,
    pub content: String,
    pub topic_tag: String,
    /// `claim|evidence|rebuttal|general` by convention; any text is kept.
    pub note_type: String,
    /// Whether `note_type` is one of the conventional types the UI styles.
    pub is_known_type: bool,
    pub created_at_ms: i64,
}

impl From<Note> for NoteItem {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            content: note.content,
            topic_tag: note.topic_tag,
            is_known_type: is_known_note_type(&note.note_type),
            note_type: note.note_type,
            created_at_ms: note.created_at,
        }
    }
}

/// Flat belief record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeliefItem {
    pub topic_id: i64,
    pub conviction_level: i32,
    pub position: String,
    pub recorded_at_ms: i64,
    /// `true` when nothing was recorded and this is the neutral stand-in.
    pub is_default: bool,
}

impl BeliefItem {
    fn recorded(belief: UserBelief) -> Self {
        Self::build(belief, false)
    }

    fn build(belief: UserBelief, is_default: bool) -> Self {
        Self {
            topic_id: belief.topic_id,
            conviction_level: belief.conviction_level,
            position: belief.position,
            recorded_at_ms: belief.recorded_at,
            is_default,
        }
    }
}

/// Canvas coordinate, `{x, y}` on the Dart side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointItem {
    pub x: f32,
    pub y: f32,
}

/// Flat stroke record.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeItem {
    pub points: Vec<PointItem>,
    pub stroke_width: f32,
    pub color: String,
}

impl From<Stroke> for StrokeItem {
    fn from(stroke: Stroke) -> Self {
        Self {
            points: stroke
                .points
                .into_iter()
                .map(|point| PointItem {
                    x: point.x,
                    y: point.y,
                })
                .collect(),
            stroke_width: stroke.stroke_width,
            color: stroke.color,
        }
    }
}

/// Flat drawing record.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingItem {
    pub id: i64,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Empty when the drawing is not associated with a note.
    pub associated_note_id: String,
    pub strokes: Vec<StrokeItem>,
}

impl From<Drawing> for DrawingItem {
    fn from(drawing: Drawing) -> Self {
        Self {
            id: drawing.id,
            canvas_width: drawing.canvas_width,
            canvas_height: drawing.canvas_height,
            associated_note_id: drawing.associated_note_id.unwrap_or_default(),
            strokes: drawing.strokes.into_iter().map(StrokeItem::from).collect(),
        }
    }
}

/// One UI session owning its own store.
///
/// The Dart side holds this as an opaque handle and passes it to every call.
#[flutter_rust_bridge::frb(opaque)]
pub struct DebateSession {
    store: DebateStore,
}

impl Default for DebateSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateSession {
    /// Opens a seeded session. Search mode comes from `DEBATE_SEARCH_MODE`,
    /// falling back to substring search.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new() -> Self {
        let config = StoreConfig::default().with_search_mode(resolve_env_search_mode());
        Self {
            store: DebateStore::with_config(config),
        }
    }

    /// Opens a session with explicit options.
    ///
    /// An unparseable `search_mode` falls back to substring search and is
    /// logged; the call never fails.
    #[flutter_rust_bridge::frb(sync)]
    pub fn with_options(seed_default_topics: bool, search_mode: String) -> Self {
        let search_mode = parse_search_mode(&search_mode).unwrap_or_else(|err| {
            warn!("event=session_open module=ffi status=fallback error={err}");
            SearchMode::default()
        });
        let config = StoreConfig {
            seed_default_topics,
            search_mode,
        };
        Self {
            store: DebateStore::with_config(config),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn search_mode(&self) -> String {
        self.store.config().search_mode.as_str().to_string()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn create_topic(
        &mut self,
        title: String,
        description: String,
        complexity: i32,
        category: String,
    ) -> i64 {
        self.store
            .create_topic(&title, &description, complexity, &category)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn get_topics_by_complexity(&self, min_level: i32, max_level: i32) -> Vec<TopicItem> {
        self.store
            .get_topics_by_complexity(min_level, max_level)
            .into_iter()
            .map(TopicItem::from)
            .collect()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn search_topics(&self, query: String) -> Vec<TopicItem> {
        self.store
            .search_topics(&query)
            .into_iter()
            .map(TopicItem::from)
            .collect()
    }

    /// Creates a note; `note_type = None` means `general`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn create_note(
        &mut self,
        content: String,
        topic_tag: String,
        note_type: Option<String>,
    ) -> i64 {
        let note_type = note_type.as_deref().unwrap_or(NOTE_TYPE_GENERAL);
        self.store.create_note(&content, &topic_tag, note_type)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn link_notes(&mut self, note1_id: i64, note2_id: i64) {
        self.store.link_notes(note1_id, note2_id);
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn get_linked_notes(&self, note_id: i64) -> Vec<NoteItem> {
        self.store
            .get_linked_notes(note_id)
            .into_iter()
            .map(NoteItem::from)
            .collect()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn search_notes(&self, query: String) -> Vec<NoteItem> {
        self.store
            .search_notes(&query)
            .into_iter()
            .map(NoteItem::from)
            .collect()
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn record_belief(&mut self, topic_id: i64, conviction: i32, position: String) {
        self.store.record_belief(topic_id, conviction, &position);
    }

    /// Current belief for a topic, or the neutral stand-in flagged with
    /// `is_default = true`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn get_user_belief(&self, topic_id: i64) -> BeliefItem {
        match self.store.get_current_belief(topic_id) {
            Some(belief) => BeliefItem::recorded(belief),
            None => BeliefItem::build(self.store.current_belief_or_neutral(topic_id), true),
        }
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn get_belief_history(&self, topic_id: i64) -> Vec<BeliefItem> {
        self.store
            .get_belief_history(topic_id)
            .into_iter()
            .map(BeliefItem::recorded)
            .collect()
    }

    /// Creates a canvas; `note_id = None` means no associated note.
    #[flutter_rust_bridge::frb(sync)]
    pub fn create_drawing(&mut self, width: f32, height: f32, note_id: Option<String>) -> i64 {
        self.store
            .create_drawing(width, height, note_id.as_deref().unwrap_or_default())
    }

    /// Returns `false` when the drawing does not exist.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_stroke_to_drawing(
        &mut self,
        drawing_id: i64,
        points: Vec<PointItem>,
        width: f32,
        color: String,
    ) -> bool {
        let points = points
            .into_iter()
            .map(|point| Point::new(point.x, point.y))
            .collect();
        self.store.add_stroke(drawing_id, points, width, &color)
    }

    #[flutter_rust_bridge::frb(sync)]
    pub fn get_drawing(&self, drawing_id: i64) -> Option<DrawingItem> {
        self.store.get_drawing(drawing_id).map(DrawingItem::from)
    }
}

fn resolve_env_search_mode() -> SearchMode {
    *ENV_SEARCH_MODE.get_or_init(|| match std::env::var(SEARCH_MODE_ENV) {
        Ok(raw) if !raw.trim().is_empty() => parse_search_mode(&raw).unwrap_or_else(|err| {
            warn!(
                "event=config_resolve module=ffi status=fallback key={} error={}",
                SEARCH_MODE_ENV, err
            );
            SearchMode::default()
        }),
        _ => SearchMode::default(),
    })
}

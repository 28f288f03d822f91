//! Recorded user belief model.

use super::{clamp_level, EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// Position reported for a topic with no recorded beliefs.
pub const POSITION_NEUTRAL: &str = "neutral";

/// Conviction reported for a topic with no recorded beliefs.
pub const NEUTRAL_CONVICTION: i32 = 5;

/// One immutable entry of the belief history.
///
/// Beliefs have no id of their own; identity is `(topic_id, append order)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBelief {
    /// Not validated against existing topics.
    pub topic_id: EntityId,
    /// Always within `[1, 10]`.
    pub conviction_level: i32,
    pub position: String,
    pub recorded_at: Timestamp,
}

impl UserBelief {
    /// Builds a belief, clamping `conviction` into `[1, 10]`.
    pub fn new(
        topic_id: EntityId,
        conviction: i32,
        position: impl Into<String>,
        recorded_at: Timestamp,
    ) -> Self {
        Self {
            topic_id,
            conviction_level: clamp_level(conviction),
            position: position.into(),
            recorded_at,
        }
    }

    /// Synthesized stand-in for a topic without history. Never stored.
    pub fn neutral(topic_id: EntityId, recorded_at: Timestamp) -> Self {
        Self::new(topic_id, NEUTRAL_CONVICTION, POSITION_NEUTRAL, recorded_at)
    }
}

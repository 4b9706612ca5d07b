//! Ranking-phase entities

use crate::group::entities::{GroupId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a recommended topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(i64);

impl TopicId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TopicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A candidate topic, scoped to exactly one group
///
/// Immutable for ranking purposes within a consensus run: the universe of
/// topics a run considers is the group's current topic set, and a topic
/// with no submitted rankings still participates with default values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub group_id: GroupId,
    pub name: String,
}

impl Topic {
    pub fn new(id: TopicId, group_id: GroupId, name: impl Into<String>) -> Self {
        Self {
            id,
            group_id,
            name: name.into(),
        }
    }
}

/// One user's final position for one topic
///
/// Unique per (group, user, topic). A resubmission replaces the user's
/// whole set of rows for the group, so positions never mix submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRanking {
    pub group_id: GroupId,
    pub user_id: UserId,
    pub topic_id: TopicId,
    pub position: i64,
    pub label: Option<String>,
}

impl TopicRanking {
    pub fn new(group_id: GroupId, user_id: UserId, topic_id: TopicId, position: i64) -> Self {
        Self {
            group_id,
            user_id,
            topic_id,
            position,
            label: None,
        }
    }

    /// Attach the free-text label the user gave this topic
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A user's progress through the deliberation phases for one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseRecord {
    pub group_id: GroupId,
    pub user_id: UserId,
    pub phase: u8,
    pub completed_at: Option<DateTime<Utc>>,
}

impl PhaseRecord {
    /// Phase reached once a user has submitted their final ranking
    pub const RANKING_COMPLETE: u8 = 2;

    pub fn new(group_id: GroupId, user_id: UserId, phase: u8) -> Self {
        Self {
            group_id,
            user_id,
            phase,
            completed_at: None,
        }
    }

    pub fn completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.completed_at = Some(at);
        self
    }
}

/// One computed consensus value per topic per group
///
/// A derived, fully-replaceable cache: every run replaces all of a
/// group's rows in a single step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusResult {
    pub group_id: GroupId,
    pub topic_id: TopicId,
    pub final_value: f64,
}

impl ConsensusResult {
    pub fn new(group_id: GroupId, topic_id: TopicId, final_value: f64) -> Self {
        Self {
            group_id,
            topic_id,
            final_value,
        }
    }
}

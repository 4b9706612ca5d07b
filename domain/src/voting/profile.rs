//! Assembled voting input
//!
//! A [`RankingProfile`] is the aligned, read-optimized structure both
//! voting engines consume: the group's topics (sorted lexicographically
//! by name), the qualifying participants, and per-topic maps of submitted
//! positions, expertise levels, and label strings.

use crate::ranking::entities::Topic;
use crate::ranking::expertise::ExpertiseLevel;
use std::collections::HashMap;

/// Per-group voting data, keyed by topic name
///
/// Default-value policy: a participant who never rated a topic has
/// expertise [`ExpertiseLevel::MIN`]; a participant who never ranked a
/// topic has no position entry (each engine decides what absence means).
/// Data addressed to a topic outside the group's set is discarded rather
/// than growing the key space.
#[derive(Debug, Clone, Default)]
pub struct RankingProfile {
    topics: Vec<Topic>,
    participants: Vec<String>,
    positions: HashMap<String, HashMap<String, i64>>,
    expertise: HashMap<String, HashMap<String, ExpertiseLevel>>,
    labels: HashMap<String, Vec<String>>,
}

impl RankingProfile {
    /// Build an empty profile over the given topics and participants
    ///
    /// Topics are sorted by name; that order is the stable tie-break
    /// order of every engine output.
    pub fn new(mut topics: Vec<Topic>, participants: Vec<String>) -> Self {
        topics.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            topics,
            participants,
            positions: HashMap::new(),
            expertise: HashMap::new(),
            labels: HashMap::new(),
        }
    }

    fn contains_topic(&self, name: &str) -> bool {
        self.topics
            .binary_search_by(|t| t.name.as_str().cmp(name))
            .is_ok()
    }

    /// Record a participant's submitted position for a topic
    pub fn set_position(&mut self, topic: &str, username: &str, position: i64) {
        if !self.contains_topic(topic) {
            return;
        }
        self.positions
            .entry(topic.to_string())
            .or_default()
            .insert(username.to_string(), position);
    }

    /// Record a participant's expertise level for a topic
    pub fn set_expertise(&mut self, topic: &str, username: &str, level: ExpertiseLevel) {
        if !self.contains_topic(topic) {
            return;
        }
        self.expertise
            .entry(topic.to_string())
            .or_default()
            .insert(username.to_string(), level);
    }

    /// Attach a human-readable label string to a topic
    pub fn add_label(&mut self, topic: &str, label: String) {
        if !self.contains_topic(topic) {
            return;
        }
        self.labels.entry(topic.to_string()).or_default().push(label);
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Topic names in the profile's stable (lexicographic) order
    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.name.as_str())
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// The position a participant gave a topic, if they ranked it
    pub fn position(&self, topic: &str, username: &str) -> Option<i64> {
        self.positions.get(topic).and_then(|m| m.get(username)).copied()
    }

    /// The expertise weight a participant carries for a topic
    ///
    /// This is the single place the default applies: participants without
    /// a stored rating weigh in at [`ExpertiseLevel::MIN`].
    pub fn expertise(&self, topic: &str, username: &str) -> ExpertiseLevel {
        self.expertise
            .get(topic)
            .and_then(|m| m.get(username))
            .copied()
            .unwrap_or_default()
    }

    /// All submitted (participant, position) pairs for a topic
    pub fn ranked_positions(&self, topic: &str) -> impl Iterator<Item = (&str, i64)> {
        self.positions
            .get(topic)
            .into_iter()
            .flatten()
            .map(|(user, pos)| (user.as_str(), *pos))
    }

    /// Label strings attached to a topic, possibly empty
    pub fn labels(&self, topic: &str) -> &[String] {
        self.labels.get(topic).map(Vec::as_slice).unwrap_or(&[])
    }
}

//! Expertise weights
//!
//! Users rate their expertise per topic on a 0-100 scale; the platform
//! stores the compressed 1-10 level and uses it to weight that user's
//! influence in Positional Voting. A user who never rated a topic weighs
//! in at the minimum level of 1.

use crate::group::entities::{GroupId, UserId};
use crate::ranking::entities::TopicId;
use serde::{Deserialize, Serialize};

/// Expertise level in `1..=10`
///
/// # Example
///
/// ```
/// use consensus_domain::ExpertiseLevel;
///
/// assert_eq!(ExpertiseLevel::from_percent(85).get(), 8);
/// assert_eq!(ExpertiseLevel::from_percent(0).get(), 1);   // floor at 1
/// assert_eq!(ExpertiseLevel::from_percent(250).get(), 10); // clamped input
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpertiseLevel(u8);

impl ExpertiseLevel {
    /// The default weight for users who never rated a topic
    pub const MIN: ExpertiseLevel = ExpertiseLevel(1);
    pub const MAX: ExpertiseLevel = ExpertiseLevel(10);

    /// Compress a 0-100 rating into the stored 1-10 level
    ///
    /// Out-of-range input is clamped into `0..=100` first; the result is
    /// `max(1, value / 10)`, so every rating below 20 lands on level 1.
    pub fn from_percent(value: i64) -> Self {
        let clamped = value.clamp(0, 100);
        Self(((clamped / 10).max(1)) as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for ExpertiseLevel {
    fn default() -> Self {
        Self::MIN
    }
}

impl std::fmt::Display for ExpertiseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One user's expertise level for one topic
///
/// Unique per (group, user, topic); re-rating replaces the prior row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertiseRating {
    pub group_id: GroupId,
    pub user_id: UserId,
    pub topic_id: TopicId,
    pub level: ExpertiseLevel,
}

impl ExpertiseRating {
    pub fn new(group_id: GroupId, user_id: UserId, topic_id: TopicId, level: ExpertiseLevel) -> Self {
        Self {
            group_id,
            user_id,
            topic_id,
            level,
        }
    }
}

//! Group and participant entities

use super::voting_mode::VotingMode;
use serde::{Deserialize, Serialize};

/// Identifier of a deliberation group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupId(i64);

impl GroupId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for GroupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a platform user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A group member
///
/// The `username` is the key used throughout the assembled voting data;
/// `display_name` only feeds human-readable label strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: UserId,
    pub username: String,
    pub display_name: String,
}

impl Participant {
    pub fn new(id: UserId, username: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            display_name: display_name.into(),
        }
    }
}

/// A deliberation group
///
/// The voting mode is fixed at group-creation time and selects which
/// engine a consensus run uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub voting_mode: VotingMode,
    #[serde(default)]
    pub members: Vec<Participant>,
}

impl Group {
    pub fn new(id: GroupId, name: impl Into<String>, voting_mode: VotingMode) -> Self {
        Self {
            id,
            name: name.into(),
            voting_mode,
            members: Vec::new(),
        }
    }

    /// Builder-style member registration
    pub fn with_member(mut self, member: Participant) -> Self {
        self.members.push(member);
        self
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Look up a member by id
    pub fn member(&self, id: UserId) -> Option<&Participant> {
        self.members.iter().find(|m| m.id == id)
    }
}

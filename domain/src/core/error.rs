//! Domain error types

use crate::group::entities::GroupId;
use thiserror::Error;

/// Domain-level errors
///
/// Every error here is terminal for the current consensus run: there are
/// no retries and no partial results. The caller maps these to whatever
/// user-facing representation it owns.
#[derive(Error, Debug)]
pub enum ConsensusError {
    #[error("Group {0} does not exist")]
    GroupNotFound(GroupId),

    #[error("No topic named {0:?} in this group")]
    TopicNotFound(String),

    #[error("Not all users have completed phase 1 and 2 ({completed} of {total})")]
    PhaseIncomplete { completed: usize, total: usize },

    #[error("Unknown voting mode: {0:?}")]
    InvalidVotingMode(String),
}

impl ConsensusError {
    /// Check whether this error is the participant-completeness precondition
    pub fn is_phase_incomplete(&self) -> bool {
        matches!(self, ConsensusError::PhaseIncomplete { .. })
    }
}

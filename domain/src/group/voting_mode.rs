//! Voting mode configuration
//!
//! A group picks one of two ranking rules when it is created. The stored
//! string forms ("Positional Voting" / "Non-Positional Voting") are the
//! only ones accepted; anything else is an explicit error rather than a
//! silently skipped run.

use crate::core::error::ConsensusError;
use serde::{Deserialize, Serialize};

/// Rule used to compute a group's consensus ranking
///
/// - `Positional`: expertise-weighted mean of submitted positions
/// - `Schulze`: Condorcet-consistent strongest-path ranking
///
/// # Example
///
/// ```
/// use consensus_domain::VotingMode;
///
/// let mode: VotingMode = "Positional Voting".parse().unwrap();
/// assert_eq!(mode, VotingMode::Positional);
/// assert!("Approval Voting".parse::<VotingMode>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VotingMode {
    /// Weighted positional average
    #[default]
    #[serde(rename = "Positional Voting")]
    Positional,

    /// Schulze strongest-path method
    #[serde(rename = "Non-Positional Voting")]
    Schulze,
}

impl VotingMode {
    /// The string form persisted by the platform
    pub fn as_str(&self) -> &'static str {
        match self {
            VotingMode::Positional => "Positional Voting",
            VotingMode::Schulze => "Non-Positional Voting",
        }
    }
}

impl std::fmt::Display for VotingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VotingMode {
    type Err = ConsensusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positional Voting" => Ok(VotingMode::Positional),
            "Non-Positional Voting" => Ok(VotingMode::Schulze),
            other => Err(ConsensusError::InvalidVotingMode(other.to_string())),
        }
    }
}

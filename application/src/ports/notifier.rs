//! Consensus completion notification port
//!
//! The orchestrator hands the finished payload to a notifier so an outer
//! layer can broadcast it; delivery mechanics stay outside the core.

use crate::use_cases::compute_consensus::ConsensusSummary;
use consensus_domain::GroupId;

/// Callback invoked after a consensus run has been computed and stored
pub trait ConsensusNotifier: Send + Sync {
    fn consensus_completed(&self, group_id: GroupId, summary: &ConsensusSummary);
}

/// No-op notifier for when nobody is listening
pub struct NoNotifier;

impl ConsensusNotifier for NoNotifier {
    fn consensus_completed(&self, _group_id: GroupId, _summary: &ConsensusSummary) {}
}

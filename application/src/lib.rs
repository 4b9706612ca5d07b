//! Application layer for topic-consensus
//!
//! This crate hosts the two use cases of the consensus core and the ports
//! they depend on:
//!
//! - [`AssembleProfileUseCase`] (the Data Assembler) gathers a group's
//!   topics, qualifying participants, positions, expertise, and labels
//!   into a [`consensus_domain::RankingProfile`].
//! - [`ComputeConsensusUseCase`] (the Ranking Orchestrator) dispatches to
//!   the engine selected by the group's voting mode, replaces the stored
//!   results atomically, and returns the ordered payload.
//!
//! Store implementations live in the infrastructure layer.

pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use ports::notifier::{ConsensusNotifier, NoNotifier};
pub use ports::stores::{
    ConsensusStores, ExpertiseStore, GroupStore, PhaseStore, RankingStore, ResultStore,
    StoreError, TopicStore,
};
pub use use_cases::assemble_profile::{
    AssembleProfileError, AssembleProfileUseCase, AssembledProfile,
};
pub use use_cases::compute_consensus::{
    ComputeConsensusError, ComputeConsensusUseCase, ConsensusSummary, NO_LABELS_SENTINEL,
    RankedTopic,
};

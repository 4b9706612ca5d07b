//! Store ports
//!
//! Typed repository interfaces for everything a consensus run reads and
//! writes. The engines never touch these; all data is fetched up front by
//! the assembler, and only the orchestrator writes.

use async_trait::async_trait;
use consensus_domain::{
    ConsensusResult, ExpertiseRating, Group, GroupId, Topic, TopicRanking, UserId,
};
use thiserror::Error;

/// Opaque failure raised by a store adapter
#[derive(Error, Debug)]
#[error("Store failure: {0}")]
pub struct StoreError(String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Group lookup by id, including members and voting configuration
#[async_trait]
pub trait GroupStore: Send + Sync {
    async fn find_group(&self, group_id: GroupId) -> Result<Option<Group>, StoreError>;
}

/// Lookup of users who reached a deliberation phase
#[async_trait]
pub trait PhaseStore: Send + Sync {
    async fn users_in_phase(&self, group_id: GroupId, phase: u8)
    -> Result<Vec<UserId>, StoreError>;
}

/// The group's candidate topics, with stable identity and name
#[async_trait]
pub trait TopicStore: Send + Sync {
    async fn topics_for_group(&self, group_id: GroupId) -> Result<Vec<Topic>, StoreError>;
}

/// Per-user per-topic submitted positions and labels
#[async_trait]
pub trait RankingStore: Send + Sync {
    async fn rankings_for_group(&self, group_id: GroupId)
    -> Result<Vec<TopicRanking>, StoreError>;

    /// Replace a user's whole submitted ordering in one step
    ///
    /// Resubmission semantics: the user's prior rows for the group are
    /// dropped and the new set is inserted, so positions never mix
    /// submissions.
    async fn replace_user_rankings(
        &self,
        group_id: GroupId,
        user_id: UserId,
        rankings: Vec<TopicRanking>,
    ) -> Result<(), StoreError>;
}

/// Per-user per-topic expertise levels
#[async_trait]
pub trait ExpertiseStore: Send + Sync {
    async fn expertise_for_group(
        &self,
        group_id: GroupId,
    ) -> Result<Vec<ExpertiseRating>, StoreError>;
}

/// The replaceable consensus-result cache
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Replace all of the group's rows atomically
    ///
    /// A reader must never observe the cleared-but-not-rewritten state
    /// between runs.
    async fn replace_results(
        &self,
        group_id: GroupId,
        results: Vec<ConsensusResult>,
    ) -> Result<(), StoreError>;

    async fn results_for_group(
        &self,
        group_id: GroupId,
    ) -> Result<Vec<ConsensusResult>, StoreError>;
}

/// Everything a consensus run needs from storage
pub trait ConsensusStores:
    GroupStore + PhaseStore + TopicStore + RankingStore + ExpertiseStore + ResultStore
{
}

impl<T> ConsensusStores for T where
    T: GroupStore + PhaseStore + TopicStore + RankingStore + ExpertiseStore + ResultStore
{
}

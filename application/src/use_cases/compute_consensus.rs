//! Ranking Orchestrator use case
//!
//! Runs the engine selected by the group's voting mode over the assembled
//! profile, replaces the group's stored consensus rows in one atomic
//! step, and returns the ordered payload. Assembler failures propagate
//! unchanged; there are no retries and no partial writes.

use crate::ports::notifier::{ConsensusNotifier, NoNotifier};
use crate::ports::stores::{ConsensusStores, StoreError};
use crate::use_cases::assemble_profile::{
    AssembleProfileError, AssembleProfileUseCase, AssembledProfile,
};
use consensus_domain::{
    ConsensusError, ConsensusResult, GroupId, TopicId, VotingMode, rank_by_strongest_path,
    rank_by_weighted_position,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Placeholder shown when nobody labeled a topic
pub const NO_LABELS_SENTINEL: &str = "There aren't labels";

/// Errors that can occur during a consensus run
#[derive(Error, Debug)]
pub enum ComputeConsensusError {
    #[error(transparent)]
    Assemble(#[from] AssembleProfileError),

    #[error(transparent)]
    Consensus(#[from] ConsensusError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One topic in the computed group ordering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedTopic {
    pub id_topic: TopicId,
    pub topic_name: String,
    pub final_value: f64,
    pub labels: Vec<String>,
}

/// The payload a consensus run returns (and broadcasts via the notifier)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusSummary {
    pub message: String,
    pub results: Vec<RankedTopic>,
}

/// Use case for computing and storing a group's consensus ranking
pub struct ComputeConsensusUseCase<S: ConsensusStores> {
    stores: Arc<S>,
    assembler: AssembleProfileUseCase<S>,
}

impl<S: ConsensusStores> ComputeConsensusUseCase<S> {
    pub fn new(stores: Arc<S>) -> Self {
        Self {
            assembler: AssembleProfileUseCase::new(Arc::clone(&stores)),
            stores,
        }
    }

    /// Execute the run without broadcasting
    pub async fn execute(&self, group_id: GroupId) -> Result<ConsensusSummary, ComputeConsensusError> {
        self.execute_with_notifier(group_id, &NoNotifier).await
    }

    /// Execute the run and hand the payload to a notifier
    pub async fn execute_with_notifier(
        &self,
        group_id: GroupId,
        notifier: &dyn ConsensusNotifier,
    ) -> Result<ConsensusSummary, ComputeConsensusError> {
        let AssembledProfile { group, profile } = self.assembler.execute(group_id).await?;

        info!(
            "Computing consensus for group {} over {} topics using {}",
            group_id,
            profile.topic_count(),
            group.voting_mode
        );

        let ranked = match group.voting_mode {
            VotingMode::Positional => rank_by_weighted_position(&profile),
            VotingMode::Schulze => rank_by_strongest_path(&profile),
        };

        let topic_ids: HashMap<&str, TopicId> = profile
            .topics()
            .iter()
            .map(|t| (t.name.as_str(), t.id))
            .collect();

        let mut rows = Vec::with_capacity(ranked.len());
        let mut results = Vec::with_capacity(ranked.len());
        for entry in ranked {
            let id_topic = topic_ids
                .get(entry.name.as_str())
                .copied()
                .ok_or_else(|| ConsensusError::TopicNotFound(entry.name.clone()))?;

            let labels = match profile.labels(&entry.name) {
                [] => vec![NO_LABELS_SENTINEL.to_string()],
                labels => labels.to_vec(),
            };

            debug!(
                "Consensus result - topic: {}, value: {}",
                entry.name, entry.score
            );
            rows.push(ConsensusResult::new(group_id, id_topic, entry.score));
            results.push(RankedTopic {
                id_topic,
                topic_name: entry.name,
                final_value: entry.score,
                labels,
            });
        }

        // One call: a reader never sees the cache half-rewritten
        self.stores.replace_results(group_id, rows).await?;

        let summary = ConsensusSummary {
            message: "Consensus calculations completed.".to_string(),
            results,
        };
        notifier.consensus_completed(group_id, &summary);
        info!("Consensus calculations completed for group {}", group_id);

        Ok(summary)
    }
}

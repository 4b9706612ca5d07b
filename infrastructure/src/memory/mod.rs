//! In-memory store suite
//!
//! One struct implements every store port behind a single `RwLock`, so
//! cross-store reads within a run see one coherent snapshot per call and
//! the result cache swaps atomically. Seeding methods mirror the
//! platform's write semantics: ranking resubmission replaces the user's
//! prior rows, expertise re-rating updates in place, and phase completion
//! is recorded once per (user, phase).

use async_trait::async_trait;
use chrono::Utc;
use consensus_application::{
    ExpertiseStore, GroupStore, PhaseStore, RankingStore, ResultStore, StoreError, TopicStore,
};
use consensus_domain::{
    ConsensusResult, ExpertiseLevel, ExpertiseRating, Group, GroupId, PhaseRecord, Topic, TopicId,
    TopicRanking, UserId,
};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct State {
    groups: HashMap<GroupId, Group>,
    topics: HashMap<GroupId, Vec<Topic>>,
    rankings: HashMap<GroupId, Vec<TopicRanking>>,
    expertise: HashMap<GroupId, Vec<ExpertiseRating>>,
    phases: HashMap<GroupId, Vec<PhaseRecord>>,
    results: HashMap<GroupId, Vec<ConsensusResult>>,
}

/// Every consensus store port, backed by process memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_group(&self, group: Group) {
        let mut state = self.state.write().await;
        state.groups.insert(group.id, group);
    }

    pub async fn insert_topic(&self, topic: Topic) {
        let mut state = self.state.write().await;
        state.topics.entry(topic.group_id).or_default().push(topic);
    }

    /// Record a user's expertise rating on the platform's 0-100 scale
    ///
    /// Update-or-create per (user, topic): re-rating replaces the prior
    /// row. The stored level is the compressed 1-10 value.
    pub async fn rate_expertise(
        &self,
        group_id: GroupId,
        user_id: UserId,
        topic_id: TopicId,
        percent: i64,
    ) {
        let level = ExpertiseLevel::from_percent(percent);
        debug!(
            "Expertise for user {} on topic {}: {} ({}%)",
            user_id, topic_id, level, percent
        );

        let mut state = self.state.write().await;
        let rows = state.expertise.entry(group_id).or_default();
        rows.retain(|r| !(r.user_id == user_id && r.topic_id == topic_id));
        rows.push(ExpertiseRating::new(group_id, user_id, topic_id, level));
    }

    /// Mark a user as having completed a deliberation phase
    pub async fn complete_phase(&self, group_id: GroupId, user_id: UserId, phase: u8) {
        let mut state = self.state.write().await;
        let rows = state.phases.entry(group_id).or_default();
        if let Some(existing) = rows
            .iter_mut()
            .find(|p| p.user_id == user_id && p.phase == phase)
        {
            existing.completed_at = Some(Utc::now());
        } else {
            rows.push(PhaseRecord::new(group_id, user_id, phase).completed_at(Utc::now()));
        }
    }

    /// Submit a user's final ordering, replacing any prior submission
    pub async fn submit_ranking(
        &self,
        group_id: GroupId,
        user_id: UserId,
        rankings: Vec<TopicRanking>,
    ) -> Result<(), StoreError> {
        self.replace_user_rankings(group_id, user_id, rankings).await
    }
}

#[async_trait]
impl GroupStore for InMemoryStore {
    async fn find_group(&self, group_id: GroupId) -> Result<Option<Group>, StoreError> {
        let state = self.state.read().await;
        Ok(state.groups.get(&group_id).cloned())
    }
}

#[async_trait]
impl PhaseStore for InMemoryStore {
    async fn users_in_phase(
        &self,
        group_id: GroupId,
        phase: u8,
    ) -> Result<Vec<UserId>, StoreError> {
        let state = self.state.read().await;
        Ok(state
            .phases
            .get(&group_id)
            .into_iter()
            .flatten()
            .filter(|p| p.phase == phase)
            .map(|p| p.user_id)
            .collect())
    }
}

#[async_trait]
impl TopicStore for InMemoryStore {
    async fn topics_for_group(&self, group_id: GroupId) -> Result<Vec<Topic>, StoreError> {
        let state = self.state.read().await;
        Ok(state.topics.get(&group_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl RankingStore for InMemoryStore {
    async fn rankings_for_group(
        &self,
        group_id: GroupId,
    ) -> Result<Vec<TopicRanking>, StoreError> {
        let state = self.state.read().await;
        Ok(state.rankings.get(&group_id).cloned().unwrap_or_default())
    }

    async fn replace_user_rankings(
        &self,
        group_id: GroupId,
        user_id: UserId,
        rankings: Vec<TopicRanking>,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        let rows = state.rankings.entry(group_id).or_default();
        rows.retain(|r| r.user_id != user_id);
        rows.extend(rankings);
        Ok(())
    }
}

#[async_trait]
impl ExpertiseStore for InMemoryStore {
    async fn expertise_for_group(
        &self,
        group_id: GroupId,
    ) -> Result<Vec<ExpertiseRating>, StoreError> {
        let state = self.state.read().await;
        Ok(state.expertise.get(&group_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl ResultStore for InMemoryStore {
    async fn replace_results(
        &self,
        group_id: GroupId,
        results: Vec<ConsensusResult>,
    ) -> Result<(), StoreError> {
        // One write lock: the old rows vanish and the new ones land in
        // the same step
        let mut state = self.state.write().await;
        debug!(
            "Replacing {} consensus rows for group {}",
            results.len(),
            group_id
        );
        state.results.insert(group_id, results);
        Ok(())
    }

    async fn results_for_group(
        &self,
        group_id: GroupId,
    ) -> Result<Vec<ConsensusResult>, StoreError> {
        let state = self.state.read().await;
        Ok(state.results.get(&group_id).cloned().unwrap_or_default())
    }
}

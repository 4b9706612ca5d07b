//! In-memory store fakes shared by the use-case tests

use crate::ports::stores::{
    ExpertiseStore, GroupStore, PhaseStore, RankingStore, ResultStore, StoreError, TopicStore,
};
use async_trait::async_trait;
use consensus_domain::{
    ConsensusResult, ExpertiseLevel, ExpertiseRating, Group, GroupId, Participant, PhaseRecord,
    Topic, TopicId, TopicRanking, UserId, VotingMode,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Vector-backed stand-in for the whole store suite
#[derive(Default)]
pub(crate) struct FakeStores {
    pub groups: Vec<Group>,
    pub topics: Vec<Topic>,
    pub rankings: Vec<TopicRanking>,
    pub expertise: Vec<ExpertiseRating>,
    pub phases: Vec<PhaseRecord>,
    pub results: Mutex<HashMap<GroupId, Vec<ConsensusResult>>>,
}

impl FakeStores {
    pub const GROUP: GroupId = GroupId::new(1);
    pub const USER1: UserId = UserId::new(10);
    pub const USER2: UserId = UserId::new(11);
    pub const USER3: UserId = UserId::new(12);
    pub const TOPIC_AI: TopicId = TopicId::new(1);
    pub const TOPIC_IOT: TopicId = TopicId::new(2);

    /// A two-user Positional Voting scenario that ends in an exact tie
    ///
    /// user1 ranks AI=2, IoT=1 (AI labeled "promising") with expertise
    /// AI=10; user2 ranks AI=1, IoT=2 with expertise IoT=10. Both topics
    /// score 21/11 and the tie resolves to AI first.
    pub fn two_user_group() -> Self {
        let group = Group::new(Self::GROUP, "travel-tech", VotingMode::Positional)
            .with_member(Participant::new(Self::USER1, "user1", "User One"))
            .with_member(Participant::new(Self::USER2, "user2", "User Two"));

        Self {
            groups: vec![group],
            topics: vec![
                Topic::new(Self::TOPIC_AI, Self::GROUP, "AI"),
                Topic::new(Self::TOPIC_IOT, Self::GROUP, "IoT"),
            ],
            rankings: vec![
                TopicRanking::new(Self::GROUP, Self::USER1, Self::TOPIC_AI, 2)
                    .with_label("promising"),
                TopicRanking::new(Self::GROUP, Self::USER1, Self::TOPIC_IOT, 1),
                TopicRanking::new(Self::GROUP, Self::USER2, Self::TOPIC_AI, 1),
                TopicRanking::new(Self::GROUP, Self::USER2, Self::TOPIC_IOT, 2),
            ],
            expertise: vec![
                ExpertiseRating::new(
                    Self::GROUP,
                    Self::USER1,
                    Self::TOPIC_AI,
                    ExpertiseLevel::from_percent(100),
                ),
                ExpertiseRating::new(
                    Self::GROUP,
                    Self::USER2,
                    Self::TOPIC_IOT,
                    ExpertiseLevel::from_percent(100),
                ),
            ],
            phases: vec![
                PhaseRecord::new(Self::GROUP, Self::USER1, PhaseRecord::RANKING_COMPLETE),
                PhaseRecord::new(Self::GROUP, Self::USER2, PhaseRecord::RANKING_COMPLETE),
            ],
            results: Mutex::new(HashMap::new()),
        }
    }

    /// Three users unanimously ranking A > B > C under Schulze mode
    pub fn unanimous_schulze_group() -> Self {
        let group = Group::new(Self::GROUP, "roadmap", VotingMode::Schulze)
            .with_member(Participant::new(Self::USER1, "user1", "User One"))
            .with_member(Participant::new(Self::USER2, "user2", "User Two"))
            .with_member(Participant::new(Self::USER3, "user3", "User Three"));

        let topics: Vec<Topic> = ["A", "B", "C"]
            .iter()
            .enumerate()
            .map(|(i, name)| Topic::new(TopicId::new(i as i64 + 1), Self::GROUP, *name))
            .collect();

        let mut rankings = Vec::new();
        for user in [Self::USER1, Self::USER2, Self::USER3] {
            for (topic, position) in topics.iter().zip([3, 2, 1]) {
                rankings.push(TopicRanking::new(Self::GROUP, user, topic.id, position));
            }
        }

        let phases = [Self::USER1, Self::USER2, Self::USER3]
            .iter()
            .map(|&user| PhaseRecord::new(Self::GROUP, user, PhaseRecord::RANKING_COMPLETE))
            .collect();

        Self {
            groups: vec![group],
            topics,
            rankings,
            expertise: Vec::new(),
            phases,
            results: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl GroupStore for FakeStores {
    async fn find_group(&self, group_id: GroupId) -> Result<Option<Group>, StoreError> {
        Ok(self.groups.iter().find(|g| g.id == group_id).cloned())
    }
}

#[async_trait]
impl PhaseStore for FakeStores {
    async fn users_in_phase(
        &self,
        group_id: GroupId,
        phase: u8,
    ) -> Result<Vec<UserId>, StoreError> {
        Ok(self
            .phases
            .iter()
            .filter(|p| p.group_id == group_id && p.phase == phase)
            .map(|p| p.user_id)
            .collect())
    }
}

#[async_trait]
impl TopicStore for FakeStores {
    async fn topics_for_group(&self, group_id: GroupId) -> Result<Vec<Topic>, StoreError> {
        Ok(self
            .topics
            .iter()
            .filter(|t| t.group_id == group_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RankingStore for FakeStores {
    async fn rankings_for_group(
        &self,
        group_id: GroupId,
    ) -> Result<Vec<TopicRanking>, StoreError> {
        Ok(self
            .rankings
            .iter()
            .filter(|r| r.group_id == group_id)
            .cloned()
            .collect())
    }

    async fn replace_user_rankings(
        &self,
        _group_id: GroupId,
        _user_id: UserId,
        _rankings: Vec<TopicRanking>,
    ) -> Result<(), StoreError> {
        Err(StoreError::new("not supported by the fake"))
    }
}

#[async_trait]
impl ExpertiseStore for FakeStores {
    async fn expertise_for_group(
        &self,
        group_id: GroupId,
    ) -> Result<Vec<ExpertiseRating>, StoreError> {
        Ok(self
            .expertise
            .iter()
            .filter(|e| e.group_id == group_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ResultStore for FakeStores {
    async fn replace_results(
        &self,
        group_id: GroupId,
        results: Vec<ConsensusResult>,
    ) -> Result<(), StoreError> {
        self.results
            .lock()
            .map_err(|_| StoreError::new("results lock poisoned"))?
            .insert(group_id, results);
        Ok(())
    }

    async fn results_for_group(
        &self,
        group_id: GroupId,
    ) -> Result<Vec<ConsensusResult>, StoreError> {
        Ok(self
            .results
            .lock()
            .map_err(|_| StoreError::new("results lock poisoned"))?
            .get(&group_id)
            .cloned()
            .unwrap_or_default())
    }
}

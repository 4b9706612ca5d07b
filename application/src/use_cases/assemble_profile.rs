//! Data Assembler use case
//!
//! Gathers everything a voting engine needs for one group: the candidate
//! topics, the participants who completed the ranking phase, their
//! positions and expertise levels, and the label strings attached to
//! rankings. Read-only; the precondition checks happen here so the
//! engines can stay pure.

use crate::ports::stores::{ConsensusStores, StoreError};
use consensus_domain::{ConsensusError, Group, GroupId, PhaseRecord, RankingProfile, TopicId, UserId};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised while assembling a group's voting data
#[derive(Error, Debug)]
pub enum AssembleProfileError {
    #[error(transparent)]
    Consensus(#[from] ConsensusError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The assembler's output: the group plus its aligned voting data
#[derive(Debug, Clone)]
pub struct AssembledProfile {
    pub group: Group,
    pub profile: RankingProfile,
}

/// Use case for assembling a group's ranking profile
pub struct AssembleProfileUseCase<S: ConsensusStores> {
    stores: Arc<S>,
}

impl<S: ConsensusStores> AssembleProfileUseCase<S> {
    pub fn new(stores: Arc<S>) -> Self {
        Self { stores }
    }

    /// Assemble the voting data for one group
    ///
    /// Preconditions, both terminal for the run:
    /// - the group must exist ([`ConsensusError::GroupNotFound`])
    /// - every member must have completed the ranking phase
    ///   ([`ConsensusError::PhaseIncomplete`]); a member with no phase
    ///   record at all blocks the run
    pub async fn execute(&self, group_id: GroupId) -> Result<AssembledProfile, AssembleProfileError> {
        let group = self
            .stores
            .find_group(group_id)
            .await?
            .ok_or(ConsensusError::GroupNotFound(group_id))?;

        let ready: HashSet<UserId> = self
            .stores
            .users_in_phase(group_id, PhaseRecord::RANKING_COMPLETE)
            .await?
            .into_iter()
            .collect();

        debug!(
            "Group {}: {} of {} members completed the ranking phase",
            group_id,
            ready.len(),
            group.member_count()
        );

        if ready.len() != group.member_count() {
            return Err(ConsensusError::PhaseIncomplete {
                completed: ready.len(),
                total: group.member_count(),
            }
            .into());
        }

        let topics = self.stores.topics_for_group(group_id).await?;
        let participants = group.members.iter().map(|m| m.username.clone()).collect();
        let mut profile = RankingProfile::new(topics, participants);

        let topic_names: HashMap<TopicId, String> = profile
            .topics()
            .iter()
            .map(|t| (t.id, t.name.clone()))
            .collect();

        for ranking in self.stores.rankings_for_group(group_id).await? {
            let Some(name) = topic_names.get(&ranking.topic_id) else {
                continue;
            };
            let Some(member) = group.member(ranking.user_id) else {
                continue;
            };
            profile.set_position(name, &member.username, ranking.position);
            if let Some(label) = ranking.label.as_deref().filter(|l| !l.is_empty()) {
                profile.add_label(name, format!("{} rated it as {}", member.display_name, label));
            }
        }

        for rating in self.stores.expertise_for_group(group_id).await? {
            let Some(name) = topic_names.get(&rating.topic_id) else {
                continue;
            };
            let Some(member) = group.member(rating.user_id) else {
                continue;
            };
            profile.set_expertise(name, &member.username, rating.level);
        }

        Ok(AssembledProfile { group, profile })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeStores;
    use consensus_domain::ExpertiseLevel;

    #[tokio::test]
    async fn test_missing_group_is_not_found() {
        let stores = Arc::new(FakeStores::default());
        let use_case = AssembleProfileUseCase::new(stores);

        let err = use_case.execute(GroupId::new(9)).await.unwrap_err();
        assert!(matches!(
            err,
            AssembleProfileError::Consensus(ConsensusError::GroupNotFound(id)) if id == GroupId::new(9)
        ));
    }

    #[tokio::test]
    async fn test_incomplete_phase_blocks_the_run() {
        let mut stores = FakeStores::two_user_group();
        // Only the first member finished ranking
        stores.phases.pop();
        let use_case = AssembleProfileUseCase::new(Arc::new(stores));

        let err = use_case.execute(FakeStores::GROUP).await.unwrap_err();
        assert!(matches!(
            err,
            AssembleProfileError::Consensus(ConsensusError::PhaseIncomplete {
                completed: 1,
                total: 2
            })
        ));
    }

    #[tokio::test]
    async fn test_member_without_phase_record_blocks_the_run() {
        let mut stores = FakeStores::two_user_group();
        stores.phases.clear();
        let use_case = AssembleProfileUseCase::new(Arc::new(stores));

        let err = use_case.execute(FakeStores::GROUP).await.unwrap_err();
        assert!(matches!(
            err,
            AssembleProfileError::Consensus(ConsensusError::PhaseIncomplete {
                completed: 0,
                total: 2
            })
        ));
    }

    #[tokio::test]
    async fn test_assembles_aligned_profile() {
        let stores = Arc::new(FakeStores::two_user_group());
        let use_case = AssembleProfileUseCase::new(stores);

        let assembled = use_case.execute(FakeStores::GROUP).await.unwrap();
        let profile = assembled.profile;

        let names: Vec<_> = profile.topic_names().collect();
        assert_eq!(names, vec!["AI", "IoT"]);
        assert_eq!(profile.participant_count(), 2);

        assert_eq!(profile.position("AI", "user1"), Some(2));
        assert_eq!(profile.position("IoT", "user2"), Some(2));
        assert_eq!(profile.expertise("AI", "user1").get(), 10);
        assert_eq!(profile.expertise("IoT", "user1"), ExpertiseLevel::MIN);
    }

    #[tokio::test]
    async fn test_label_strings_name_the_rater() {
        let stores = Arc::new(FakeStores::two_user_group());
        let use_case = AssembleProfileUseCase::new(stores);

        let assembled = use_case.execute(FakeStores::GROUP).await.unwrap();
        let labels = assembled.profile.labels("AI");

        assert_eq!(labels, ["User One rated it as promising"]);
        assert!(assembled.profile.labels("IoT").is_empty());
    }
}

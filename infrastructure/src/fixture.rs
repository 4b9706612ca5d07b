//! TOML fixture loading
//!
//! Seeds an [`InMemoryStore`] from a declarative fixture file, for demos
//! and integration tests. Expertise entries use the platform's raw 0-100
//! scale; compression to the stored 1-10 level happens on load, the same
//! way the submission endpoint would do it.
//!
//! ```toml
//! [[groups]]
//! id = 1
//! name = "emerging-tech"
//! voting_mode = "Positional Voting"
//!
//! [[groups.members]]
//! id = 1
//! username = "ada"
//! display_name = "Ada Lovelace"
//!
//! [[topics]]
//! id = 1
//! group_id = 1
//! name = "AI"
//!
//! [[rankings]]
//! group_id = 1
//! user_id = 1
//! topic_id = 1
//! position = 2
//! label = "promising"
//!
//! [[expertise]]
//! group_id = 1
//! user_id = 1
//! topic_id = 1
//! percent = 100
//!
//! [[phases]]
//! group_id = 1
//! user_id = 1
//! phase = 2
//! ```

use crate::memory::InMemoryStore;
use consensus_application::StoreError;
use consensus_domain::{Group, GroupId, Topic, TopicId, TopicRanking, UserId};
use figment::{
    Figment,
    providers::{Format, Toml},
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// An expertise rating on the raw 0-100 scale
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureExpertise {
    pub group_id: GroupId,
    pub user_id: UserId,
    pub topic_id: TopicId,
    pub percent: i64,
}

/// A phase-completion record
#[derive(Debug, Clone, Deserialize)]
pub struct FixturePhase {
    pub group_id: GroupId,
    pub user_id: UserId,
    pub phase: u8,
}

/// Declarative seed data for a store
#[derive(Debug, Default, Deserialize)]
pub struct ConsensusFixture {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub rankings: Vec<TopicRanking>,
    #[serde(default)]
    pub expertise: Vec<FixtureExpertise>,
    #[serde(default)]
    pub phases: Vec<FixturePhase>,
}

impl ConsensusFixture {
    /// Build a seeded in-memory store
    ///
    /// Rankings are grouped per (group, user) and submitted as whole
    /// orderings, so the store's replace-on-resubmit semantics apply.
    pub async fn seed(self) -> Result<InMemoryStore, StoreError> {
        let store = InMemoryStore::new();

        for group in self.groups {
            store.insert_group(group).await;
        }
        for topic in self.topics {
            store.insert_topic(topic).await;
        }

        let mut by_user: BTreeMap<(GroupId, UserId), Vec<TopicRanking>> = BTreeMap::new();
        for ranking in self.rankings {
            by_user
                .entry((ranking.group_id, ranking.user_id))
                .or_default()
                .push(ranking);
        }
        for ((group_id, user_id), rankings) in by_user {
            store.submit_ranking(group_id, user_id, rankings).await?;
        }

        for rating in self.expertise {
            store
                .rate_expertise(rating.group_id, rating.user_id, rating.topic_id, rating.percent)
                .await;
        }
        for phase in self.phases {
            store
                .complete_phase(phase.group_id, phase.user_id, phase.phase)
                .await;
        }

        Ok(store)
    }
}

/// Fixture file loader
pub struct FixtureLoader;

impl FixtureLoader {
    /// Parse a TOML fixture file
    pub fn load(path: &Path) -> Result<ConsensusFixture, Box<figment::Error>> {
        let fixture: ConsensusFixture = Figment::new()
            .merge(Toml::file(path))
            .extract()
            .map_err(Box::new)?;

        info!(
            "Loaded fixture: {} groups, {} topics, {} rankings",
            fixture.groups.len(),
            fixture.topics.len(),
            fixture.rankings.len()
        );
        Ok(fixture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consensus_application::{ComputeConsensusUseCase, GroupStore, PhaseStore};
    use consensus_domain::{PhaseRecord, VotingMode};
    use std::io::Write;
    use std::sync::Arc;

    const FIXTURE: &str = r#"
[[groups]]
id = 1
name = "emerging-tech"
voting_mode = "Non-Positional Voting"

[[groups.members]]
id = 1
username = "ada"
display_name = "Ada Lovelace"

[[groups.members]]
id = 2
username = "alan"
display_name = "Alan Turing"

[[groups.members]]
id = 3
username = "grace"
display_name = "Grace Hopper"

[[topics]]
id = 1
group_id = 1
name = "A"

[[topics]]
id = 2
group_id = 1
name = "B"

[[topics]]
id = 3
group_id = 1
name = "C"

[[rankings]]
group_id = 1
user_id = 1
topic_id = 1
position = 3

[[rankings]]
group_id = 1
user_id = 1
topic_id = 2
position = 2

[[rankings]]
group_id = 1
user_id = 1
topic_id = 3
position = 1

[[rankings]]
group_id = 1
user_id = 2
topic_id = 1
position = 3

[[rankings]]
group_id = 1
user_id = 2
topic_id = 2
position = 2

[[rankings]]
group_id = 1
user_id = 2
topic_id = 3
position = 1

[[rankings]]
group_id = 1
user_id = 3
topic_id = 1
position = 3

[[rankings]]
group_id = 1
user_id = 3
topic_id = 2
position = 2

[[rankings]]
group_id = 1
user_id = 3
topic_id = 3
position = 1

[[expertise]]
group_id = 1
user_id = 1
topic_id = 1
percent = 85

[[phases]]
group_id = 1
user_id = 1
phase = 2

[[phases]]
group_id = 1
user_id = 2
phase = 2

[[phases]]
group_id = 1
user_id = 3
phase = 2
"#;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_and_seed() {
        let file = write_fixture(FIXTURE);
        let fixture = FixtureLoader::load(file.path()).unwrap();

        assert_eq!(fixture.groups.len(), 1);
        assert_eq!(fixture.groups[0].voting_mode, VotingMode::Schulze);
        assert_eq!(fixture.rankings.len(), 9);

        let store = fixture.seed().await.unwrap();
        let group = store.find_group(GroupId::new(1)).await.unwrap().unwrap();
        assert_eq!(group.member_count(), 3);

        let ready = store
            .users_in_phase(GroupId::new(1), PhaseRecord::RANKING_COMPLETE)
            .await
            .unwrap();
        assert_eq!(ready.len(), 3);
    }

    #[tokio::test]
    async fn test_seeded_store_supports_a_full_run() {
        let file = write_fixture(FIXTURE);
        let store = FixtureLoader::load(file.path())
            .unwrap()
            .seed()
            .await
            .unwrap();

        let use_case = ComputeConsensusUseCase::new(Arc::new(store));
        let summary = use_case.execute(GroupId::new(1)).await.unwrap();

        let ordered: Vec<(&str, f64)> = summary
            .results
            .iter()
            .map(|r| (r.topic_name.as_str(), r.final_value))
            .collect();
        assert_eq!(ordered, vec![("A", 2.0), ("B", 1.0), ("C", 0.0)]);
    }

    #[tokio::test]
    async fn test_malformed_fixture_is_an_error() {
        let file = write_fixture("[[groups]]\nid = \"not a number\"\n");
        assert!(FixtureLoader::load(file.path()).is_err());
    }

    #[test]
    fn test_empty_fixture_defaults() {
        let file = write_fixture("");
        let fixture = FixtureLoader::load(file.path()).unwrap();
        assert!(fixture.groups.is_empty());
        assert!(fixture.phases.is_empty());
    }
}

//! Domain layer for topic-consensus
//!
//! This crate contains the core business logic of the group-deliberation
//! platform: the entities describing groups, topics, rankings and expertise,
//! and the two voting engines that turn per-user rankings into a single
//! group ordering. It has no dependencies on infrastructure or
//! application-layer concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Voting engines
//!
//! A group is configured with one of two voting modes at creation time:
//!
//! - **Positional Voting**: each topic's score is the expertise-weighted
//!   mean of the positions users assigned to it.
//! - **Schulze (Non-Positional) Voting**: a Condorcet-consistent method
//!   ranking topics by strongest-path pairwise dominance.
//!
//! Both engines are pure synchronous functions over a [`RankingProfile`],
//! the aligned structure assembled from a group's submissions.

pub mod core;
pub mod group;
pub mod ranking;
pub mod voting;

// Re-export commonly used types
pub use crate::core::error::ConsensusError;
pub use group::{
    entities::{Group, GroupId, Participant, UserId},
    voting_mode::VotingMode,
};
pub use ranking::{
    entities::{ConsensusResult, PhaseRecord, Topic, TopicId, TopicRanking},
    expertise::{ExpertiseLevel, ExpertiseRating},
};
pub use voting::{
    TopicScore,
    positional::rank_by_weighted_position,
    profile::RankingProfile,
    schulze::rank_by_strongest_path,
};

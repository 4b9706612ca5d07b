//! Voting engines
//!
//! Two alternative rules turn the assembled [`profile::RankingProfile`]
//! into one ordered list of topics:
//!
//! - [`positional::rank_by_weighted_position`] - expertise-weighted mean
//!   of submitted positions
//! - [`schulze::rank_by_strongest_path`] - Condorcet-consistent
//!   strongest-path ranking
//!
//! Both return a permutation of the profile's topics sorted by score,
//! descending. The sort is stable, so topics with equal scores keep the
//! profile's lexicographic order; there is no secondary tie-break key.

pub mod positional;
pub mod profile;
pub mod schulze;

/// A topic paired with the scalar a voting engine computed for it
#[derive(Debug, Clone, PartialEq)]
pub struct TopicScore {
    pub name: String,
    pub score: f64,
}

impl TopicScore {
    pub fn new(name: impl Into<String>, score: f64) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

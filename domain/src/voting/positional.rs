//! Positional Voting engine
//!
//! Each topic's score is the expertise-weighted mean of the positions
//! participants assigned to it. Higher positions mean stronger preference,
//! so topics are ordered by score descending.

use super::TopicScore;
use super::profile::RankingProfile;

/// Rank topics by expertise-weighted average position
///
/// For topic `t`: `score(t) = Σ position(t, u) * expertise(t, u) / Σ expertise(t, u)`
/// over all participants `u`. A participant who did not rank `t`
/// contributes position 0 while their (default 1) expertise still counts
/// in the denominator: abstentions pull a topic toward 0 in proportion to
/// the abstaining participant's weight. With no expertise weight at all
/// the score is 0.
///
/// The output is a permutation of the profile's topics, sorted by score
/// descending; equal scores keep the profile's input order.
pub fn rank_by_weighted_position(profile: &RankingProfile) -> Vec<TopicScore> {
    let mut rankings: Vec<TopicScore> = profile
        .topic_names()
        .map(|name| {
            let mut weighted_sum: i64 = 0;
            let mut total_weight: i64 = 0;

            for user in profile.participants() {
                let position = profile.position(name, user).unwrap_or(0);
                let weight = i64::from(profile.expertise(name, user).get());
                weighted_sum += position * weight;
                total_weight += weight;
            }

            let score = if total_weight > 0 {
                weighted_sum as f64 / total_weight as f64
            } else {
                0.0
            };
            TopicScore::new(name, score)
        })
        .collect();

    // Stable sort: ties fall back to the profile's lexicographic order
    rankings.sort_by(|a, b| b.score.total_cmp(&a.score));
    rankings
}

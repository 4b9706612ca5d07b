//! Schulze (Non-Positional) voting engine
//!
//! Condorcet-consistent ranking by strongest beat-paths: pairwise
//! preference counts feed a widest-path closure (a Floyd-Warshall
//! variant), and each topic is scored by how many others it dominates.
//! Robust to non-transitive aggregate preferences; O(T^3) in the number
//! of topics, which is expected to stay in the tens.
//!
//! Matrices are flat `n * n` arrays indexed through the profile's stable
//! topic order, so lookups are O(1) and absent pairs cannot leak into the
//! key space.

use super::TopicScore;
use super::profile::RankingProfile;

/// Rank topics by strongest-path pairwise dominance
///
/// The pairwise count `P[a][b]` is the number of participants who ranked
/// `a` and either ranked `b` strictly lower or did not rank `b` at all:
/// an unranked topic compares below every ranked one, so ranking `a`
/// alone already counts as strictly preferring it. Path strengths then
/// follow the standard widest-path closure, and each topic scores one
/// point per opponent it beats by strongest-path strength.
///
/// The output is a permutation of the profile's topics, sorted by score
/// descending; equal scores keep the profile's input order.
pub fn rank_by_strongest_path(profile: &RankingProfile) -> Vec<TopicScore> {
    let names: Vec<&str> = profile.topic_names().collect();
    let n = names.len();

    let pairwise = pairwise_preferences(profile, &names);
    let mut strengths = seed_strengths(&pairwise, n);
    strengthen_paths(&mut strengths, n);

    let mut rankings: Vec<TopicScore> = names
        .iter()
        .enumerate()
        .map(|(t, name)| {
            let beats = (0..n)
                .filter(|&o| o != t && strengths[t * n + o] > strengths[o * n + t])
                .count();
            TopicScore::new(*name, beats as f64)
        })
        .collect();

    // Stable sort: ties fall back to the profile's lexicographic order
    rankings.sort_by(|a, b| b.score.total_cmp(&a.score));
    rankings
}

/// Build the pairwise preference matrix P
fn pairwise_preferences(profile: &RankingProfile, names: &[&str]) -> Vec<u32> {
    let n = names.len();
    let mut pairwise = vec![0u32; n * n];

    for (a, name_a) in names.iter().enumerate() {
        for (b, name_b) in names.iter().enumerate() {
            if a == b {
                continue;
            }
            for (user, position) in profile.ranked_positions(name_a) {
                match profile.position(name_b, user) {
                    // Ranking only `a` counts as strictly preferring it
                    None => pairwise[a * n + b] += 1,
                    Some(other) if position > other => pairwise[a * n + b] += 1,
                    Some(_) => {}
                }
            }
        }
    }

    pairwise
}

/// Seed path strengths with strict-majority pairwise wins
fn seed_strengths(pairwise: &[u32], n: usize) -> Vec<u32> {
    let mut strengths = vec![0u32; n * n];
    for i in 0..n {
        for j in 0..n {
            if i != j && pairwise[i * n + j] > pairwise[j * n + i] {
                strengths[i * n + j] = pairwise[i * n + j];
            }
        }
    }
    strengths
}

/// Widest-path closure over the strength matrix
///
/// `k` must be the outermost loop for the closure to reach its fixed
/// point in one pass.
fn strengthen_paths(strengths: &mut [u32], n: usize) {
    for k in 0..n {
        for i in 0..n {
            if i == k {
                continue;
            }
            for j in 0..n {
                if j == i || j == k {
                    continue;
                }
                let through_k = strengths[i * n + k].min(strengths[k * n + j]);
                if through_k > strengths[i * n + j] {
                    strengths[i * n + j] = through_k;
                }
            }
        }
    }
}

//! Leaderboard aggregation.

use crate::sweep::{
    scoring,
    types::{RankEntry, Submission},
};
use std::collections::HashMap;

/// Score every submission against the results snapshot and order the field.
///
/// Descending by score; ties break by team name ascending so the ranking is
/// reproducible rather than whatever order the store enumerated rows in.
/// No submissions yields an empty ranking, not an error.
pub fn rank(submissions: &[Submission], results: &HashMap<String, String>) -> Vec<RankEntry> {
    let mut standings: Vec<RankEntry> = submissions
        .iter()
        .map(|s| RankEntry {
            team_name: s.team_name.clone(),
            score: scoring::score(&s.picks, results),
        })
        .collect();

    standings.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.team_name.cmp(&b.team_name))
    });
    standings
}

//! Accuracy scoring for locked submissions.

use crate::sweep::types::{Pick, Verdict};
use std::collections::HashMap;

/// Accuracy of a set of picks against the current results snapshot, as an
/// integer percentage 0..=100.
///
/// Only picks whose match has a declared result are counted; pending matches
/// do not count at all, so the score can only move when a result arrives.
/// With no judged picks the score is a defined 0. Rounding is
/// half-away-from-zero (`f64::round`).
///
/// Pure and deterministic: the same `(picks, results)` always yields the
/// same score regardless of snapshot arrival order.
pub fn score(picks: &[Pick], results: &HashMap<String, String>) -> u8 {
    let mut counted = 0u32;
    let mut correct = 0u32;

    for pick in picks {
        if let Some(winner) = results.get(&pick.match_id) {
            counted += 1;
            if *winner == pick.winner {
                correct += 1;
            }
        }
    }

    if counted == 0 {
        return 0;
    }
    ((100.0 * correct as f64) / counted as f64).round() as u8
}

/// Judge a single pick: correct, incorrect, or still pending.
pub fn judge(pick: &Pick, results: &HashMap<String, String>) -> Verdict {
    match results.get(&pick.match_id) {
        Some(winner) if *winner == pick.winner => Verdict::Correct,
        Some(_) => Verdict::Incorrect,
        None => Verdict::Pending,
    }
}

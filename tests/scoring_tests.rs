//! Verifies the accuracy-score contract: pending matches never count,
//! scores stay in 0..=100, and identical inputs always score identically.

use std::collections::HashMap;
use sweepstake_server::sweep::{
    scoring::{judge, score},
    types::{Pick, Verdict},
};

fn pick(match_id: &str, side_a: &str, side_b: &str, winner: &str) -> Pick {
    Pick {
        match_id: match_id.into(),
        side_a: side_a.into(),
        side_b: side_b.into(),
        winner: winner.into(),
    }
}

fn results(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(m, w)| (m.to_string(), w.to_string()))
        .collect()
}

#[test]
fn no_judged_matches_scores_zero() {
    let picks = vec![pick("1", "A", "B", "A"), pick("2", "C", "D", "C")];
    assert_eq!(score(&picks, &HashMap::new()), 0);
}

#[test]
fn pending_match_is_excluded_not_wrong() {
    // Match 1 judged (pick was wrong), match 2 still pending.
    let picks = vec![pick("1", "A", "B", "A"), pick("2", "C", "D", "C")];
    let r = results(&[("1", "B")]);
    // counted = 1, correct = 0
    assert_eq!(score(&picks, &r), 0);
}

#[test]
fn all_correct_scores_hundred() {
    let picks = vec![pick("1", "A", "B", "A"), pick("2", "C", "D", "C")];
    let r = results(&[("1", "A"), ("2", "C")]);
    assert_eq!(score(&picks, &r), 100);
}

#[test]
fn half_correct_scores_fifty() {
    let picks = vec![pick("1", "A", "B", "A"), pick("2", "C", "D", "C")];
    let r = results(&[("1", "B"), ("2", "C")]);
    assert_eq!(score(&picks, &r), 50);
}

#[test]
fn rounding_is_half_away_from_zero() {
    // 1 of 3 judged -> 33.33 -> 33; 2 of 3 -> 66.67 -> 67; 1 of 8 -> 12.5 -> 13
    let picks3 = vec![
        pick("1", "A", "B", "A"),
        pick("2", "C", "D", "C"),
        pick("3", "E", "F", "E"),
    ];
    let one_of_three = results(&[("1", "A"), ("2", "D"), ("3", "F")]);
    assert_eq!(score(&picks3, &one_of_three), 33);
    let two_of_three = results(&[("1", "A"), ("2", "C"), ("3", "F")]);
    assert_eq!(score(&picks3, &two_of_three), 67);

    let picks8: Vec<Pick> = (1..=8)
        .map(|i| pick(&i.to_string(), "A", "B", "A"))
        .collect();
    let mut one_of_eight = results(&[("1", "A")]);
    for i in 2..=8 {
        one_of_eight.insert(i.to_string(), "B".into());
    }
    assert_eq!(score(&picks8, &one_of_eight), 13);
}

#[test]
fn unrelated_results_do_not_move_the_score() {
    let picks = vec![pick("1", "A", "B", "A")];
    let r = results(&[("1", "A")]);
    let mut r_extra = r.clone();
    r_extra.insert("99".into(), "Z".into());
    assert_eq!(score(&picks, &r), score(&picks, &r_extra));
}

#[test]
fn pick_order_does_not_move_the_score() {
    let mut picks = vec![
        pick("1", "A", "B", "A"),
        pick("2", "C", "D", "C"),
        pick("3", "E", "F", "F"),
    ];
    let r = results(&[("1", "A"), ("2", "D"), ("3", "F")]);
    let forward = score(&picks, &r);
    picks.reverse();
    assert_eq!(score(&picks, &r), forward);
}

#[test]
fn score_is_bounded() {
    let picks = vec![pick("1", "A", "B", "A"), pick("2", "C", "D", "D")];
    for r in [
        HashMap::new(),
        results(&[("1", "A")]),
        results(&[("1", "B"), ("2", "C")]),
        results(&[("1", "A"), ("2", "D")]),
    ] {
        let s = score(&picks, &r);
        assert!(s <= 100);
    }
}

#[test]
fn winner_comparison_is_case_sensitive_by_name() {
    let picks = vec![pick("1", "Lions", "Tigers", "Lions")];
    assert_eq!(score(&picks, &results(&[("1", "lions")])), 0);
    assert_eq!(score(&picks, &results(&[("1", "Lions")])), 100);
}

#[test]
fn judge_reports_per_pick_verdicts() {
    let p = pick("1", "A", "B", "A");
    assert_eq!(judge(&p, &HashMap::new()), Verdict::Pending);
    assert_eq!(judge(&p, &results(&[("1", "A")])), Verdict::Correct);
    assert_eq!(judge(&p, &results(&[("1", "B")])), Verdict::Incorrect);
}

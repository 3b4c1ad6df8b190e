//! Leaderboard ordering properties: non-increasing scores, deterministic
//! tie-break, empty field handled.

use chrono::Utc;
use std::collections::HashMap;
use sweepstake_server::sweep::{
    rank::rank,
    types::{Pick, Submission},
};

fn submission(team_name: &str, winners: &[(&str, &str)]) -> Submission {
    Submission {
        team_name: team_name.into(),
        competition: "summer2025".into(),
        submitted_at: Utc::now(),
        picks: winners
            .iter()
            .map(|(m, w)| Pick {
                match_id: m.to_string(),
                side_a: "A".into(),
                side_b: "B".into(),
                winner: w.to_string(),
            })
            .collect(),
    }
}

fn results(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(m, w)| (m.to_string(), w.to_string()))
        .collect()
}

#[test]
fn empty_field_ranks_empty() {
    assert!(rank(&[], &HashMap::new()).is_empty());
}

#[test]
fn scores_are_non_increasing() {
    let subs = vec![
        submission("low", &[("1", "B"), ("2", "B")]),
        submission("high", &[("1", "A"), ("2", "A")]),
        submission("mid", &[("1", "A"), ("2", "B")]),
    ];
    let r = results(&[("1", "A"), ("2", "A")]);
    let standings = rank(&subs, &r);

    assert_eq!(standings.len(), 3);
    for pair in standings.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_eq!(standings[0].team_name, "high");
    assert_eq!(standings[2].team_name, "low");
}

#[test]
fn ties_break_by_team_name_ascending() {
    let subs = vec![
        submission("zebra", &[("1", "A")]),
        submission("aardvark", &[("1", "A")]),
        submission("mongoose", &[("1", "A")]),
    ];
    let r = results(&[("1", "A")]);
    let standings = rank(&subs, &r);

    let names: Vec<&str> = standings.iter().map(|e| e.team_name.as_str()).collect();
    assert_eq!(names, ["aardvark", "mongoose", "zebra"]);
}

#[test]
fn ranking_is_deterministic_across_runs() {
    let subs = vec![
        submission("one", &[("1", "A"), ("2", "B")]),
        submission("two", &[("1", "B"), ("2", "A")]),
    ];
    let r = results(&[("1", "A")]);
    assert_eq!(rank(&subs, &r), rank(&subs, &r));
}

#[test]
fn enumeration_order_of_submissions_is_irrelevant() {
    let mut subs = vec![
        submission("one", &[("1", "A")]),
        submission("two", &[("1", "B")]),
        submission("three", &[("1", "A")]),
    ];
    let r = results(&[("1", "A")]);
    let forward = rank(&subs, &r);
    subs.reverse();
    assert_eq!(rank(&subs, &r), forward);
}

#[test]
fn unscored_field_all_rank_at_zero() {
    let subs = vec![
        submission("beta", &[("1", "A")]),
        submission("alpha", &[("1", "B")]),
    ];
    let standings = rank(&subs, &HashMap::new());
    assert!(standings.iter().all(|e| e.score == 0));
    // still deterministic: name ascending
    assert_eq!(standings[0].team_name, "alpha");
}

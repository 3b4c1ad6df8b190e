//! Draft-flow state machine: team choice gating, last-write-wins picks,
//! and the locked end state.

use sweepstake_server::sweep::{
    draft::{Draft, DraftPhase},
    types::{Pick, SweepError},
};

fn pick(match_id: &str, winner: &str) -> Pick {
    Pick {
        match_id: match_id.into(),
        side_a: "Lions".into(),
        side_b: "Tigers".into(),
        winner: winner.into(),
    }
}

#[test]
fn phases_advance_with_team_then_picks() {
    let mut draft = Draft::new("summer2025");
    assert_eq!(draft.phase(), DraftPhase::NoTeamChosen);

    draft.choose_team("team1", false).unwrap();
    assert_eq!(draft.phase(), DraftPhase::TeamChosen);

    draft.set_pick(pick("1", "Lions")).unwrap();
    assert_eq!(draft.phase(), DraftPhase::Drafting);
}

#[test]
fn submitted_team_cannot_be_chosen() {
    let mut draft = Draft::new("summer2025");
    let err = draft.choose_team("team1", true).unwrap_err();
    assert!(matches!(err, SweepError::AlreadySubmitted));
    // state did not advance
    assert_eq!(draft.phase(), DraftPhase::NoTeamChosen);
    assert!(draft.team_id.is_none());
}

#[test]
fn picking_without_a_team_is_rejected() {
    let mut draft = Draft::new("summer2025");
    let err = draft.set_pick(pick("1", "Lions")).unwrap_err();
    assert!(matches!(err, SweepError::NoTeamSelected));
    assert!(draft.picks.is_empty());
}

#[test]
fn repick_overwrites_and_moves_to_end() {
    let mut draft = Draft::new("summer2025");
    draft.choose_team("team1", false).unwrap();

    draft.set_pick(pick("1", "Lions")).unwrap();
    draft.set_pick(pick("2", "Tigers")).unwrap();
    draft.set_pick(pick("1", "Tigers")).unwrap();

    // one pick per match id, re-pick wins and sits last
    assert_eq!(draft.picks.len(), 2);
    assert_eq!(draft.picks[0].match_id, "2");
    assert_eq!(draft.picks[1].match_id, "1");
    assert_eq!(draft.picks[1].winner, "Tigers");
}

#[test]
fn draft_stays_editable_until_locked() {
    let mut draft = Draft::new("summer2025");
    draft.choose_team("team1", false).unwrap();
    for i in 0..5 {
        draft.set_pick(pick(&i.to_string(), "Lions")).unwrap();
    }
    // simulate leaving and returning: the same blob keeps accepting edits
    draft.set_pick(pick("3", "Tigers")).unwrap();
    assert_eq!(draft.picks.len(), 5);
}

#[test]
fn locked_draft_rejects_edits() {
    let mut locked = Draft::locked_view("summer2025", vec![pick("1", "Lions")]);
    assert_eq!(locked.phase(), DraftPhase::Locked);

    let err = locked.set_pick(pick("2", "Tigers")).unwrap_err();
    assert!(matches!(err, SweepError::AlreadySubmitted));
    let err = locked.choose_team("team2", false).unwrap_err();
    assert!(matches!(err, SweepError::AlreadySubmitted));
    assert_eq!(locked.picks.len(), 1);
}

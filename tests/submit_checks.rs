//! Pre-write submission validation: every rejection fires before any store
//! write, in the order the flow surfaces them.

use chrono::{Duration, TimeZone, Utc};
use sweepstake_server::sweep::{
    draft::Draft,
    submit::check_submittable,
    types::{Pick, SweepError},
};

fn drafted() -> Draft {
    let mut draft = Draft::new("summer2025");
    draft.choose_team("team1", false).unwrap();
    draft
        .set_pick(Pick {
            match_id: "1".into(),
            side_a: "Lions".into(),
            side_b: "Tigers".into(),
            winner: "Lions".into(),
        })
        .unwrap();
    draft
}

#[test]
fn valid_draft_passes_and_names_the_team() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let deadline = Some(now + Duration::hours(1));
    assert_eq!(check_submittable(&drafted(), deadline, now).unwrap(), "team1");
}

#[test]
fn missing_deadline_means_open() {
    let now = Utc::now();
    assert!(check_submittable(&drafted(), None, now).is_ok());
}

#[test]
fn past_deadline_is_rejected_first() {
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let deadline = Some(now - Duration::minutes(1));
    // deadline wins even though the draft is also empty
    let empty = Draft::new("summer2025");
    let err = check_submittable(&empty, deadline, now).unwrap_err();
    assert!(matches!(err, SweepError::DeadlinePassed));
}

#[test]
fn deadline_boundary_is_inclusive() {
    let closes = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let draft = drafted();
    // exactly at the deadline still submits; one second later does not
    assert!(check_submittable(&draft, Some(closes), closes).is_ok());
    let err = check_submittable(&draft, Some(closes), closes + Duration::seconds(1));
    assert!(matches!(err.unwrap_err(), SweepError::DeadlinePassed));
}

#[test]
fn empty_draft_is_rejected() {
    let mut draft = Draft::new("summer2025");
    draft.choose_team("team1", false).unwrap();
    let err = check_submittable(&draft, None, Utc::now()).unwrap_err();
    assert!(matches!(err, SweepError::NothingToSubmit));
}

#[test]
fn no_team_choice_is_rejected() {
    let mut draft = Draft::new("summer2025");
    // picks exist but the device never chose a team
    draft.picks.push(Pick {
        match_id: "1".into(),
        side_a: "Lions".into(),
        side_b: "Tigers".into(),
        winner: "Lions".into(),
    });
    let err = check_submittable(&draft, None, Utc::now()).unwrap_err();
    assert!(matches!(err, SweepError::NoTeamSelected));
}

#[test]
fn locked_draft_is_rejected() {
    let mut draft = drafted();
    draft.locked = true;
    let err = check_submittable(&draft, None, Utc::now()).unwrap_err();
    assert!(matches!(err, SweepError::AlreadySubmitted));
}

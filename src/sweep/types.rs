use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One predicted match winner. Side names are copied from the catalog at
/// pick time; results are matched against `winner` by name.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Pick {
    pub match_id: String,
    pub side_a: String,
    pub side_b: String,
    pub winner: String,
}

/// A team's locked picks. Created once per competition cycle, never edited.
/// The `picks` index is the ordinal key and preserves draft order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Submission {
    pub team_name: String,
    pub competition: String,
    pub submitted_at: DateTime<Utc>,
    pub picks: Vec<Pick>,
}

/// Team Registry entry as shown to clients.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamEntry {
    pub id: String,
    pub name: String,
    pub has_submitted: bool,
}

/// One leaderboard row.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub team_name: String,
    pub score: u8,
}

/// Outcome of judging a single pick against the Results Feed.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
    Pending,
}

/// User-visible failure outcomes. Each variant is distinguishable so the UI
/// can say why a request was refused, not just that it was.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("submissions for this competition have closed")]
    DeadlinePassed,
    #[error("team has already entered their predictions")]
    AlreadySubmitted,
    #[error("no picks have been made yet")]
    NothingToSubmit,
    #[error("no team selected for this device")]
    NoTeamSelected,
    #[error("persistence failure: {0}")]
    Persistence(#[from] anyhow::Error),
}

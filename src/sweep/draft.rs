//! Per-device draft state: team choice plus in-progress picks.
//!
//! A draft stays fully editable until a successful submit locks it; locking
//! is irreversible for the cycle and only an administrative reset reopens
//! the team slot.

use crate::sweep::types::{Pick, SweepError};
use serde::{Deserialize, Serialize};

/// Where a device is in the selection/draft flow.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    NoTeamChosen,
    TeamChosen,
    Drafting,
    Locked,
}

/// The draft blob persisted per device. Keyed by device, not account: a
/// device switching teams keeps whatever picks it already made.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Draft {
    pub competition: String,
    pub team_id: Option<String>,
    pub picks: Vec<Pick>,
    pub locked: bool,
}

impl Draft {
    pub fn new(competition: impl Into<String>) -> Self {
        Draft {
            competition: competition.into(),
            team_id: None,
            picks: Vec::new(),
            locked: false,
        }
    }

    pub fn phase(&self) -> DraftPhase {
        if self.locked {
            DraftPhase::Locked
        } else if !self.picks.is_empty() {
            DraftPhase::Drafting
        } else if self.team_id.is_some() {
            DraftPhase::TeamChosen
        } else {
            DraftPhase::NoTeamChosen
        }
    }

    /// Select the team this device drafts for. A team that has already
    /// submitted cannot be chosen.
    pub fn choose_team(&mut self, team_id: &str, has_submitted: bool) -> Result<(), SweepError> {
        if self.locked || has_submitted {
            return Err(SweepError::AlreadySubmitted);
        }
        self.team_id = Some(team_id.to_string());
        Ok(())
    }

    /// Record a pick. Re-picking a match replaces the earlier pick and moves
    /// it to the end of the draft order (last-write-wins per match id).
    pub fn set_pick(&mut self, pick: Pick) -> Result<(), SweepError> {
        if self.locked {
            return Err(SweepError::AlreadySubmitted);
        }
        if self.team_id.is_none() {
            return Err(SweepError::NoTeamSelected);
        }
        self.picks.retain(|p| p.match_id != pick.match_id);
        self.picks.push(pick);
        Ok(())
    }

    /// Read-only view of a locked submission in draft shape, for clients
    /// that ask for draft state after their team has entered.
    pub fn locked_view(competition: impl Into<String>, picks: Vec<Pick>) -> Self {
        Draft {
            competition: competition.into(),
            team_id: None,
            picks,
            locked: true,
        }
    }
}

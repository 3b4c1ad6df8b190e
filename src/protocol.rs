//! Wire-protocol shared by the WS feed and its publishers.
//!
//! Every message carries a total snapshot of one collection, never a delta:
//! consumers recompute from whatever arrives, in any order.

use crate::sweep::types::{RankEntry, TeamEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------- server → client ----------
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
pub enum ServerMsg {
    /// Team Registry snapshot, name-ascending.
    Teams {
        competition: String,
        teams: Vec<TeamEntry>,
    },
    /// Results Feed snapshot: match id → declared winner.
    Results {
        competition: String,
        results: HashMap<String, String>,
    },
    /// Freshly recomputed leaderboard.
    Leaderboard {
        competition: String,
        standings: Vec<RankEntry>,
    },
}

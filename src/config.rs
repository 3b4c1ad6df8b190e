//! Runtime configuration for the sweepstake server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Seconds a cached leaderboard stays valid in Redis.
    pub leaderboard_cache_ttl: u64,
    /// Seconds an abandoned draft blob survives before Redis drops it.
    pub draft_ttl: u64,
}

impl Settings {
    fn from_env() -> Self {
        let leaderboard_cache_ttl = env::var("LEADERBOARD_CACHE_TTL")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let draft_ttl = env::var("DRAFT_TTL")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60 * 60 * 24 * 30); // 30 days

        Settings {
            leaderboard_cache_ttl,
            draft_ttl,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}

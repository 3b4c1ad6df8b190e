//! Snapshot publication over Redis pub/sub, plus the leaderboard cache key.
//!
//! Writers (submit, result declaration, registry changes) push full
//! snapshots onto one channel per competition; the WS layer forwards them
//! verbatim. Publication is best-effort: a missed broadcast only delays the
//! next snapshot, the authoritative store is already updated.

use crate::{
    db::{models::TeamRow, results_repo, submission_repo, team_repo},
    protocol::ServerMsg,
    sweep::{rank, types::TeamEntry},
};
use anyhow::{Context, Result};
use redis::{AsyncCommands, Client as RedisClient};
use sqlx::PgPool;

pub fn channel(competition: &str) -> String {
    format!("comp:{competition}:feed")
}

pub fn leaderboard_key(competition: &str) -> String {
    format!("leaderboard:{competition}")
}

async fn publish(redis: &RedisClient, competition: &str, msg: &ServerMsg) -> Result<()> {
    let mut conn = redis
        .get_multiplexed_async_connection()
        .await
        .context("redis connection")?;
    let payload = serde_json::to_string(msg).context("encoding snapshot")?;
    let _: () = conn
        .publish(channel(competition), payload)
        .await
        .context("publishing snapshot")?;
    Ok(())
}

/// Drop the cached leaderboard so the next read recomputes from the
/// authoritative store.
pub async fn invalidate_leaderboard(redis: &RedisClient, competition: &str) {
    if let Ok(mut conn) = redis.get_multiplexed_async_connection().await {
        let _: () = conn.del(leaderboard_key(competition)).await.unwrap_or(());
    }
}

pub fn team_entries(rows: Vec<TeamRow>) -> Vec<TeamEntry> {
    rows.into_iter()
        .map(|t| TeamEntry {
            id: t.id,
            name: t.team_name,
            has_submitted: t.has_submitted,
        })
        .collect()
}

/// Push a fresh Team Registry snapshot.
pub async fn broadcast_teams(db: &PgPool, redis: &RedisClient, competition: &str) -> Result<()> {
    let teams = team_entries(team_repo::list(db, competition).await?);
    publish(
        redis,
        competition,
        &ServerMsg::Teams {
            competition: competition.to_string(),
            teams,
        },
    )
    .await
}

/// Push a fresh Results Feed snapshot.
pub async fn broadcast_results(db: &PgPool, redis: &RedisClient, competition: &str) -> Result<()> {
    let results = results_repo::snapshot(db, competition).await?;
    publish(
        redis,
        competition,
        &ServerMsg::Results {
            competition: competition.to_string(),
            results,
        },
    )
    .await
}

/// Recompute the leaderboard from full snapshots and push it. Runs after
/// every submission-set or results-set change.
pub async fn broadcast_leaderboard(
    db: &PgPool,
    redis: &RedisClient,
    competition: &str,
) -> Result<()> {
    let submissions = submission_repo::fetch_all(db, competition).await?;
    let results = results_repo::snapshot(db, competition).await?;
    let standings = rank::rank(&submissions, &results);
    publish(
        redis,
        competition,
        &ServerMsg::Leaderboard {
            competition: competition.to_string(),
            standings,
        },
    )
    .await
}

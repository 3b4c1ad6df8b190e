//! Results Feed access. The feed is append-only: a winner, once declared,
//! has no correction path.

use crate::db::models::ResultRow;
use anyhow::{Context, Result};
use sqlx::PgPool;
use std::collections::HashMap;

/// Full results snapshot: match id → winner name. Absence means pending.
pub async fn snapshot(db: &PgPool, competition: &str) -> Result<HashMap<String, String>> {
    let rows = sqlx::query_as::<_, ResultRow>(
        "SELECT competition, match_id, winner FROM results WHERE competition = $1",
    )
    .bind(competition)
    .fetch_all(db)
    .await
    .context("fetching results snapshot")?;

    Ok(rows.into_iter().map(|r| (r.match_id, r.winner)).collect())
}

/// Declare a match winner. Returns false when the match already has a
/// declared result, which is left untouched.
pub async fn declare(
    db: &PgPool,
    competition: &str,
    match_id: &str,
    winner: &str,
) -> Result<bool> {
    let inserted = sqlx::query(
        r#"INSERT INTO results (competition, match_id, winner)
           VALUES ($1, $2, $3)
           ON CONFLICT (competition, match_id) DO NOTHING"#,
    )
    .bind(competition)
    .bind(match_id)
    .bind(winner)
    .execute(db)
    .await
    .context("declaring result")?
    .rows_affected();

    Ok(inserted > 0)
}

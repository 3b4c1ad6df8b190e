//! Match Catalog and Deadline access. Both are provisioned before a
//! competition opens and read-only while it runs.

use crate::db::models::MatchRow;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// The fixed, ordered match list for a competition.
pub async fn matches(db: &PgPool, competition: &str) -> Result<Vec<MatchRow>> {
    sqlx::query_as::<_, MatchRow>(
        "SELECT competition, id, side_a, side_b, position
           FROM matches
          WHERE competition = $1
          ORDER BY position",
    )
    .bind(competition)
    .fetch_all(db)
    .await
    .context("listing matches")
}

pub async fn deadline(db: &PgPool, competition: &str) -> Result<Option<DateTime<Utc>>> {
    sqlx::query_scalar::<_, DateTime<Utc>>(
        "SELECT closes_at FROM deadlines WHERE competition = $1",
    )
    .bind(competition)
    .fetch_optional(db)
    .await
    .context("fetching deadline")
}

pub async fn set_deadline(db: &PgPool, competition: &str, closes_at: DateTime<Utc>) -> Result<()> {
    sqlx::query(
        r#"INSERT INTO deadlines (competition, closes_at)
           VALUES ($1, $2)
           ON CONFLICT (competition)
           DO UPDATE SET closes_at = EXCLUDED.closes_at"#,
    )
    .bind(competition)
    .bind(closes_at)
    .execute(db)
    .await
    .context("setting deadline")?;
    Ok(())
}

/// Replace the whole catalog for a competition in one transaction; order of
/// the given list becomes the catalog order.
pub async fn replace_matches(
    db: &PgPool,
    competition: &str,
    entries: &[(String, String, String)],
) -> Result<()> {
    let mut tx = db.begin().await.context("beginning catalog replace")?;

    sqlx::query("DELETE FROM matches WHERE competition = $1")
        .bind(competition)
        .execute(&mut *tx)
        .await
        .context("clearing old catalog")?;

    for (position, (id, side_a, side_b)) in entries.iter().enumerate() {
        sqlx::query(
            "INSERT INTO matches (competition, id, side_a, side_b, position)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(competition)
        .bind(id)
        .bind(side_a)
        .bind(side_b)
        .bind(position as i32)
        .execute(&mut *tx)
        .await
        .context("inserting match")?;
    }

    tx.commit().await.context("committing catalog replace")
}

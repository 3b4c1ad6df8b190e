//! Team Registry access. The `has_submitted` flag is flipped to true in one
//! place only (the submission transaction) and back to false only by
//! [`reset_all`].

use crate::db::models::TeamRow;
use anyhow::{Context, Result};
use sqlx::PgPool;

/// All teams of a competition, name-ascending for display.
pub async fn list(db: &PgPool, competition: &str) -> Result<Vec<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        "SELECT competition, id, team_name, has_submitted
           FROM teams
          WHERE competition = $1
          ORDER BY team_name",
    )
    .bind(competition)
    .fetch_all(db)
    .await
    .context("listing teams")
}

pub async fn get(db: &PgPool, competition: &str, team_id: &str) -> Result<Option<TeamRow>> {
    sqlx::query_as::<_, TeamRow>(
        "SELECT competition, id, team_name, has_submitted
           FROM teams
          WHERE competition = $1 AND id = $2",
    )
    .bind(competition)
    .bind(team_id)
    .fetch_optional(db)
    .await
    .context("fetching team")
}

/// Register a team (or rename an existing one). Never touches the
/// submission flag.
pub async fn register(db: &PgPool, competition: &str, team_id: &str, name: &str) -> Result<()> {
    sqlx::query(
        r#"INSERT INTO teams (competition, id, team_name, has_submitted)
           VALUES ($1, $2, $3, FALSE)
           ON CONFLICT (competition, id)
           DO UPDATE SET team_name = EXCLUDED.team_name"#,
    )
    .bind(competition)
    .bind(team_id)
    .bind(name)
    .execute(db)
    .await
    .context("registering team")?;
    Ok(())
}

/// Administrative reset: reopen every team slot at once. Submission records
/// are deliberately left in place, so history survives a reopened
/// competition.
pub async fn reset_all(db: &PgPool, competition: &str) -> Result<u64> {
    let reset = sqlx::query("UPDATE teams SET has_submitted = FALSE WHERE competition = $1")
        .bind(competition)
        .execute(db)
        .await
        .context("resetting submission flags")?
        .rows_affected();
    Ok(reset)
}

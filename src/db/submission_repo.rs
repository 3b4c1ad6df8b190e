//! Read access to the submission set. Writes happen only inside the
//! submission transaction in `sweep::submit`.

use crate::{db::models::SubmissionRow, sweep::types::Submission};
use anyhow::{Context, Result};
use sqlx::PgPool;

/// Every submission for a competition, decoded to the domain shape the
/// scoring engine consumes.
pub async fn fetch_all(db: &PgPool, competition: &str) -> Result<Vec<Submission>> {
    let rows = sqlx::query_as::<_, SubmissionRow>(
        "SELECT competition, team_id, team_name, submitted_at, picks
           FROM submissions
          WHERE competition = $1",
    )
    .bind(competition)
    .fetch_all(db)
    .await
    .context("listing submissions")?;

    Ok(rows
        .into_iter()
        .map(|r| Submission {
            team_name: r.team_name,
            competition: r.competition,
            submitted_at: r.submitted_at,
            picks: r.picks.0,
        })
        .collect())
}

//! The one-time submission lock.
//!
//! Turns a device's draft into an immutable submission record and flips the
//! team's `has_submitted` flag. Record insert and flag flip run inside one
//! Postgres transaction with the insert sequenced first, and the flip is a
//! conditional write on `has_submitted = FALSE`: two devices racing for the
//! same team serialize on the row lock and the loser gets `AlreadySubmitted`
//! instead of a silent double write.

use crate::{
    db::{catalog_repo, models::TeamRow},
    sweep::{
        draft::Draft,
        local,
        types::{Submission, SweepError},
    },
};
use anyhow::Context;
use chrono::{DateTime, Utc};
use redis::Client as RedisClient;
use sqlx::PgPool;
use uuid::Uuid;

/// Pre-write validation, checked in the same order the flow surfaces them:
/// closed competition, empty draft, missing team choice, already locked.
/// Pure so rejection paths can be exercised without a store.
pub fn check_submittable<'a>(
    draft: &'a Draft,
    deadline: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<&'a str, SweepError> {
    if let Some(closes_at) = deadline {
        if now > closes_at {
            return Err(SweepError::DeadlinePassed);
        }
    }
    if draft.picks.is_empty() {
        return Err(SweepError::NothingToSubmit);
    }
    let team_id = draft.team_id.as_deref().ok_or(SweepError::NoTeamSelected)?;
    if draft.locked {
        return Err(SweepError::AlreadySubmitted);
    }
    Ok(team_id)
}

/// Lock the device's draft for `competition`.
///
/// On success the submission record exists, the team flag is set, the
/// device holds a locked local copy and its draft blob is gone. The local
/// writes after commit are best-effort: the authoritative lock stands even
/// if they fail, and the failure is logged rather than surfaced as a bogus
/// rejection.
pub async fn submit(
    db: &PgPool,
    redis: &RedisClient,
    competition: &str,
    device_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Submission, SweepError> {
    let draft = local::load_draft(redis, device_id)
        .await?
        .filter(|d| d.competition == competition)
        .ok_or(SweepError::NoTeamSelected)?;

    let deadline = catalog_repo::deadline(db, competition).await?;
    let team_id = check_submittable(&draft, deadline, now)?.to_string();

    let mut tx = db
        .begin()
        .await
        .context("beginning submission transaction")?;

    // Authoritative registry re-check under a row lock, not a cached copy.
    let team = sqlx::query_as::<_, TeamRow>(
        "SELECT competition, id, team_name, has_submitted
           FROM teams
          WHERE competition = $1 AND id = $2
            FOR UPDATE",
    )
    .bind(competition)
    .bind(&team_id)
    .fetch_optional(&mut *tx)
    .await
    .context("fetching team for submit")?
    .ok_or(SweepError::NoTeamSelected)?;

    if team.has_submitted {
        return Err(SweepError::AlreadySubmitted);
    }

    let submission = Submission {
        team_name: team.team_name,
        competition: competition.to_string(),
        submitted_at: now,
        picks: draft.picks.clone(),
    };

    // Record before flag. The upsert lets a team re-enter after an
    // administrative reset, when its old record intentionally survives.
    sqlx::query(
        r#"INSERT INTO submissions (competition, team_id, team_name, submitted_at, picks)
           VALUES ($1, $2, $3, $4, $5)
           ON CONFLICT (competition, team_id)
           DO UPDATE SET team_name    = EXCLUDED.team_name,
                         submitted_at = EXCLUDED.submitted_at,
                         picks        = EXCLUDED.picks"#,
    )
    .bind(competition)
    .bind(&team_id)
    .bind(&submission.team_name)
    .bind(submission.submitted_at)
    .bind(sqlx::types::Json(&submission.picks))
    .execute(&mut *tx)
    .await
    .context("persisting submission")?;

    let flipped = sqlx::query(
        "UPDATE teams
            SET has_submitted = TRUE
          WHERE competition = $1 AND id = $2 AND has_submitted = FALSE",
    )
    .bind(competition)
    .bind(&team_id)
    .execute(&mut *tx)
    .await
    .context("marking team as submitted")?
    .rows_affected();

    if flipped == 0 {
        return Err(SweepError::AlreadySubmitted);
    }

    tx.commit().await.context("committing submission")?;

    if let Err(e) = local::store_locked(redis, device_id, &submission).await {
        log::warn!("locked copy write failed for device {device_id}: {e:?}");
    }
    if let Err(e) = local::clear_draft(redis, device_id).await {
        log::warn!("draft cleanup failed for device {device_id}: {e:?}");
    }

    log::info!(
        "team {} locked {} picks for {}",
        team_id,
        submission.picks.len(),
        competition
    );
    Ok(submission)
}

//! Provisioning and operations: catalog, teams, deadline, result
//! declaration, and the competition-wide reset.

use crate::{
    cache,
    db::{catalog_repo, results_repo, team_repo},
    feed,
    http::error_response,
    sweep::{local, types::SweepError},
};
use actix_web::{post, put, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use redis::Client as RedisClient;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct MatchSpec {
    pub id: String,
    pub side_a: String,
    pub side_b: String,
}

/// POST /api/admin/{competition}/matches — replace the Match Catalog.
#[post("/admin/{competition}/matches")]
pub async fn set_matches(
    path: web::Path<String>,
    info: web::Json<Vec<MatchSpec>>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let competition = path.into_inner();
    let entries: Vec<(String, String, String)> = info
        .into_inner()
        .into_iter()
        .map(|m| (m.id, m.side_a, m.side_b))
        .collect();

    if let Err(e) = catalog_repo::replace_matches(&db, &competition, &entries).await {
        return error_response(&SweepError::Persistence(e));
    }
    if let Err(e) = cache::refresh_catalog(&db, &competition).await {
        log::warn!("catalog cache refresh failed for {competition}: {e:?}");
    }
    HttpResponse::Ok().json(serde_json::json!({ "matches": entries.len() }))
}

#[derive(Deserialize)]
pub struct TeamSpec {
    pub id: String,
    pub team_name: String,
}

/// POST /api/admin/{competition}/teams — register (or rename) a team.
#[post("/admin/{competition}/teams")]
pub async fn register_team(
    path: web::Path<String>,
    info: web::Json<TeamSpec>,
    db: web::Data<PgPool>,
    redis: web::Data<RedisClient>,
) -> impl Responder {
    let competition = path.into_inner();
    if let Err(e) = team_repo::register(&db, &competition, &info.id, &info.team_name).await {
        return error_response(&SweepError::Persistence(e));
    }
    if let Err(e) = feed::broadcast_teams(&db, &redis, &competition).await {
        log::warn!("team snapshot broadcast failed: {e:?}");
    }
    HttpResponse::Ok().json(serde_json::json!({ "id": info.id, "team_name": info.team_name }))
}

#[derive(Deserialize)]
pub struct DeadlineSpec {
    pub closes_at: DateTime<Utc>,
}

/// PUT /api/admin/{competition}/deadline
#[put("/admin/{competition}/deadline")]
pub async fn set_deadline(
    path: web::Path<String>,
    info: web::Json<DeadlineSpec>,
    db: web::Data<PgPool>,
) -> impl Responder {
    let competition = path.into_inner();
    match catalog_repo::set_deadline(&db, &competition, info.closes_at).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({ "closes_at": info.closes_at })),
        Err(e) => error_response(&SweepError::Persistence(e)),
    }
}

#[derive(Deserialize)]
pub struct ResultSpec {
    pub match_id: String,
    pub winner: String,
}

/// POST /api/admin/{competition}/results — declare one match winner.
///
/// Declaration is create-only; a second declaration for the same match is
/// refused rather than overwriting the first.
#[post("/admin/{competition}/results")]
pub async fn declare_result(
    path: web::Path<String>,
    info: web::Json<ResultSpec>,
    db: web::Data<PgPool>,
    redis: web::Data<RedisClient>,
) -> impl Responder {
    let competition = path.into_inner();

    let matches = match cache::get_catalog(&competition) {
        Some(m) => m,
        None => match cache::refresh_catalog(&db, &competition).await {
            Ok(()) => cache::get_catalog(&competition).unwrap_or_default(),
            Err(e) => return error_response(&SweepError::Persistence(e)),
        },
    };
    let def = match matches.iter().find(|m| m.id == info.match_id) {
        Some(d) => d,
        None => return HttpResponse::BadRequest().body("unknown match"),
    };
    if info.winner != def.side_a && info.winner != def.side_b {
        return HttpResponse::BadRequest().body("winner is not a side of this match");
    }

    match results_repo::declare(&db, &competition, &info.match_id, &info.winner).await {
        Ok(true) => {}
        Ok(false) => {
            return HttpResponse::Conflict().json(serde_json::json!({
                "error": "result_already_declared",
                "message": "this match already has a declared winner",
            }))
        }
        Err(e) => return error_response(&SweepError::Persistence(e)),
    }

    // The results set changed: refresh live views and drop the cached
    // ranking.
    feed::invalidate_leaderboard(&redis, &competition).await;
    if let Err(e) = feed::broadcast_results(&db, &redis, &competition).await {
        log::warn!("results snapshot broadcast failed: {e:?}");
    }
    if let Err(e) = feed::broadcast_leaderboard(&db, &redis, &competition).await {
        log::warn!("leaderboard broadcast failed: {e:?}");
    }

    HttpResponse::Ok().json(serde_json::json!({
        "match_id": info.match_id,
        "winner": info.winner,
    }))
}

#[derive(Deserialize)]
pub struct ResetReq {
    /// Device invoking the reset; its local blobs are cleared too. Other
    /// devices keep stale local state until they next read it.
    pub device_id: Option<Uuid>,
}

/// POST /api/admin/{competition}/reset — reopen every team slot.
///
/// Submission records survive on purpose, which transiently breaks the
/// "submission iff flag" invariant until teams re-enter; re-submission then
/// replaces the old record.
#[post("/admin/{competition}/reset")]
pub async fn reset(
    path: web::Path<String>,
    info: web::Json<ResetReq>,
    db: web::Data<PgPool>,
    redis: web::Data<RedisClient>,
) -> impl Responder {
    let competition = path.into_inner();

    let reopened = match team_repo::reset_all(&db, &competition).await {
        Ok(n) => n,
        Err(e) => return error_response(&SweepError::Persistence(e)),
    };

    if let Some(device_id) = info.device_id {
        if let Err(e) = local::clear_device(&redis, device_id).await {
            log::warn!("device blob clear failed for {device_id}: {e:?}");
        }
    }

    if let Err(e) = feed::broadcast_teams(&db, &redis, &competition).await {
        log::warn!("team snapshot broadcast failed: {e:?}");
    }

    log::info!("competition {competition} reset, {reopened} team slots reopened");
    HttpResponse::Ok().json(serde_json::json!({ "teams_reset": reopened }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(set_matches)
        .service(register_team)
        .service(set_deadline)
        .service(declare_result)
        .service(reset);
}

//! Team Registry listing and the device's one team choice.

use crate::{
    db::team_repo,
    feed,
    http::error_response,
    sweep::{
        draft::Draft,
        local,
        types::SweepError,
    },
};
use actix_web::{get, post, web, HttpResponse, Responder};
use redis::Client as RedisClient;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

/// GET /api/teams/{competition}
#[get("/teams/{competition}")]
pub async fn list(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let competition = path.into_inner();
    match team_repo::list(&db, &competition).await {
        Ok(rows) => HttpResponse::Ok().json(feed::team_entries(rows)),
        Err(e) => {
            log::error!("team list failed for {competition}: {e:?}");
            HttpResponse::InternalServerError().body("DB error")
        }
    }
}

#[derive(Deserialize)]
pub struct SelectReq {
    pub device_id: Uuid,
    pub team_id: String,
}

/// POST /api/teams/{competition}/select
///
/// Re-checks the live registry before accepting: a team that already
/// submitted cannot be chosen, and the rejection names that reason.
#[post("/teams/{competition}/select")]
pub async fn select(
    path: web::Path<String>,
    info: web::Json<SelectReq>,
    db: web::Data<PgPool>,
    redis: web::Data<RedisClient>,
) -> impl Responder {
    let competition = path.into_inner();

    let team = match team_repo::get(&db, &competition, &info.team_id).await {
        Ok(Some(t)) => t,
        Ok(None) => return error_response(&SweepError::NoTeamSelected),
        Err(e) => return error_response(&SweepError::Persistence(e)),
    };

    let mut draft = match local::load_draft(&redis, info.device_id).await {
        Ok(Some(d)) if d.competition == competition => d,
        Ok(_) => Draft::new(&competition),
        Err(e) => return error_response(&SweepError::Persistence(e)),
    };

    if let Err(e) = draft.choose_team(&team.id, team.has_submitted) {
        return error_response(&e);
    }
    if let Err(e) = local::store_draft(&redis, info.device_id, &draft).await {
        return error_response(&SweepError::Persistence(e));
    }

    HttpResponse::Ok().json(serde_json::json!({
        "team_id": team.id,
        "team_name": team.team_name,
        "phase": draft.phase(),
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(list).service(select);
}

//! In-progress draft picks for a device. Freely editable until locked.

use crate::{
    cache,
    http::error_response,
    sweep::{
        draft::Draft,
        local,
        types::{Pick, SweepError},
    },
};
use actix_web::{get, put, web, HttpResponse, Responder};
use redis::Client as RedisClient;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

/// GET /api/draft/{device_id}
#[get("/draft/{device_id}")]
pub async fn get_draft(path: web::Path<Uuid>, redis: web::Data<RedisClient>) -> impl Responder {
    let device_id = path.into_inner();

    match local::load_draft(&redis, device_id).await {
        Ok(Some(draft)) => {
            let phase = draft.phase();
            HttpResponse::Ok().json(serde_json::json!({ "draft": draft, "phase": phase }))
        }
        Ok(None) => match local::load_locked(&redis, device_id).await {
            // Draft discarded at lock time; answer with the locked view.
            Ok(Some(sub)) => {
                let view = Draft::locked_view(sub.competition, sub.picks);
                let phase = view.phase();
                HttpResponse::Ok().json(serde_json::json!({ "draft": view, "phase": phase }))
            }
            Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
                "error": "no_draft",
                "message": "this device has no draft in progress",
            })),
            Err(e) => error_response(&SweepError::Persistence(e)),
        },
        Err(e) => error_response(&SweepError::Persistence(e)),
    }
}

#[derive(Deserialize)]
pub struct PickReq {
    pub competition: String,
    pub match_id: String,
    pub winner: String,
}

/// PUT /api/draft/{device_id}
///
/// Upserts one pick; re-picking a match overwrites the earlier choice.
#[put("/draft/{device_id}")]
pub async fn put_pick(
    path: web::Path<Uuid>,
    info: web::Json<PickReq>,
    db: web::Data<PgPool>,
    redis: web::Data<RedisClient>,
) -> impl Responder {
    let device_id = path.into_inner();

    match local::load_locked(&redis, device_id).await {
        Ok(Some(_)) => return error_response(&SweepError::AlreadySubmitted),
        Ok(None) => {}
        Err(e) => return error_response(&SweepError::Persistence(e)),
    }

    // Picks must reference a catalogued match and one of its two sides.
    let matches = match cache::get_catalog(&info.competition) {
        Some(m) => m,
        None => match cache::refresh_catalog(&db, &info.competition).await {
            Ok(()) => cache::get_catalog(&info.competition).unwrap_or_default(),
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

    let mut draft = match local::load_draft(&redis, device_id).await {
        Ok(Some(d)) if d.competition == info.competition => d,
        Ok(_) => Draft::new(&info.competition),
        Err(e) => return error_response(&SweepError::Persistence(e)),
    };

    let pick = Pick {
        match_id: info.match_id.clone(),
        side_a: def.side_a.clone(),
        side_b: def.side_b.clone(),
        winner: info.winner.clone(),
    };
    if let Err(e) = draft.set_pick(pick) {
        return error_response(&e);
    }
    if let Err(e) = local::store_draft(&redis, device_id, &draft).await {
        return error_response(&SweepError::Persistence(e));
    }

    let phase = draft.phase();
    HttpResponse::Ok().json(serde_json::json!({ "draft": draft, "phase": phase }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_draft).service(put_pick);
}

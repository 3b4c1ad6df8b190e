//! "My predictions" view: the device's locked copy judged against the live
//! Results Feed. Reads the authoritative store only for results.

use crate::{
    db::results_repo,
    http::error_response,
    sweep::{
        local, scoring,
        types::{SweepError, Verdict},
    },
};
use actix_web::{get, web, HttpResponse, Responder};
use redis::Client as RedisClient;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Serialize)]
pub struct PredictionLine {
    pub match_id: String,
    pub side_a: String,
    pub side_b: String,
    pub winner: String,
    pub result: Option<String>,
    pub verdict: Verdict,
}

/// GET /api/predictions/{device_id}
#[get("/predictions/{device_id}")]
pub async fn mine(
    path: web::Path<Uuid>,
    db: web::Data<PgPool>,
    redis: web::Data<RedisClient>,
) -> impl Responder {
    let device_id = path.into_inner();

    let submission = match local::load_locked(&redis, device_id).await {
        Ok(Some(s)) => s,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": "no_locked_predictions",
                "message": "this device has not submitted predictions",
            }))
        }
        Err(e) => return error_response(&SweepError::Persistence(e)),
    };

    let results = match results_repo::snapshot(&db, &submission.competition).await {
        Ok(r) => r,
        Err(e) => return error_response(&SweepError::Persistence(e)),
    };

    let lines: Vec<PredictionLine> = submission
        .picks
        .iter()
        .map(|p| PredictionLine {
            match_id: p.match_id.clone(),
            side_a: p.side_a.clone(),
            side_b: p.side_b.clone(),
            winner: p.winner.clone(),
            result: results.get(&p.match_id).cloned(),
            verdict: scoring::judge(p, &results),
        })
        .collect();

    HttpResponse::Ok().json(serde_json::json!({
        "team_name": submission.team_name,
        "competition": submission.competition,
        "submitted_at": submission.submitted_at,
        "score": scoring::score(&submission.picks, &results),
        "predictions": lines,
    }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(mine);
}

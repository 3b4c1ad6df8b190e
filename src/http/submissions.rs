//! The submit endpoint: locks a device's draft into its team's one
//! submission.

use crate::{feed, http::error_response, metrics, sweep::submit};
use actix_web::{post, web, HttpResponse, Responder};
use chrono::Utc;
use redis::Client as RedisClient;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct SubmitReq {
    pub device_id: Uuid,
}

/// POST /api/submissions/{competition}
#[post("/submissions/{competition}")]
pub async fn create(
    path: web::Path<String>,
    info: web::Json<SubmitReq>,
    db: web::Data<PgPool>,
    redis: web::Data<RedisClient>,
) -> impl Responder {
    let competition = path.into_inner();

    let submission = match submit::submit(&db, &redis, &competition, info.device_id, Utc::now()).await
    {
        Ok(s) => s,
        Err(e) => return error_response(&e),
    };
    metrics::SUBMISSIONS_TOTAL
        .with_label_values(&[competition.as_str()])
        .inc();

    // The submission set changed: refresh live views and drop the cached
    // ranking. Best-effort, the lock is already durable.
    feed::invalidate_leaderboard(&redis, &competition).await;
    if let Err(e) = feed::broadcast_teams(&db, &redis, &competition).await {
        log::warn!("team snapshot broadcast failed: {e:?}");
    }
    if let Err(e) = feed::broadcast_leaderboard(&db, &redis, &competition).await {
        log::warn!("leaderboard broadcast failed: {e:?}");
    }

    HttpResponse::Created().json(submission)
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create);
}

//! Ranked standings for a competition, cached briefly in Redis.

use crate::{
    config::settings,
    db::{results_repo, submission_repo},
    feed,
    sweep::{rank, types::RankEntry},
};
use actix_web::{get, web, HttpResponse, Responder};
use redis::{AsyncCommands, Client as RedisClient};
use serde::Deserialize;
use sqlx::PgPool;

#[derive(Deserialize)]
pub struct LeaderboardParams {
    /// Maximum number of entries to return; omitted means the whole field.
    pub limit: Option<usize>,
}

/// GET /api/leaderboard/{competition}
#[get("/leaderboard/{competition}")]
pub async fn leaderboard(
    path: web::Path<String>,
    db: web::Data<PgPool>,
    redis: web::Data<RedisClient>,
    web::Query(params): web::Query<LeaderboardParams>,
) -> impl Responder {
    let competition = path.into_inner();

    // 1) Try the cached full ranking; the limit is applied after the cache
    //    so every limit shares one entry and one invalidation.
    let key = feed::leaderboard_key(&competition);
    let mut conn = match redis.get_multiplexed_async_connection().await {
        Ok(c) => c,
        Err(_) => return HttpResponse::InternalServerError().body("Redis unavailable"),
    };
    if let Ok(Some(cached)) = conn.get::<_, Option<String>>(&key).await {
        if let Ok(standings) = serde_json::from_str::<Vec<RankEntry>>(&cached) {
            return HttpResponse::Ok().json(truncate(standings, params.limit));
        }
    }

    // 2) Recompute from full authoritative snapshots
    let submissions = match submission_repo::fetch_all(&db, &competition).await {
        Ok(s) => s,
        Err(e) => {
            log::error!("leaderboard read failed for {competition}: {e:?}");
            return HttpResponse::InternalServerError().body("DB error");
        }
    };
    let results = match results_repo::snapshot(&db, &competition).await {
        Ok(r) => r,
        Err(e) => {
            log::error!("leaderboard read failed for {competition}: {e:?}");
            return HttpResponse::InternalServerError().body("DB error");
        }
    };
    let standings = rank::rank(&submissions, &results);

    // 3) Cache the full ranking
    if let Ok(body) = serde_json::to_string(&standings) {
        let _: () = conn
            .set_ex(&key, body, settings().leaderboard_cache_ttl)
            .await
            .unwrap_or(());
    }

    HttpResponse::Ok().json(truncate(standings, params.limit))
}

fn truncate(mut standings: Vec<RankEntry>, limit: Option<usize>) -> Vec<RankEntry> {
    if let Some(n) = limit {
        standings.truncate(n);
    }
    standings
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(leaderboard);
}

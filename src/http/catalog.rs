//! Match Catalog and Deadline reads.

use crate::{cache, db::catalog_repo};
use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use sqlx::PgPool;

/// GET /api/catalog/{competition}
#[get("/catalog/{competition}")]
pub async fn catalog(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let competition = path.into_inner();

    if let Some(matches) = cache::get_catalog(&competition) {
        return HttpResponse::Ok().json(matches);
    }

    // Cold cache (e.g. catalog provisioned after start-up): read through.
    match cache::refresh_catalog(&db, &competition).await {
        Ok(()) => HttpResponse::Ok().json(cache::get_catalog(&competition).unwrap_or_default()),
        Err(e) => {
            log::error!("catalog read failed for {competition}: {e:?}");
            HttpResponse::InternalServerError().body("DB error")
        }
    }
}

/// GET /api/deadline/{competition}
#[get("/deadline/{competition}")]
pub async fn deadline(path: web::Path<String>, db: web::Data<PgPool>) -> impl Responder {
    let competition = path.into_inner();
    match catalog_repo::deadline(&db, &competition).await {
        Ok(closes_at) => {
            let closed = closes_at.map(|d| Utc::now() > d).unwrap_or(false);
            HttpResponse::Ok().json(serde_json::json!({
                "closes_at": closes_at,
                "closed": closed,
            }))
        }
        Err(e) => {
            log::error!("deadline read failed for {competition}: {e:?}");
            HttpResponse::InternalServerError().body("DB error")
        }
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(catalog).service(deadline);
}

//! In-memory warm cache for the Match Catalog.
//!
//! The catalog is static for the life of a competition, so it is loaded once
//! at start-up and the draft/catalog endpoints stop hitting Postgres on
//! every request. Admin catalog writes refresh the affected competition.

use crate::db::catalog_repo;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// One catalog entry, in competition order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDef {
    pub id: String,
    pub side_a: String,
    pub side_b: String,
}

/// Global map competition → ordered match list.
pub static CATALOGS: Lazy<DashMap<String, Vec<MatchDef>>> = Lazy::new(DashMap::new);

/// Fetch every competition's catalog and populate [`CATALOGS`]. Idempotent.
pub async fn warm_catalogs(db: &PgPool) -> anyhow::Result<()> {
    let rows = sqlx::query_as::<_, (String, String, String, String)>(
        "SELECT competition, id, side_a, side_b FROM matches ORDER BY competition, position",
    )
    .fetch_all(db)
    .await?;

    CATALOGS.clear();
    for (competition, id, side_a, side_b) in rows {
        CATALOGS
            .entry(competition)
            .or_default()
            .push(MatchDef { id, side_a, side_b });
    }
    Ok(())
}

/// Reload a single competition's catalog after an admin write.
pub async fn refresh_catalog(db: &PgPool, competition: &str) -> anyhow::Result<()> {
    let rows = catalog_repo::matches(db, competition).await?;
    let defs = rows
        .into_iter()
        .map(|m| MatchDef {
            id: m.id,
            side_a: m.side_a,
            side_b: m.side_b,
        })
        .collect();
    CATALOGS.insert(competition.to_string(), defs);
    Ok(())
}

/// Cached ordered catalog for a competition, if warmed.
pub fn get_catalog(competition: &str) -> Option<Vec<MatchDef>> {
    CATALOGS.get(competition).map(|e| e.value().clone())
}

/// Warm every in-memory cache we have (called once at startup).
pub async fn warm_all(db: &PgPool) {
    if let Err(e) = warm_catalogs(db).await {
        log::warn!("cache warm-up failed: {e:?}");
    }
}

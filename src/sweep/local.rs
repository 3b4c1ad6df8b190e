//! Device-keyed blob store backed by Redis.
//!
//! Plays the role of on-device storage: a mutable draft blob
//! (`device:<id>:draft`) and a locked submission copy
//! (`device:<id>:locked`) written once at lock time so the predictions view
//! needs no further reads from the authoritative store. Both are keyed by
//! device, never by account.

use crate::{
    config::settings,
    sweep::{draft::Draft, types::Submission},
};
use anyhow::{Context, Result};
use redis::{AsyncCommands, Client as RedisClient};
use uuid::Uuid;

fn draft_key(device_id: Uuid) -> String {
    format!("device:{device_id}:draft")
}

fn locked_key(device_id: Uuid) -> String {
    format!("device:{device_id}:locked")
}

pub async fn load_draft(redis: &RedisClient, device_id: Uuid) -> Result<Option<Draft>> {
    let mut conn = redis
        .get_multiplexed_async_connection()
        .await
        .context("redis connection")?;
    let json: Option<String> = conn
        .get(draft_key(device_id))
        .await
        .context("reading draft blob")?;
    match json {
        Some(j) => Ok(Some(serde_json::from_str(&j).context("decoding draft blob")?)),
        None => Ok(None),
    }
}

pub async fn store_draft(redis: &RedisClient, device_id: Uuid, draft: &Draft) -> Result<()> {
    let mut conn = redis
        .get_multiplexed_async_connection()
        .await
        .context("redis connection")?;
    let json = serde_json::to_string(draft).context("encoding draft blob")?;
    let _: () = conn
        .set_ex(draft_key(device_id), json, settings().draft_ttl)
        .await
        .context("writing draft blob")?;
    Ok(())
}

pub async fn clear_draft(redis: &RedisClient, device_id: Uuid) -> Result<()> {
    let mut conn = redis
        .get_multiplexed_async_connection()
        .await
        .context("redis connection")?;
    let _: () = conn
        .del(draft_key(device_id))
        .await
        .context("deleting draft blob")?;
    Ok(())
}

/// Write the device's immutable locked copy. No TTL: it drives the
/// predictions view for the rest of the competition.
pub async fn store_locked(redis: &RedisClient, device_id: Uuid, sub: &Submission) -> Result<()> {
    let mut conn = redis
        .get_multiplexed_async_connection()
        .await
        .context("redis connection")?;
    let json = serde_json::to_string(sub).context("encoding locked copy")?;
    let _: () = conn
        .set(locked_key(device_id), json)
        .await
        .context("writing locked copy")?;
    Ok(())
}

pub async fn load_locked(redis: &RedisClient, device_id: Uuid) -> Result<Option<Submission>> {
    let mut conn = redis
        .get_multiplexed_async_connection()
        .await
        .context("redis connection")?;
    let json: Option<String> = conn
        .get(locked_key(device_id))
        .await
        .context("reading locked copy")?;
    match json {
        Some(j) => Ok(Some(
            serde_json::from_str(&j).context("decoding locked copy")?,
        )),
        None => Ok(None),
    }
}

/// Drop both blobs for a device. Used by the administrative reset for the
/// invoking device only; other devices keep stale local state until they
/// next read it.
pub async fn clear_device(redis: &RedisClient, device_id: Uuid) -> Result<()> {
    let mut conn = redis
        .get_multiplexed_async_connection()
        .await
        .context("redis connection")?;
    let _: () = conn
        .del(vec![draft_key(device_id), locked_key(device_id)])
        .await
        .context("clearing device blobs")?;
    Ok(())
}

//! WebSocket endpoint: live full-snapshot feed for one competition.
//!
//! On connect the socket receives complete Teams, Results and Leaderboard
//! snapshots, then every snapshot published for the competition while it
//! stays open. Consumers always replace state wholesale; no deltas are ever
//! sent, so out-of-order delivery cannot corrupt a view. Closing the socket
//! tears down the Redis subscription with it, so a dead client receives
//! nothing further.

use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_ws::{handle, Message, Session};
use futures::StreamExt;
use redis::Client as RedisClient;
use sqlx::PgPool;

use crate::{
    db::{results_repo, submission_repo, team_repo},
    feed,
    protocol::ServerMsg,
    sweep::rank,
};

pub async fn ws_index(
    req: HttpRequest,
    body: web::Payload,
    db_pool: web::Data<PgPool>,
    redis: web::Data<RedisClient>,
) -> Result<HttpResponse, Error> {
    // 1 · competition query param
    let competition = req
        .query_string()
        .split('&')
        .find_map(|kv| kv.strip_prefix("competition="))
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .ok_or_else(|| actix_web::error::ErrorBadRequest("competition missing"))?;

    // 2 · handshake
    let (response, mut session, mut ws_stream) = handle(&req, body)?;

    // 3 · Redis subscribe before the initial snapshots, so nothing published
    //     in between is missed
    let mut pubsub = redis
        .get_async_pubsub()
        .await
        .map_err(|_| actix_web::error::ErrorInternalServerError("redis subscribe"))?;
    pubsub
        .subscribe(feed::channel(&competition))
        .await
        .map_err(|_| actix_web::error::ErrorInternalServerError("redis subscribe"))?;

    let db = db_pool.get_ref().clone();

    actix::spawn(async move {
        if let Err(e) = send_snapshots(&db, &competition, &mut session).await {
            log::warn!("initial snapshots failed for {competition}: {e:?}");
            return;
        }

        let mut feed_stream = pubsub.on_message();
        loop {
            tokio::select! {
                // client → server: only liveness traffic is expected
                Some(frame) = ws_stream.next() => {
                    match frame {
                        Ok(Message::Ping(bytes)) => {
                            if session.pong(&bytes).await.is_err() {
                                break;
                            }
                        }
                        Ok(Message::Close(_)) | Err(_) => break,
                        _ => {}
                    }
                }
                // published snapshot → client
                Some(msg) = feed_stream.next() => {
                    if let Ok(json) = msg.get_payload::<String>() {
                        if let Err(e) = session.text(json).await {
                            log::warn!("WS send failed for {competition}: {e:?}");
                            break;
                        }
                    }
                }
                else => break,
            }
        }

        log::info!("feed socket closed for {competition}");
    });

    Ok(response)
}

/// Current full state of every observed collection, pushed once on connect.
async fn send_snapshots(
    db: &PgPool,
    competition: &str,
    session: &mut Session,
) -> anyhow::Result<()> {
    let teams = feed::team_entries(team_repo::list(db, competition).await?);
    let results = results_repo::snapshot(db, competition).await?;
    let submissions = submission_repo::fetch_all(db, competition).await?;
    let standings = rank::rank(&submissions, &results);

    let msgs = [
        ServerMsg::Teams {
            competition: competition.to_string(),
            teams,
        },
        ServerMsg::Results {
            competition: competition.to_string(),
            results,
        },
        ServerMsg::Leaderboard {
            competition: competition.to_string(),
            standings,
        },
    ];
    for msg in &msgs {
        let json = serde_json::to_string(msg)?;
        if session.text(json).await.is_err() {
            anyhow::bail!("socket closed during initial snapshots");
        }
    }
    Ok(())
}

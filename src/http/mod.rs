pub mod admin;
pub mod catalog;
pub mod draft;
pub mod health;
pub mod leaderboard;
pub mod predictions;
pub mod routes;
pub mod submissions;
pub mod teams;

use crate::sweep::types::SweepError;
use actix_web::{http::StatusCode, HttpResponse};

/// Map a domain outcome to a status + JSON body the UI can explain.
pub fn error_response(err: &SweepError) -> HttpResponse {
    let (status, code) = match err {
        SweepError::DeadlinePassed => (StatusCode::CONFLICT, "deadline_passed"),
        SweepError::AlreadySubmitted => (StatusCode::CONFLICT, "already_submitted"),
        SweepError::NothingToSubmit => (StatusCode::BAD_REQUEST, "nothing_to_submit"),
        SweepError::NoTeamSelected => (StatusCode::BAD_REQUEST, "no_team_selected"),
        SweepError::Persistence(e) => {
            log::error!("persistence failure: {e:?}");
            (StatusCode::INTERNAL_SERVER_ERROR, "persistence_failure")
        }
    };
    HttpResponse::build(status).json(serde_json::json!({
        "error": code,
        "message": err.to_string(),
    }))
}

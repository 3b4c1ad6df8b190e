use crate::sweep::types::Pick;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow};

#[derive(Debug, FromRow)]
pub struct TeamRow {
    pub competition: String,
    pub id: String,
    pub team_name: String,
    pub has_submitted: bool,
}

#[derive(Debug, FromRow, Clone)]
pub struct MatchRow {
    pub competition: String,
    pub id: String,
    pub side_a: String,
    pub side_b: String,
    pub position: i32,
}

#[derive(Debug, FromRow)]
pub struct SubmissionRow {
    pub competition: String,
    pub team_id: String,
    pub team_name: String,
    pub submitted_at: DateTime<Utc>,
    pub picks: Json<Vec<Pick>>,
}

#[derive(Debug, FromRow)]
pub struct ResultRow {
    pub competition: String,
    pub match_id: String,
    pub winner: String,
}

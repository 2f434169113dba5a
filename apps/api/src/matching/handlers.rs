//! Axum route handlers for the job matching API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::match_jobs;
use crate::models::job::MatchResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchesQuery {
    pub session_id: Uuid,
    /// Optional presentation slice. The matcher itself is unbounded; the UI
    /// typically asks for the first 5.
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchResult>,
    /// Total surviving matches before the limit was applied.
    pub total: usize,
}

/// GET /api/v1/matches
///
/// Ranks the job table against the session's declared skills.
/// Zero matches is an empty list, not an error.
pub async fn handle_get_matches(
    State(state): State<AppState>,
    Query(params): Query<MatchesQuery>,
) -> Result<Json<MatchesResponse>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&params.session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", params.session_id)))?;

    let mut matches = match_jobs(&session.profile.skills, &state.jobs);
    let total = matches.len();
    if let Some(limit) = params.limit {
        matches.truncate(limit);
    }

    Ok(Json(MatchesResponse { matches, total }))
}

//! Axum route handler for the analytics report view.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::report::{build_report, MatchReport};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub session_id: Uuid,
}

/// GET /api/v1/report
///
/// Builds the match insights report (chart datasets, top-job entries, career
/// recommendation) for the session's current skills.
pub async fn handle_get_report(
    State(state): State<AppState>,
    Query(params): Query<ReportQuery>,
) -> Result<Json<MatchReport>, AppError> {
    let skills = {
        let sessions = state.sessions.read().await;
        sessions
            .get(&params.session_id)
            .ok_or_else(|| AppError::NotFound(format!("Session {} not found", params.session_id)))?
            .profile
            .skills
            .clone()
    };

    Ok(Json(build_report(&skills, &state.jobs)))
}

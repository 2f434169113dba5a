//! Axum route handlers for session and manual profile management.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{merge_profile, ProfilePatch, UserProfile};
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    pub session_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub patch: ProfilePatch,
}

/// POST /api/v1/sessions
///
/// Starts a new session with an empty profile.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<Json<CreateSessionResponse>, AppError> {
    let session_id = Uuid::new_v4();
    state
        .sessions
        .write()
        .await
        .insert(session_id, Session::new());
    Ok(Json(CreateSessionResponse { session_id }))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<UserProfile>, AppError> {
    let sessions = state.sessions.read().await;
    let session = sessions
        .get(&params.session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {} not found", params.session_id)))?;
    Ok(Json(session.profile.clone()))
}

/// PATCH /api/v1/profile
///
/// Manual entry path: overwrites exactly the fields present in the body and
/// returns the updated profile.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&request.session_id).ok_or_else(|| {
        AppError::NotFound(format!("Session {} not found", request.session_id))
    })?;
    session.profile = merge_profile(&session.profile, &request.patch);
    Ok(Json(session.profile.clone()))
}

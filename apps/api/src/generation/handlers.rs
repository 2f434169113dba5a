//! Axum route handlers for the résumé generation API.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::assembler::assemble;
use crate::generation::prompts::build_resume_prompt;
use crate::models::resume::ResumeDocument;
use crate::render::{render_latex, resume_filename};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateResumeRequest {
    pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct GenerateResumeResponse {
    pub document: ResumeDocument,
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    pub session_id: Uuid,
}

/// POST /api/v1/resumes
///
/// Full generation pipeline: build prompt → LLM narrative → marker-based
/// summary extraction → document model. The document is kept in the session
/// so the download endpoint can render it.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<GenerateResumeRequest>,
) -> Result<Json<GenerateResumeResponse>, AppError> {
    let profile = {
        let sessions = state.sessions.read().await;
        sessions
            .get(&request.session_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("Session {} not found", request.session_id))
            })?
            .profile
            .clone()
    };

    let prompt = build_resume_prompt(&profile);
    let narrative = state
        .llm
        .call(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Resume generation failed: {e}")))?;

    let document = assemble(&profile, &narrative)?;
    let filename = resume_filename(&document.name);

    let mut sessions = state.sessions.write().await;
    let session = sessions.get_mut(&request.session_id).ok_or_else(|| {
        AppError::NotFound(format!("Session {} not found", request.session_id))
    })?;
    session.resume = Some(document.clone());

    Ok(Json(GenerateResumeResponse { document, filename }))
}

/// GET /api/v1/resumes/download
///
/// Renders the session's generated document and serves it as a named file
/// blob. 404 until a resume has been generated for the session.
pub async fn handle_download_resume(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Response, AppError> {
    let document = {
        let sessions = state.sessions.read().await;
        let session = sessions.get(&params.session_id).ok_or_else(|| {
            AppError::NotFound(format!("Session {} not found", params.session_id))
        })?;
        session
            .resume
            .clone()
            .ok_or_else(|| {
                AppError::NotFound("No resume has been generated for this session".to_string())
            })?
    };

    let source = render_latex(&document);
    let filename = resume_filename(&document.name);

    Ok((
        [
            (header::CONTENT_TYPE, "application/x-tex".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        source,
    )
        .into_response())
}

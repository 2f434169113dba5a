use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::acquisition::transcribe::TranscribeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The acquisition pipeline surfaces each failure stage as a distinct variant
/// so the client can tell "nothing was said" apart from "the service is down"
/// apart from "the model returned garbage".
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No recognizable speech detected")]
    NoSpeech,

    #[error("Transcription service unreachable: {0}")]
    TranscriberUnreachable(String),

    #[error("Transcription service failed: {0}")]
    Transcription(String),

    #[error("Extraction response was not valid JSON")]
    ExtractionParse { raw: String },

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<TranscribeError> for AppError {
    fn from(err: TranscribeError) -> Self {
        match err {
            TranscribeError::NoSpeech => AppError::NoSpeech,
            TranscribeError::Unreachable(e) => AppError::TranscriberUnreachable(e.to_string()),
            TranscribeError::Service { status, message } => {
                AppError::Transcription(format!("status {status}: {message}"))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::NoSpeech => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "TRANSCRIPTION_NO_SPEECH",
                "No recognizable speech was detected in the recording. Please try again."
                    .to_string(),
            ),
            AppError::TranscriberUnreachable(msg) => {
                tracing::error!("Transcription service unreachable: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "TRANSCRIPTION_UNREACHABLE",
                    "The transcription service could not be reached".to_string(),
                )
            }
            AppError::Transcription(msg) => {
                tracing::error!("Transcription failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "TRANSCRIPTION_ERROR",
                    "The transcription service returned an error".to_string(),
                )
            }
            AppError::ExtractionParse { raw } => {
                tracing::error!("Extraction returned unparseable content: {raw}");
                // The raw text goes back to the client for diagnosis.
                (
                    StatusCode::BAD_GATEWAY,
                    "EXTRACTION_PARSE_ERROR",
                    format!("The extraction response was not valid JSON. Raw response: {raw}"),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "The generative-language service failed to produce a response".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn error_payload(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_no_speech_maps_to_its_own_condition() {
        let mapped = AppError::from(TranscribeError::NoSpeech);
        assert!(matches!(mapped, AppError::NoSpeech));
    }

    #[test]
    fn test_service_failure_maps_to_transcription_error() {
        let mapped = AppError::from(TranscribeError::Service {
            status: 503,
            message: "overloaded".to_string(),
        });
        match mapped {
            AppError::Transcription(msg) => assert!(msg.contains("503")),
            other => panic!("expected Transcription, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_speech_response_code() {
        let (status, body) = error_payload(AppError::NoSpeech).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "TRANSCRIPTION_NO_SPEECH");
    }

    #[tokio::test]
    async fn test_unreachable_response_code() {
        let (status, body) =
            error_payload(AppError::TranscriberUnreachable("refused".to_string())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "TRANSCRIPTION_UNREACHABLE");
    }

    #[tokio::test]
    async fn test_extraction_parse_response_surfaces_raw_text() {
        let (status, body) = error_payload(AppError::ExtractionParse {
            raw: "the model apologized instead".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "EXTRACTION_PARSE_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("the model apologized instead"));
    }
}

//! Axum route handlers for voice-assisted profile acquisition.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::acquisition::extractor::extract_profile;
use crate::errors::AppError;
use crate::models::profile::{merge_profile, UserProfile};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AcquireResponse {
    pub transcript: String,
    pub profile: UserProfile,
}

/// POST /api/v1/profile/acquire
///
/// Multipart form: `session_id` text field plus an `audio` file field.
/// Pipeline: transcribe → extract → merge into the session profile.
/// Each stage surfaces its own error; nothing is retried automatically.
pub async fn handle_acquire_profile(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AcquireResponse>, AppError> {
    let mut session_id: Option<Uuid> = None;
    let mut audio: Option<(Bytes, String)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart upload: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("session_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable session_id: {e}")))?;
                session_id = Some(text.parse().map_err(|_| {
                    AppError::Validation("session_id must be a valid UUID".to_string())
                })?);
            }
            Some("audio") => {
                let filename = field
                    .file_name()
                    .unwrap_or("recording.wav")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Unreadable audio field: {e}")))?;
                audio = Some((bytes, filename));
            }
            _ => {}
        }
    }

    let session_id =
        session_id.ok_or_else(|| AppError::Validation("Missing session_id field".to_string()))?;
    let (audio, filename) =
        audio.ok_or_else(|| AppError::Validation("Missing audio field".to_string()))?;
    if audio.is_empty() {
        return Err(AppError::Validation("Audio upload is empty".to_string()));
    }

    let transcript = state.transcriber.transcribe(audio, &filename).await?;
    info!("Transcribed {} characters of speech", transcript.len());

    let patch = extract_profile(&transcript, &state.llm).await?;

    let mut sessions = state.sessions.write().await;
    let session = sessions
        .get_mut(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("Session {session_id} not found")))?;
    session.profile = merge_profile(&session.profile, &patch);

    Ok(Json(AcquireResponse {
        transcript,
        profile: session.profile.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use bytes::Bytes;
    use tower::ServiceExt;

    use crate::acquisition::transcribe::{TranscribeError, Transcriber};
    use crate::config::Config;
    use crate::llm_client::GeminiClient;
    use crate::session::{new_session_store, Session};
    use crate::state::AppState;

    enum Outcome {
        NoSpeech,
        Unreachable,
        ServiceDown,
    }

    /// Transcriber stub that fails at a chosen stage, so the route's error
    /// mapping can be asserted end to end without a live speech service.
    struct FailingTranscriber(Outcome);

    #[async_trait::async_trait]
    impl Transcriber for FailingTranscriber {
        async fn transcribe(
            &self,
            _audio: Bytes,
            _filename: &str,
        ) -> Result<String, TranscribeError> {
            match self.0 {
                Outcome::NoSpeech => Err(TranscribeError::NoSpeech),
                Outcome::Unreachable => Err(TranscribeError::Unreachable(connect_error().await)),
                Outcome::ServiceDown => Err(TranscribeError::Service {
                    status: 503,
                    message: "overloaded".to_string(),
                }),
            }
        }
    }

    /// Produces a genuine `reqwest::Error` by dialing a port nothing
    /// listens on. Port 9 (discard) is unbound on any sane test host.
    async fn connect_error() -> reqwest::Error {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(200))
            .build()
            .unwrap()
            .get("http://127.0.0.1:9/")
            .send()
            .await
            .unwrap_err()
    }

    fn test_config() -> Config {
        Config {
            gemini_api_key: "test-key".to_string(),
            transcribe_url: "http://127.0.0.1:9/transcribe".to_string(),
            jobs_csv_path: "jobs.csv".to_string(),
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    async fn post_acquire(transcriber: Arc<dyn Transcriber>) -> (StatusCode, serde_json::Value) {
        let sessions = new_session_store();
        let session_id = uuid::Uuid::new_v4();
        sessions.write().await.insert(session_id, Session::new());

        let state = AppState {
            jobs: Arc::new(Vec::new()),
            sessions,
            llm: GeminiClient::new("test-key".to_string()),
            transcriber,
            config: test_config(),
        };
        let app = crate::routes::build_router(state);

        let boundary = "udaan-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"session_id\"\r\n\r\n\
             {session_id}\r\n\
             --{boundary}\r\n\
             Content-Disposition: form-data; name=\"audio\"; filename=\"clip.wav\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n\
             RIFFfake-audio-bytes\r\n\
             --{boundary}--\r\n"
        );

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/profile/acquire")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_silent_recording_returns_no_speech_code() {
        let (status, body) = post_acquire(Arc::new(FailingTranscriber(Outcome::NoSpeech))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "TRANSCRIPTION_NO_SPEECH");
    }

    #[tokio::test]
    async fn test_unreachable_service_returns_unreachable_code() {
        let (status, body) = post_acquire(Arc::new(FailingTranscriber(Outcome::Unreachable))).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "TRANSCRIPTION_UNREACHABLE");
    }

    #[tokio::test]
    async fn test_failing_service_returns_transcription_error_code() {
        let (status, body) = post_acquire(Arc::new(FailingTranscriber(Outcome::ServiceDown))).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "TRANSCRIPTION_ERROR");
    }
}

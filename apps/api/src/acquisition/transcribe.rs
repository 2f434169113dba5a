//! Speech-transcription client. The service is external (Whisper-style HTTP
//! endpoint); this module owns the seam so tests can swap in a mock.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error("no recognizable speech in the recording")]
    NoSpeech,

    #[error("transcription service unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("transcription service error (status {status}): {message}")]
    Service { status: u16, message: String },
}

/// The transcription seam. `AppState` carries an `Arc<dyn Transcriber>`.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: Bytes, filename: &str) -> Result<String, TranscribeError>;
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// Posts captured audio to the configured transcription endpoint as a
/// multipart upload and expects a `{ "text": ... }` response.
pub struct HttpTranscriber {
    client: reqwest::Client,
    url: String,
}

impl HttpTranscriber {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio: Bytes, filename: &str) -> Result<String, TranscribeError> {
        let part = reqwest::multipart::Part::bytes(audio.to_vec())
            .file_name(filename.to_string())
            .mime_str("application/octet-stream")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self.client.post(&self.url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TranscribeError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body: TranscriptionResponse =
            response.json().await.map_err(TranscribeError::Unreachable)?;

        let text = body.text.trim().to_string();
        if text.is_empty() {
            return Err(TranscribeError::NoSpeech);
        }

        debug!("Transcription produced {} characters", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic in-memory transcriber for exercising the trait seam.
    struct FixedTranscriber(Result<String, ()>);

    #[async_trait]
    impl Transcriber for FixedTranscriber {
        async fn transcribe(&self, _audio: Bytes, _filename: &str) -> Result<String, TranscribeError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(TranscribeError::NoSpeech),
            }
        }
    }

    #[tokio::test]
    async fn test_fixed_transcriber_round_trips() {
        let transcriber = FixedTranscriber(Ok("my name is Amina".to_string()));
        let text = transcriber
            .transcribe(Bytes::from_static(b"audio"), "clip.wav")
            .await
            .unwrap();
        assert_eq!(text, "my name is Amina");
    }

    #[test]
    fn test_empty_transcript_maps_to_no_speech() {
        // The HTTP client itself is exercised against a live endpoint; here we
        // pin the response-shape decision.
        let body: TranscriptionResponse = serde_json::from_str(r#"{"text": "   "}"#).unwrap();
        assert!(body.text.trim().is_empty());
    }

    #[test]
    fn test_error_display_names_the_stage() {
        let err = TranscribeError::Service {
            status: 503,
            message: "overloaded".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(TranscribeError::NoSpeech.to_string().contains("speech"));
    }
}

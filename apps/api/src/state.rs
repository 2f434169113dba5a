use std::sync::Arc;

use crate::acquisition::transcribe::Transcriber;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::models::job::JobPosting;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Job table, loaded once at startup and read-only afterwards.
    pub jobs: Arc<Vec<JobPosting>>,
    /// Session-scoped profiles and generated documents.
    pub sessions: SessionStore,
    pub llm: GeminiClient,
    /// Pluggable transcription seam. Default: HttpTranscriber against
    /// TRANSCRIBE_URL.
    pub transcriber: Arc<dyn Transcriber>,
    pub config: Config,
}

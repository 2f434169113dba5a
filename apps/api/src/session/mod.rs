//! Session-scoped state. Each interactive session owns one profile and at
//! most one generated résumé document; sessions never share state.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::profile::UserProfile;
use crate::models::resume::ResumeDocument;

/// One interactive session. Created with an empty profile; lives for the
/// process lifetime (no deletion).
#[derive(Debug, Clone)]
pub struct Session {
    pub profile: UserProfile,
    pub resume: Option<ResumeDocument>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            profile: UserProfile::default(),
            resume: None,
            created_at: Utc::now(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

pub type SessionStore = Arc<RwLock<HashMap<Uuid, Session>>>;

pub fn new_session_store() -> SessionStore {
    Arc::new(RwLock::new(HashMap::new()))
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::acquisition::handlers as acquisition;
use crate::generation::handlers as generation;
use crate::matching::handlers as matching;
use crate::report::handlers as report;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions + profile
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/profile",
            get(session::handle_get_profile).patch(session::handle_update_profile),
        )
        .route(
            "/api/v1/profile/acquire",
            post(acquisition::handle_acquire_profile),
        )
        // Resume generation + download
        .route("/api/v1/resumes", post(generation::handle_generate_resume))
        .route(
            "/api/v1/resumes/download",
            get(generation::handle_download_resume),
        )
        // Matching + analytics views
        .route("/api/v1/matches", get(matching::handle_get_matches))
        .route("/api/v1/report", get(report::handle_get_report))
        .with_state(state)
}

pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume analysis API
        .route("/api/v1/resume/extract", post(analysis::handle_extract))
        .route("/api/v1/resume/analyze", post(analysis::handle_analyze))
        .route(
            "/api/v1/resume/analyze/text",
            post(analysis::handle_analyze_text),
        )
        // Job search & interview questions API
        .route("/api/v1/jobs/search", post(jobs::handle_search_jobs))
        .route(
            "/api/v1/interview/questions",
            post(jobs::handle_interview_questions),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

pub mod health;
pub mod resume;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume", get(resume::handle_get_resume))
        .route("/api/v1/resume/report", get(resume::handle_get_report))
        .route("/api/v1/resume/pdf", post(resume::handle_export_pdf))
        .with_state(state)
}

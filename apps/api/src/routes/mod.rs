pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resumes/text", post(handlers::handle_generate_text))
        // Photo and certificate uploads exceed axum's default body limit.
        .route(
            "/api/v1/resumes/pdf",
            post(handlers::handle_generate_pdf).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/resumes/render",
            post(handlers::handle_render).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

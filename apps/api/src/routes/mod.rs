pub mod health;

use axum::{http::Uri, routing::get, routing::post, Router};

use crate::errors::AppError;
use crate::parser::handlers as parser_handlers;
use crate::state::AppState;
use crate::tailoring::handlers as tailoring_handlers;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Parser API
        .route(
            "/api/v1/jobs/parse",
            post(parser_handlers::handle_parse_job),
        )
        // Tailoring API
        .route(
            "/api/v1/jobs/tailor",
            post(tailoring_handlers::handle_tailor),
        )
        .fallback(not_found)
        .with_state(state)
}

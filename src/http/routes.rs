use super::handlers;
use super::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Interview sessions
        .route("/sessions", post(handlers::create_session))
        .route(
            "/sessions/:session_id",
            get(handlers::get_session_status).delete(handlers::end_session),
        )
        .route(
            "/sessions/:session_id/next_question",
            get(handlers::next_question),
        )
        .route("/sessions/:session_id/answer", post(handlers::submit_answer))
        .route(
            "/sessions/:session_id/answer/audio",
            post(handlers::submit_audio_answer),
        )
        .route(
            "/sessions/:session_id/feedback",
            post(handlers::generate_session_feedback),
        )
        .route(
            "/sessions/:session_id/next",
            post(handlers::acknowledge_feedback),
        )
        .route("/sessions/:session_id/history", get(handlers::get_history))
        // Stateless endpoints
        .route("/generate_feedback", post(handlers::generate_feedback))
        .route("/question/:index", get(handlers::get_question))
        // Browser front end runs on another origin
        .layer(CorsLayer::permissive())
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

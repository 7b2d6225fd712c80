//! HTTP API server for the interview front end
//!
//! This module provides a REST API for driving interview sessions:
//! - POST /sessions - Start a new interview
//! - GET /sessions/:id - Session status
//! - DELETE /sessions/:id - End a session, returning its history
//! - GET /sessions/:id/next_question - Current question (read-only)
//! - POST /sessions/:id/answer - Submit a typed answer
//! - POST /sessions/:id/answer/audio - Submit a spoken answer
//! - POST /sessions/:id/feedback - Generate feedback for the pending answer
//! - POST /sessions/:id/next - Acknowledge feedback and advance
//! - GET /sessions/:id/history - Completed answers with feedback
//! - POST /generate_feedback - Stateless feedback
//! - GET /question/:index - Question by index
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::{
    CreateSessionResponse, EndSessionResponse, ErrorResponse, FeedbackRequest, FeedbackResponse,
    QuestionResponse, SessionFeedbackResponse, SubmitAnswerRequest, SubmitAudioRequest,
    SubmitAudioResponse,
};
pub use routes::create_router;
pub use state::AppState;

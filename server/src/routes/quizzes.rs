//! Quiz endpoint routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use trivia_engine::RecordStore;

use super::method_not_allowed;
use crate::error::Result;
use crate::handlers::{handle_quiz, QuizRequest, QuizResponse};
use crate::AppState;

/// Create quiz routes.
pub fn routes<S: RecordStore + 'static>() -> Router<AppState<S>> {
    Router::new().route(
        "/quizzes",
        post(quiz_handler::<S>).fallback(method_not_allowed),
    )
}

/// POST /quizzes - Get the next unseen quiz question.
async fn quiz_handler<S: RecordStore>(
    State(state): State<AppState<S>>,
    body: std::result::Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>> {
    let Json(request) = body?;
    let response = handle_quiz(&state.bank, request).await?;
    Ok(Json(response))
}

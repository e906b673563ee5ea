//! HTTP route definitions.

mod categories;
mod health;
mod questions;
mod quizzes;

use crate::error::AppError;
use crate::AppState;
use axum::Router;
use trivia_engine::RecordStore;

/// Create all application routes.
pub fn create_routes<S: RecordStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        .merge(health::routes())
        .merge(categories::routes())
        .merge(questions::routes())
        .merge(quizzes::routes())
        .fallback(not_found)
}

/// Fallback for unknown paths.
async fn not_found() -> AppError {
    AppError::NotFound("no such route".to_string())
}

/// Fallback for known paths hit with an unsupported method.
pub(crate) async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

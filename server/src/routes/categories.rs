//! Category endpoint routes.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use trivia_engine::{CategoryId, PageParams, RecordStore};

use super::method_not_allowed;
use crate::error::Result;
use crate::handlers::{
    handle_category_questions, handle_list_categories, CategoriesResponse,
    CategoryQuestionsResponse,
};
use crate::AppState;

/// Create category routes.
pub fn routes<S: RecordStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        .route(
            "/categories",
            get(list_handler::<S>).fallback(method_not_allowed),
        )
        .route(
            "/categories/{id}/questions",
            get(questions_handler::<S>).fallback(method_not_allowed),
        )
}

/// GET /categories - List all categories.
async fn list_handler<S: RecordStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<CategoriesResponse>> {
    let response = handle_list_categories(&state.bank).await?;
    Ok(Json(response))
}

/// GET /categories/{id}/questions - List a page of one category's questions.
async fn questions_handler<S: RecordStore>(
    State(state): State<AppState<S>>,
    path: std::result::Result<Path<CategoryId>, PathRejection>,
    query: std::result::Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<CategoryQuestionsResponse>> {
    let Path(id) = path?;
    let Query(params) = query?;
    let response = handle_category_questions(&state.bank, id, params).await?;
    Ok(Json(response))
}

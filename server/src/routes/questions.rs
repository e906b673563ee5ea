//! Question endpoint routes.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use trivia_engine::{PageParams, QuestionDraft, QuestionId, RecordStore};

use super::method_not_allowed;
use crate::error::Result;
use crate::handlers::{
    handle_create, handle_delete, handle_list_questions, handle_search, CreatedResponse,
    DeletedResponse, QuestionsResponse, SearchRequest,
};
use crate::AppState;

type QueryResult = std::result::Result<Query<PageParams>, QueryRejection>;

/// Create question routes.
pub fn routes<S: RecordStore + 'static>() -> Router<AppState<S>> {
    Router::new()
        .route(
            "/questions",
            get(list_handler::<S>)
                .post(create_handler::<S>)
                .fallback(method_not_allowed),
        )
        .route(
            "/questions/search",
            post(search_handler::<S>).fallback(method_not_allowed),
        )
        .route(
            "/questions/{id}",
            delete(delete_handler::<S>).fallback(method_not_allowed),
        )
}

/// GET /questions - List a page of questions, optionally filtered by `search`.
async fn list_handler<S: RecordStore>(
    State(state): State<AppState<S>>,
    query: QueryResult,
) -> Result<Json<QuestionsResponse>> {
    let Query(params) = query?;
    let response = handle_list_questions(&state.bank, params).await?;
    Ok(Json(response))
}

/// POST /questions - Create a question.
async fn create_handler<S: RecordStore>(
    State(state): State<AppState<S>>,
    query: QueryResult,
    body: std::result::Result<Json<QuestionDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let Query(params) = query?;
    let Json(draft) = body?;
    let response = handle_create(&state.bank, draft, params).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /questions/search - Search questions by a body-supplied term.
async fn search_handler<S: RecordStore>(
    State(state): State<AppState<S>>,
    query: QueryResult,
    body: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<QuestionsResponse>> {
    let Query(params) = query?;
    let Json(request) = body?;
    let response = handle_search(&state.bank, request, params).await?;
    Ok(Json(response))
}

/// DELETE /questions/{id} - Delete a question.
async fn delete_handler<S: RecordStore>(
    State(state): State<AppState<S>>,
    path: std::result::Result<Path<QuestionId>, PathRejection>,
    query: QueryResult,
) -> Result<Json<DeletedResponse>> {
    let Path(id) = path?;
    let Query(params) = query?;
    let response = handle_delete(&state.bank, id, params).await?;
    Ok(Json(response))
}

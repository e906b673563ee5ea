//! Question handlers - list, search, create and delete.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use trivia_engine::{
    PageParams, Question, QuestionBank, QuestionDraft, QuestionId, QuestionPage, RecordStore,
};

/// Request body for an explicit search.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(alias = "searchTerm")]
    pub search: String,
}

/// Response for a page of questions.
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: u64,
}

impl From<QuestionPage> for QuestionsResponse {
    fn from(page: QuestionPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total,
        }
    }
}

/// Response for a created question.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: u64,
}

/// Response for a deleted question.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
    pub questions: Vec<Question>,
    pub total_questions: u64,
}

/// List one page of questions, optionally filtered by `params.search`.
pub async fn handle_list_questions<S: RecordStore>(
    bank: &QuestionBank<S>,
    params: PageParams,
) -> Result<QuestionsResponse> {
    let page = bank.list_questions(&params).await?;
    Ok(page.into())
}

/// Search questions by a term taken from the request body.
pub async fn handle_search<S: RecordStore>(
    bank: &QuestionBank<S>,
    request: SearchRequest,
    params: PageParams,
) -> Result<QuestionsResponse> {
    let page = bank.search_questions(&request.search, &params).await?;
    tracing::debug!(
        "Search '{}' matched {} questions",
        request.search,
        page.total
    );
    Ok(page.into())
}

/// Create a question.
pub async fn handle_create<S: RecordStore>(
    bank: &QuestionBank<S>,
    draft: QuestionDraft,
    params: PageParams,
) -> Result<CreatedResponse> {
    let created = bank.create_question(draft, &params).await?;
    tracing::info!("Created question {}", created.id);

    Ok(CreatedResponse {
        success: true,
        created: created.id,
        questions: created.page.questions,
        total_questions: created.page.total,
    })
}

/// Delete question `id`.
pub async fn handle_delete<S: RecordStore>(
    bank: &QuestionBank<S>,
    id: QuestionId,
    params: PageParams,
) -> Result<DeletedResponse> {
    let deleted = bank.delete_question(id, &params).await?;
    tracing::info!("Deleted question {}", deleted.id);

    Ok(DeletedResponse {
        success: true,
        deleted: deleted.id,
        questions: deleted.page.questions,
        total_questions: deleted.page.total,
    })
}
